//! Tests for diff parsing.

use super::{parse, parse_git, parse_unified, DiffFormat};
use crate::error::ParseError;
use crate::file::{ChangeKind, ParsedDiffFile, PRE_CREATION};

fn git(input: &str) -> Vec<ParsedDiffFile> {
    parse_git(input.as_bytes()).unwrap()
}

fn git_err(input: &str) -> ParseError {
    parse_git(input.as_bytes()).unwrap_err()
}

fn joined(files: &[ParsedDiffFile]) -> Vec<u8> {
    files.iter().flat_map(|f| f.data().iter().copied()).collect()
}

// ============================================================================
// Basic shape
// ============================================================================

/// Zero bytes parse to zero files.
#[test]
fn test_empty_input() {
    assert!(parse_git(b"").unwrap().is_empty());
    assert!(parse_unified(b"").unwrap().is_empty());
}

/// Blank input is not an error either.
#[test]
fn test_blank_input() {
    assert!(git("\n  \n\t\n").is_empty());
}

/// Prose with no boundary is rejected at line 0.
#[test]
fn test_unrecognized_input() {
    let err = git_err("This is just a note.\nNothing to see here.\n");

    assert!(matches!(err, ParseError::NotARecognizedFormat { line: 0, .. }));
    assert_eq!(err.message(), "This does not appear to be a git diff");
}

/// The unified dialect names itself in the error.
#[test]
fn test_unrecognized_unified_input() {
    let err = parse_unified(b"hello\n").unwrap_err();
    assert_eq!(err.line(), 0);
    assert_eq!(err.message(), "This does not appear to be a unified diff");
}

// ============================================================================
// Git headers
// ============================================================================

/// A rename with no content change has no hunks and zero counts.
#[test]
fn test_pure_rename() {
    let diff = "diff --git a/a.txt b/b.txt\nsimilarity index 100%\nrename from a.txt\nrename to b.txt\n";

    let files = git(diff);

    assert_eq!(files.len(), 1);
    let file = &files[0];
    assert_eq!(file.orig_file(), "a.txt");
    assert_eq!(file.new_file(), "b.txt");
    assert!(file.moved());
    assert!(!file.copied());
    assert!(!file.deleted());
    assert_eq!(file.similarity_percent(), Some(100));
    assert_eq!(file.insert_count(), 0);
    assert_eq!(file.delete_count(), 0);
    assert!(file.hunks().is_empty());
    assert_eq!(file.data(), diff.as_bytes());
    assert_eq!(file.change_kind(), ChangeKind::Renamed);
}

/// One removed and one added line.
#[test]
fn test_hunk_counting() {
    let diff = "diff --git a/foo.txt b/foo.txt\nindex e69de29..4b825dc 100644\n--- a/foo.txt\n+++ b/foo.txt\n@@ -1,1 +1,1 @@\n-old\n+new\n";

    let files = git(diff);

    assert_eq!(files.len(), 1);
    let file = &files[0];
    assert_eq!(file.orig_file(), "foo.txt");
    assert_eq!(file.new_file(), "foo.txt");
    assert_eq!(file.insert_count(), 1);
    assert_eq!(file.delete_count(), 1);
    assert_eq!(file.orig_info(), Some("e69de29"));
    assert_eq!(file.new_info(), Some("4b825dc"));
    assert_eq!(file.orig_blob(), Some("e69de29"));
    assert_eq!(file.new_blob(), Some("4b825dc"));
    assert_eq!(file.hunks().len(), 1);
    assert_eq!(file.data(), diff.as_bytes());

    let modes = file.mode_info().unwrap();
    assert_eq!(modes.old_mode.as_deref(), Some("100644"));
    assert_eq!(modes.new_mode.as_deref(), Some("100644"));
    assert_eq!(file.change_kind(), ChangeKind::Modified);
}

/// A new file is marked created, with the pre-creation sentinel.
#[test]
fn test_new_file() {
    let diff = r#"diff --git a/src/new.rs b/src/new.rs
new file mode 100644
index 0000000..abc1234
--- /dev/null
+++ b/src/new.rs
@@ -0,0 +1,2 @@
+pub fn hello() {}
+
"#;

    let files = git(diff);

    let file = &files[0];
    assert!(file.created());
    assert_eq!(file.orig_file(), "src/new.rs");
    assert_eq!(file.new_file(), "src/new.rs");
    assert_eq!(file.orig_info(), Some(PRE_CREATION));
    assert_eq!(file.new_info(), Some("abc1234"));
    assert_eq!(file.insert_count(), 2);
    assert_eq!(file.delete_count(), 0);
    assert_eq!(file.change_kind(), ChangeKind::Added);

    let modes = file.mode_info().unwrap();
    assert_eq!(modes.old_mode, None);
    assert_eq!(modes.new_mode.as_deref(), Some("100644"));
}

/// `+++ /dev/null` keeps the path from the boundary line.
#[test]
fn test_deleted_file() {
    let diff = r#"diff --git a/old.rs b/old.rs
deleted file mode 100644
index abc1234..0000000
--- a/old.rs
+++ /dev/null
@@ -1,2 +0,0 @@
-fn gone() {}
-
"#;

    let files = git(diff);

    let file = &files[0];
    assert!(file.deleted());
    assert!(!file.moved());
    assert_eq!(file.orig_file(), "old.rs");
    assert_eq!(file.new_file(), "old.rs");
    assert_eq!(file.delete_count(), 2);
    assert_eq!(file.display_path(), "old.rs");
    assert_eq!(file.change_kind(), ChangeKind::Deleted);
}

/// A mode change with no content is a file of its own.
#[test]
fn test_mode_change_only() {
    let diff = r#"diff --git a/run.sh b/run.sh
old mode 100644
new mode 100755
diff --git a/lib.rs b/lib.rs
index 1111111..2222222 100644
--- a/lib.rs
+++ b/lib.rs
@@ -1 +1 @@
-a
+b
"#;

    let files = git(diff);

    assert_eq!(files.len(), 2);
    let modes = files[0].mode_info().unwrap();
    assert_eq!(modes.old_mode.as_deref(), Some("100644"));
    assert_eq!(modes.new_mode.as_deref(), Some("100755"));
    assert!(files[0].hunks().is_empty());
    assert_eq!(files[1].new_file(), "lib.rs");
    assert_eq!(joined(&files), diff.as_bytes());
}

/// Copy headers set `copied` and the similarity.
#[test]
fn test_copy() {
    let diff = r#"diff --git a/a.c b/b.c
similarity index 90%
copy from a.c
copy to b.c
index 1234567..89abcde 100644
--- a/a.c
+++ b/b.c
@@ -1,2 +1,2 @@
 int x;
-int y;
+long y;
"#;

    let files = git(diff);

    let file = &files[0];
    assert!(file.copied());
    assert!(!file.moved());
    assert_eq!(file.orig_file(), "a.c");
    assert_eq!(file.new_file(), "b.c");
    assert_eq!(file.similarity_percent(), Some(90));
    assert_eq!(file.insert_count(), 1);
    assert_eq!(file.delete_count(), 1);
    assert_eq!(file.change_kind(), ChangeKind::Copied);
}

/// Header lines are matched one by one, in any order.
#[test]
fn test_header_order_is_not_fixed() {
    let diff = r#"diff --git a/x.txt b/y.txt
index abc1234..def5678 100644
rename to y.txt
similarity index 80%
rename from x.txt
--- a/x.txt
+++ b/y.txt
@@ -1 +1 @@
-1
+2
"#;

    let files = git(diff);

    let file = &files[0];
    assert!(file.moved());
    assert_eq!(file.orig_file(), "x.txt");
    assert_eq!(file.new_file(), "y.txt");
    assert_eq!(file.similarity_percent(), Some(80));
}

/// Symlinks are flagged from their mode.
#[test]
fn test_symlink() {
    let diff = r#"diff --git a/link b/link
new file mode 120000
index 0000000..1de5659
--- /dev/null
+++ b/link
@@ -0,0 +1 @@
+target
\ No newline at end of file
"#;

    let files = git(diff);

    assert!(files[0].is_symlink());
    assert!(files[0].hunks()[0].new_missing_newline);
}

/// Quoted paths on the boundary line are decoded.
#[test]
fn test_quoted_paths() {
    let diff = "diff --git \"a/my file.txt\" \"b/my file.txt\"\nindex 1111111..2222222 100644\n--- \"a/my file.txt\"\n+++ \"b/my file.txt\"\n@@ -1 +1 @@\n-a\n+b\n";

    let files = git(diff);

    assert_eq!(files[0].orig_file(), "my file.txt");
    assert_eq!(files[0].new_file(), "my file.txt");
}

// ============================================================================
// Binary files
// ============================================================================

/// `Binary files ... differ` marks the file and ends it.
#[test]
fn test_binary_files_line() {
    let diff = r#"diff --git a/logo.png b/logo.png
index 1111111..2222222 100644
Binary files a/logo.png and b/logo.png differ
diff --git a/x.txt b/x.txt
index 3333333..4444444 100644
--- a/x.txt
+++ b/x.txt
@@ -1 +1 @@
-x
+y
"#;

    let files = git(diff);

    assert_eq!(files.len(), 2);
    assert!(files[0].binary());
    assert!(files[0].hunks().is_empty());
    assert_eq!(files[0].insert_count(), 0);
    assert!(!files[1].binary());
    assert_eq!(files[1].insert_count(), 1);
    assert!(files[1].preamble().is_empty());
    assert_eq!(joined(&files), diff.as_bytes());
}

/// A `GIT binary patch` payload stays with its file.
#[test]
fn test_git_binary_patch() {
    let diff = r#"diff --git a/icon.bin b/icon.bin
new file mode 100644
index 0000000000000000000000000000000000000000..9a3e1b5e0a4e2f3c6d7b8e9f0a1b2c3d4e5f6a7b
GIT binary patch
literal 5
McmZQzWMXCj00000

literal 0
HcmV?d00001

diff --git a/b.txt b/b.txt
index 1111111..2222222 100644
--- a/b.txt
+++ b/b.txt
@@ -1 +1 @@
-old
+new
"#;

    let files = git(diff);

    assert_eq!(files.len(), 2);
    assert!(files[0].binary());
    assert!(files[0].created());
    let section = String::from_utf8(files[0].section().to_vec()).unwrap();
    assert!(section.ends_with("HcmV?d00001\n\n"));
    assert!(files[1].preamble().is_empty());
    assert_eq!(files[1].insert_count(), 1);
    assert_eq!(joined(&files), diff.as_bytes());
}

// ============================================================================
// Hunks
// ============================================================================

/// Several hunks in one file, each with its range and heading.
#[test]
fn test_multiple_hunks() {
    let diff = r#"diff --git a/src/main.rs b/src/main.rs
index abc1234..def5678 100644
--- a/src/main.rs
+++ b/src/main.rs
@@ -5,3 +5,4 @@ fn main() {
     let a = 1;
+    let b = 2;
     let c = 3;
     let d = 4;
@@ -20,2 +21,1 @@ fn helper() {
-    old();
     keep();
"#;

    let files = git(diff);

    let file = &files[0];
    assert_eq!(file.hunks().len(), 2);

    let first = &file.hunks()[0];
    assert_eq!((first.orig_start, first.orig_len), (5, 3));
    assert_eq!((first.new_start, first.new_len), (5, 4));
    assert_eq!(first.heading.as_deref(), Some("fn main() {"));
    assert_eq!(first.insert_count, 1);

    let second = &file.hunks()[1];
    assert_eq!(second.orig_start, 20);
    assert_eq!(second.delete_count, 1);

    assert_eq!(file.insert_count(), 1);
    assert_eq!(file.delete_count(), 1);
    let hunk_inserts: usize = file.hunks().iter().map(|h| h.insert_count).sum();
    assert_eq!(hunk_inserts, file.insert_count());
}

/// Lines that look like file headers inside a hunk are hunk lines.
#[test]
fn test_header_lookalikes_inside_hunk() {
    let diff = r#"diff --git a/notes.md b/notes.md
index 1111111..2222222 100644
--- a/notes.md
+++ b/notes.md
@@ -1,2 +1,2 @@
--- old rule
+++ new rule
 tail
"#;

    let files = git(diff);

    assert_eq!(files[0].delete_count(), 1);
    assert_eq!(files[0].insert_count(), 1);
}

/// Missing trailing newlines are recorded per side.
#[test]
fn test_no_newline_markers() {
    let diff = "diff --git a/a b/a\nindex 1111111..2222222 100644\n--- a/a\n+++ b/a\n@@ -1 +1 @@\n-old\n\\ No newline at end of file\n+new\n\\ No newline at end of file\n";

    let files = git(diff);

    let file = &files[0];
    assert_eq!(file.insert_count(), 1);
    assert_eq!(file.delete_count(), 1);
    assert!(file.hunks()[0].orig_missing_newline);
    assert!(file.hunks()[0].new_missing_newline);
    assert_eq!(file.data(), diff.as_bytes());
}

/// A bare empty line counts as blank context.
#[test]
fn test_empty_context_line() {
    let diff = "diff --git a/a b/a\n--- a/a\n+++ b/a\n@@ -1,3 +1,3 @@\n a\n\n-b\n+c\n";

    let files = git(diff);

    assert_eq!(files[0].insert_count(), 1);
    assert_eq!(files[0].delete_count(), 1);
}

/// CRLF line endings are kept byte for byte.
#[test]
fn test_crlf_round_trip() {
    let diff = "diff --git a/w.txt b/w.txt\r\nindex 1111111..2222222 100644\r\n--- a/w.txt\r\n+++ b/w.txt\r\n@@ -1,2 +1,2 @@\r\n keep\r\n-old\r\n+new\r\n";

    let files = git(diff);

    assert_eq!(files[0].new_file(), "w.txt");
    assert_eq!(files[0].insert_count(), 1);
    assert_eq!(files[0].data(), diff.as_bytes());
}

// ============================================================================
// Preamble and round-trip
// ============================================================================

/// Two boundaries back to back make two records.
#[test]
fn test_multi_file_adjacent_boundaries() {
    let diff = "diff --git a/a.txt b/a.txt\ndiff --git a/b.txt b/b.txt\n";

    let files = git(diff);

    assert_eq!(files.len(), 2);
    assert_eq!(files[0].data(), b"diff --git a/a.txt b/a.txt\n");
    assert!(files[1].preamble().is_empty());
    assert_eq!(files[1].new_file(), "b.txt");
}

/// Text before the first boundary is the first file's preamble.
#[test]
fn test_leading_preamble() {
    let header = "From 1234 Mon Sep 17 00:00:00 2001\nSubject: [PATCH] fix\n\n---\n foo.txt | 2 +-\n\n";
    let body = "diff --git a/foo.txt b/foo.txt\nindex 1111111..2222222 100644\n--- a/foo.txt\n+++ b/foo.txt\n@@ -1 +1 @@\n-a\n+b\n";
    let diff = format!("{header}{body}");

    let files = git(&diff);

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].preamble(), header.as_bytes());
    assert_eq!(files[0].section(), body.as_bytes());
    assert_eq!(joined(&files), diff.as_bytes());
}

/// Trailing text after the last hunk stays in order at the end.
#[test]
fn test_trailing_bytes_round_trip() {
    let diff = "diff --git a/a b/a\n--- a/a\n+++ b/a\n@@ -1 +1 @@\n-x\n+y\n-- \n2.40.0\n\n";

    let files = git(diff);

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].insert_count(), 1);
    assert_eq!(files[0].data(), diff.as_bytes());
}

/// Text between one file's hunks and the next boundary moves forward.
#[test]
fn test_interstitial_text_goes_to_next_file() {
    let diff = "diff --git a/a b/a\n--- a/a\n+++ b/a\n@@ -1 +1 @@\n-x\n+y\nstray note\ndiff --git a/b b/b\n";

    let files = git(diff);

    assert_eq!(files.len(), 2);
    assert_eq!(files[1].preamble(), b"stray note\n");
    assert_eq!(joined(&files), diff.as_bytes());
}

/// Input without a final newline round-trips too.
#[test]
fn test_unterminated_last_line() {
    let diff = "diff --git a/a b/a\n--- a/a\n+++ b/a\n@@ -1 +1 @@\n-x\n+y";

    let files = git(diff);

    assert_eq!(files[0].insert_count(), 1);
    assert_eq!(files[0].data(), diff.as_bytes());
}

// ============================================================================
// Errors
// ============================================================================

/// The declared range is not met before the end of input.
#[test]
fn test_truncated_hunk() {
    let diff = "diff --git a/foo.txt b/foo.txt\n--- a/foo.txt\n+++ b/foo.txt\n@@ -1,3 +1,3 @@\n line one\n";

    let err = git_err(diff);

    assert!(matches!(err, ParseError::TruncatedHunk { line: 5, .. }), "{err:?}");
}

/// Input ending right after a hunk header is truncated at the header.
#[test]
fn test_truncated_after_header() {
    let err = git_err("diff --git a/f b/f\n--- a/f\n+++ b/f\n@@ -1 +1 @@\n");
    assert!(matches!(err, ParseError::TruncatedHunk { line: 4, .. }), "{err:?}");
}

/// A new boundary inside an unfinished hunk.
#[test]
fn test_boundary_inside_hunk() {
    let diff = "diff --git a/f.txt b/f.txt\n--- a/f.txt\n+++ b/f.txt\n@@ -1,3 +1,3 @@\n one\ndiff --git a/g.txt b/g.txt\n";

    let err = git_err(diff);

    assert!(matches!(err, ParseError::TruncatedHunk { line: 5, .. }), "{err:?}");
}

/// An unclassifiable line inside a hunk.
#[test]
fn test_malformed_hunk_line() {
    let diff = "diff --git a/f.txt b/f.txt\n--- a/f.txt\n+++ b/f.txt\n@@ -1,2 +1,2 @@\n ctx\nxbad\n";

    let err = git_err(diff);

    assert!(matches!(err, ParseError::MalformedHunk { line: 6, .. }), "{err:?}");
}

/// A removed line after the original side is exhausted.
#[test]
fn test_hunk_range_overrun() {
    let diff = "diff --git a/f.txt b/f.txt\n--- a/f.txt\n+++ b/f.txt\n@@ -1,1 +1,1 @@\n-old\n-another\n";

    let err = git_err(diff);

    assert!(matches!(err, ParseError::MalformedHunk { line: 6, .. }), "{err:?}");
}

/// A hunk header that does not parse.
#[test]
fn test_invalid_hunk_header() {
    let err = git_err("diff --git a/f b/f\n--- a/f\n+++ b/f\n@@ -x +y @@\n");
    assert!(matches!(err, ParseError::MalformedHunk { line: 4, .. }), "{err:?}");
}

/// `+++` with no `---` before it.
#[test]
fn test_lone_plus_line() {
    let err = git_err("diff --git a/f b/f\n+++ b/f\n");
    assert!(matches!(err, ParseError::MalformedHeader { line: 2, .. }), "{err:?}");
}

/// `---` with no `+++` after it.
#[test]
fn test_minus_without_plus() {
    let err = git_err("diff --git a/f b/f\n--- a/f\n@@ -1 +1 @@\n");
    assert!(matches!(err, ParseError::MalformedHeader { line: 2, .. }), "{err:?}");
}

/// Hunks need the `---`/`+++` pair first.
#[test]
fn test_hunk_before_file_header() {
    let err = git_err("diff --git a/f b/f\nindex 1111111..2222222 100644\n@@ -1 +1 @@\n");
    assert!(matches!(err, ParseError::MalformedHeader { line: 3, .. }), "{err:?}");
}

/// A second `---`/`+++` pair before any hunk.
#[test]
fn test_duplicate_file_header() {
    let err = git_err("diff --git a/f b/f\n--- a/f\n+++ b/f\n--- a/f\n+++ b/f\n");
    assert!(matches!(err, ParseError::MalformedHeader { line: 4, .. }), "{err:?}");
}

/// Deleted files cannot also be renamed.
#[test]
fn test_deleted_and_renamed() {
    let err = git_err("diff --git a/a b/b\ndeleted file mode 100644\nrename from a\n");
    assert!(matches!(err, ParseError::MalformedHeader { line: 3, .. }), "{err:?}");
}

/// Created and deleted conflict whichever header comes first.
#[test]
fn test_created_and_deleted_either_order() {
    let err = git_err("diff --git a/x b/x\nnew file mode 100644\ndeleted file mode 100644\n");
    assert!(matches!(err, ParseError::MalformedHeader { line: 3, .. }), "{err:?}");

    let err = git_err("diff --git a/x b/x\ndeleted file mode 100644\nnew file mode 100644\n");
    assert!(matches!(err, ParseError::MalformedHeader { line: 3, .. }), "{err:?}");
}

/// A known header with a bad value.
#[test]
fn test_bad_similarity_value() {
    let err = git_err("diff --git a/a b/b\nsimilarity index abc\n");
    assert!(matches!(err, ParseError::MalformedHeader { line: 2, .. }), "{err:?}");
}

/// A boundary line with no recognizable paths.
#[test]
fn test_unparsable_boundary() {
    let err = git_err("diff --git nothing\n");
    assert!(matches!(err, ParseError::MalformedHeader { line: 1, .. }), "{err:?}");
}

// ============================================================================
// Unified dialect
// ============================================================================

/// `diff -u` output with timestamps.
#[test]
fn test_unified_basic() {
    let diff = "--- a.txt\t2024-01-01 10:00:00.000000000 +0000\n+++ b.txt\t2024-01-02 10:00:00.000000000 +0000\n@@ -1,2 +1,2 @@\n a\n-b\n+c\n";

    let files = parse_unified(diff.as_bytes()).unwrap();

    assert_eq!(files.len(), 1);
    let file = &files[0];
    assert_eq!(file.orig_file(), "a.txt");
    assert_eq!(file.new_file(), "b.txt");
    assert_eq!(file.orig_info(), Some("2024-01-01 10:00:00.000000000 +0000"));
    assert_eq!(file.new_info(), Some("2024-01-02 10:00:00.000000000 +0000"));
    assert_eq!(file.insert_count(), 1);
    assert_eq!(file.delete_count(), 1);
    assert_eq!(file.data(), diff.as_bytes());
}

/// Removed `-- x` and added `++ y` lines inside a hunk are not boundaries.
#[test]
fn test_unified_lookalike_lines() {
    let diff = "--- notes\n+++ notes\n@@ -1,2 +1,2 @@\n--- foo\n+++ bar\n a\n--- other\n+++ other\n@@ -1 +1 @@\n-x\n+y\n";

    let files = parse_unified(diff.as_bytes()).unwrap();

    assert_eq!(files.len(), 2);
    assert_eq!(files[0].delete_count(), 1);
    assert_eq!(files[0].insert_count(), 1);
    assert_eq!(files[1].orig_file(), "other");
    assert_eq!(joined(&files), diff.as_bytes());
}

/// A unified boundary that overruns the open hunk truncates it.
#[test]
fn test_unified_boundary_inside_hunk() {
    let diff = "--- a\n+++ a\n@@ -1,1 +1,3 @@\n x\n--- b\n+++ b\n@@ -1 +1 @@\n-x\n+y\n";

    let err = parse_unified(diff.as_bytes()).unwrap_err();

    assert!(matches!(err, ParseError::TruncatedHunk { line: 4, .. }), "{err:?}");
}

/// A unified boundary that fits the range but cannot finish the hunk.
#[test]
fn test_unified_boundary_leaves_hunk_unfinished() {
    let diff = "--- a\n+++ a\n@@ -1,3 +1,3 @@\n x\n--- b\n+++ b\n@@ -1 +1 @@\n-x\n+y\n";

    let err = parse_unified(diff.as_bytes()).unwrap_err();

    assert!(matches!(err, ParseError::TruncatedHunk { line: 4, .. }), "{err:?}");
}

/// Git output parsed as unified keeps the git lines as preamble.
#[test]
fn test_git_diff_as_unified() {
    let diff = "diff --git a/foo.txt b/foo.txt\nindex e69de29..4b825dc 100644\n--- a/foo.txt\n+++ b/foo.txt\n@@ -1,1 +1,1 @@\n-old\n+new\n";

    let files = parse(diff.as_bytes(), DiffFormat::Unified).unwrap();

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].orig_file(), "a/foo.txt");
    assert_eq!(
        files[0].preamble(),
        b"diff --git a/foo.txt b/foo.txt\nindex e69de29..4b825dc 100644\n"
    );
    assert_eq!(files[0].insert_count(), 1);
}

/// Format selectors resolve to dialects.
#[test]
fn test_format_selector() {
    assert_eq!(DiffFormat::from_str("git"), Some(DiffFormat::Git));
    assert_eq!(DiffFormat::from_str("unified"), Some(DiffFormat::Unified));
    assert_eq!(DiffFormat::from_str("diff"), Some(DiffFormat::Unified));
    assert_eq!(DiffFormat::from_str("svn"), None);
    assert_eq!(DiffFormat::default(), DiffFormat::Git);
    assert_eq!(DiffFormat::Unified.as_str(), "unified");
}
