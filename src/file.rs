//! Per-file records produced by the parser.
//!
//! A [`FileBuilder`] accumulates one file's raw section and metadata while
//! the parser walks it. [`FileBuilder::finalize`] consumes the builder and
//! returns an immutable [`ParsedDiffFile`].

use serde::Serialize;

/// Sentinel stored in `orig_info` for files created by the diff.
pub const PRE_CREATION: &str = "PRE-CREATION";

/// Git file mode for symbolic links.
pub const SYMLINK_MODE: &str = "120000";

/// Old/new file mode pair. Either side may be absent (a created file has
/// no old mode, a deleted file has no new mode).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ModeInfo {
    pub old_mode: Option<String>,
    pub new_mode: Option<String>,
}

/// Kind of a hunk body line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Context,
    Removed,
    Added,
}

/// One hunk as declared by its `@@` header, plus what was consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HunkInfo {
    pub orig_start: usize,
    pub orig_len: usize,
    pub new_start: usize,
    pub new_len: usize,
    /// Text after the closing `@@`, usually the enclosing function.
    pub heading: Option<String>,
    pub insert_count: usize,
    pub delete_count: usize,
    /// The original side's last line has no trailing newline.
    pub orig_missing_newline: bool,
    /// The new side's last line has no trailing newline.
    pub new_missing_newline: bool,
}

/// How a file was changed, derived from its flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Added,
    Deleted,
    Renamed,
    Copied,
    Modified,
}

impl ChangeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::Added => "added",
            ChangeKind::Deleted => "deleted",
            ChangeKind::Renamed => "renamed",
            ChangeKind::Copied => "copied",
            ChangeKind::Modified => "modified",
        }
    }
}

/// A finalized file section of a diff.
///
/// `data` holds the exact input bytes of the section, with the preamble
/// that preceded it at the front.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedDiffFile {
    orig_file: String,
    new_file: String,
    orig_info: Option<String>,
    new_info: Option<String>,
    orig_blob: Option<String>,
    new_blob: Option<String>,
    binary: bool,
    created: bool,
    deleted: bool,
    moved: bool,
    copied: bool,
    is_symlink: bool,
    mode_info: Option<ModeInfo>,
    similarity_percent: Option<u8>,
    dissimilarity_percent: Option<u8>,
    hunks: Vec<HunkInfo>,
    insert_count: usize,
    delete_count: usize,
    data: Vec<u8>,
    preamble_len: usize,
}

impl ParsedDiffFile {
    pub fn orig_file(&self) -> &str {
        &self.orig_file
    }

    pub fn new_file(&self) -> &str {
        &self.new_file
    }

    pub fn orig_info(&self) -> Option<&str> {
        self.orig_info.as_deref()
    }

    pub fn new_info(&self) -> Option<&str> {
        self.new_info.as_deref()
    }

    /// Content id of the original blob, from a git `index` line.
    pub fn orig_blob(&self) -> Option<&str> {
        self.orig_blob.as_deref()
    }

    /// Content id of the new blob, from a git `index` line.
    pub fn new_blob(&self) -> Option<&str> {
        self.new_blob.as_deref()
    }

    pub fn binary(&self) -> bool {
        self.binary
    }

    pub fn created(&self) -> bool {
        self.created
    }

    pub fn deleted(&self) -> bool {
        self.deleted
    }

    pub fn moved(&self) -> bool {
        self.moved
    }

    pub fn copied(&self) -> bool {
        self.copied
    }

    pub fn is_symlink(&self) -> bool {
        self.is_symlink
    }

    pub fn mode_info(&self) -> Option<&ModeInfo> {
        self.mode_info.as_ref()
    }

    pub fn similarity_percent(&self) -> Option<u8> {
        self.similarity_percent
    }

    pub fn dissimilarity_percent(&self) -> Option<u8> {
        self.dissimilarity_percent
    }

    pub fn hunks(&self) -> &[HunkInfo] {
        &self.hunks
    }

    pub fn insert_count(&self) -> usize {
        self.insert_count
    }

    pub fn delete_count(&self) -> usize {
        self.delete_count
    }

    /// Raw bytes of the preamble followed by the file section.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The preamble that preceded this file's boundary line.
    pub fn preamble(&self) -> &[u8] {
        &self.data[..self.preamble_len]
    }

    /// The file section, from the boundary line on.
    pub fn section(&self) -> &[u8] {
        &self.data[self.preamble_len..]
    }

    /// The path a reviewer would show for this file.
    pub fn display_path(&self) -> &str {
        if self.deleted {
            &self.orig_file
        } else {
            &self.new_file
        }
    }

    pub fn change_kind(&self) -> ChangeKind {
        if self.created {
            ChangeKind::Added
        } else if self.deleted {
            ChangeKind::Deleted
        } else if self.moved {
            ChangeKind::Renamed
        } else if self.copied {
            ChangeKind::Copied
        } else {
            ChangeKind::Modified
        }
    }
}

/// Mutable accumulator for one file section.
///
/// Dialects fill the metadata through `record`; content only grows through
/// [`append_data`](Self::append_data) and
/// [`prepend_data`](Self::prepend_data).
#[derive(Debug)]
pub struct FileBuilder {
    record: ParsedDiffFile,
    prepended: bool,
    rename_from: bool,
    rename_to: bool,
    copy_from: bool,
    copy_to: bool,
}

impl FileBuilder {
    pub fn new(orig_file: impl Into<String>, new_file: impl Into<String>) -> Self {
        Self {
            record: ParsedDiffFile {
                orig_file: orig_file.into(),
                new_file: new_file.into(),
                ..ParsedDiffFile::default()
            },
            prepended: false,
            rename_from: false,
            rename_to: false,
            copy_from: false,
            copy_to: false,
        }
    }

    /// Append raw bytes to the section.
    pub fn append_data(&mut self, bytes: &[u8]) {
        self.record.data.extend_from_slice(bytes);
    }

    /// Put the pending preamble in front of the section.
    ///
    /// # Panics
    ///
    /// Panics if called more than once for the same record.
    pub fn prepend_data(&mut self, preamble: Vec<u8>) {
        assert!(!self.prepended, "prepend_data called twice on one file record");
        self.prepended = true;
        self.record.preamble_len = preamble.len();

        if self.record.data.is_empty() {
            self.record.data = preamble;
        } else {
            self.record.data.splice(0..0, preamble);
        }
    }

    /// Lock the record.
    pub fn finalize(self) -> ParsedDiffFile {
        debug_assert!(
            !self.record.data.is_empty(),
            "file record finalized without content"
        );
        log::debug!(
            "finalized {} -> {} (+{} -{}, {} hunk(s))",
            self.record.orig_file,
            self.record.new_file,
            self.record.insert_count,
            self.record.delete_count,
            self.record.hunks.len()
        );
        self.record
    }

    pub fn orig_file(&self) -> &str {
        &self.record.orig_file
    }

    pub fn new_file(&self) -> &str {
        &self.record.new_file
    }

    pub fn is_created(&self) -> bool {
        self.record.created
    }

    pub fn is_deleted(&self) -> bool {
        self.record.deleted
    }

    pub fn is_moved_or_copied(&self) -> bool {
        self.rename_from || self.rename_to || self.copy_from || self.copy_to
    }

    pub fn set_orig_file(&mut self, path: String) {
        self.record.orig_file = path;
    }

    pub fn set_new_file(&mut self, path: String) {
        self.record.new_file = path;
    }

    pub fn set_orig_info(&mut self, info: String) {
        self.record.orig_info = Some(info);
    }

    pub fn set_new_info(&mut self, info: String) {
        self.record.new_info = Some(info);
    }

    pub fn has_orig_info(&self) -> bool {
        self.record.orig_info.is_some()
    }

    pub fn has_new_info(&self) -> bool {
        self.record.new_info.is_some()
    }

    pub fn set_blobs(&mut self, orig: String, new: String) {
        self.record.orig_blob = Some(orig);
        self.record.new_blob = Some(new);
    }

    pub fn mark_binary(&mut self) {
        self.record.binary = true;
    }

    pub fn mark_created(&mut self) {
        self.record.created = true;
    }

    pub fn mark_deleted(&mut self) {
        self.record.deleted = true;
    }

    pub fn set_old_mode(&mut self, mode: String) {
        self.note_symlink(&mode);
        self.record.mode_info.get_or_insert_with(ModeInfo::default).old_mode = Some(mode);
    }

    pub fn set_new_mode(&mut self, mode: String) {
        self.note_symlink(&mode);
        self.record.mode_info.get_or_insert_with(ModeInfo::default).new_mode = Some(mode);
    }

    /// Record a mode that applies to both sides, unless a mode change is
    /// already known.
    pub fn set_unchanged_mode(&mut self, mode: String) {
        self.note_symlink(&mode);
        if self.record.mode_info.is_none() {
            self.record.mode_info = Some(ModeInfo {
                old_mode: Some(mode.clone()),
                new_mode: Some(mode),
            });
        }
    }

    fn note_symlink(&mut self, mode: &str) {
        if mode == SYMLINK_MODE {
            self.record.is_symlink = true;
        }
    }

    pub fn set_similarity(&mut self, percent: u8) {
        self.record.similarity_percent = Some(percent);
    }

    pub fn set_dissimilarity(&mut self, percent: u8) {
        self.record.dissimilarity_percent = Some(percent);
    }

    pub fn rename_from(&mut self, path: String) {
        self.record.orig_file = path;
        self.rename_from = true;
        self.record.moved = self.rename_from && self.rename_to;
    }

    pub fn rename_to(&mut self, path: String) {
        self.record.new_file = path;
        self.rename_to = true;
        self.record.moved = self.rename_from && self.rename_to;
    }

    pub fn copy_from(&mut self, path: String) {
        self.record.orig_file = path;
        self.copy_from = true;
        self.record.copied = self.copy_from && self.copy_to;
    }

    pub fn copy_to(&mut self, path: String) {
        self.record.new_file = path;
        self.copy_to = true;
        self.record.copied = self.copy_from && self.copy_to;
    }

    /// Open a new hunk. Subsequent line counts go to it.
    pub fn begin_hunk(&mut self, hunk: HunkInfo) {
        self.record.hunks.push(hunk);
    }

    /// Count one consumed hunk line against the file and the open hunk.
    pub fn count_line(&mut self, kind: LineKind) {
        let hunk = self.record.hunks.last_mut();
        match kind {
            LineKind::Added => {
                self.record.insert_count += 1;
                if let Some(hunk) = hunk {
                    hunk.insert_count += 1;
                }
            }
            LineKind::Removed => {
                self.record.delete_count += 1;
                if let Some(hunk) = hunk {
                    hunk.delete_count += 1;
                }
            }
            LineKind::Context => {}
        }
    }

    /// Note that the line of `kind` just consumed had no trailing newline.
    pub fn mark_missing_newline(&mut self, kind: LineKind) {
        if let Some(hunk) = self.record.hunks.last_mut() {
            match kind {
                LineKind::Removed => hunk.orig_missing_newline = true,
                LineKind::Added => hunk.new_missing_newline = true,
                LineKind::Context => {
                    hunk.orig_missing_newline = true;
                    hunk.new_missing_newline = true;
                }
            }
        }
    }
}
