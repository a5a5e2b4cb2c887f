//! diffparse: byte-precise parsing of unified and git-extended diffs.
//!
//! [`parse`] splits a diff buffer into one [`ParsedDiffFile`] per file
//! section. Concatenating every record's [`ParsedDiffFile::data`] gives
//! back the input byte for byte. Malformed input yields a [`ParseError`]
//! naming the line where parsing stopped.
//!
//! ```
//! let diff = b"diff --git a/a.txt b/a.txt\n--- a/a.txt\n+++ b/a.txt\n@@ -1 +1 @@\n-old\n+new\n";
//! let files = diffparse::parse_git(diff).unwrap();
//! assert_eq!(files[0].new_file(), "a.txt");
//! assert_eq!(files[0].insert_count(), 1);
//! ```

pub mod config;
pub mod error;
pub mod exit_codes;
pub mod file;
pub mod lines;
pub mod parser;
pub mod summary;

pub use error::{Error, ParseError};
pub use file::{ChangeKind, HunkInfo, ModeInfo, ParsedDiffFile};
pub use parser::{parse, parse_git, parse_unified, DiffFormat};
pub use summary::{DiffSummary, FileSummary};
