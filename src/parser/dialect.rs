//! The seam between the generic state machine and a diff dialect.

use crate::error::ParseError;
use crate::file::FileBuilder;
use crate::lines::LineBuffer;

/// A recognized file boundary.
#[derive(Debug)]
pub struct BoundaryMatch {
    /// The new record, with provisional paths filled in.
    pub file: FileBuilder,
    /// How many lines the boundary spans, starting at the matched line.
    pub line_count: usize,
    /// Whether the `---`/`+++` pair was part of the boundary.
    pub file_header_seen: bool,
}

/// Which side of the diff a path belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Orig,
    New,
}

/// A line announcing binary content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryMarker {
    /// `Binary files X and Y differ`: a single line, no payload.
    Summary,
    /// `GIT binary patch`: payload follows until the next boundary.
    Patch,
}

/// Format-specific behavior layered over the base parser.
///
/// Line arguments have their terminator stripped.
pub trait Dialect {
    /// Human-readable name, used in error messages.
    fn name(&self) -> &'static str;

    /// Whether line `index` starts a new file section.
    fn is_boundary(&self, lines: &LineBuffer<'_>, index: usize) -> bool;

    /// Start a new record at line `index`.
    ///
    /// Returns `Ok(None)` if the line is not a boundary.
    fn begin_file(
        &self,
        lines: &LineBuffer<'_>,
        index: usize,
    ) -> Result<Option<BoundaryMatch>, ParseError>;

    /// Try an extended header line against the current record.
    ///
    /// Returns `Ok(true)` if the line was a header and has been applied.
    /// Unrecognized lines return `Ok(false)` and end the header phase.
    fn parse_header_line(
        &self,
        _line: &[u8],
        _line_number: usize,
        _file: &mut FileBuilder,
    ) -> Result<bool, ParseError> {
        Ok(false)
    }

    /// Map the path from a `---`/`+++` line to a record path.
    ///
    /// `None` means the line names no file (for example `/dev/null`) and
    /// the boundary path stays.
    fn revision_path(&self, raw: &[u8], _side: Side) -> Option<String> {
        Some(String::from_utf8_lossy(raw).into_owned())
    }

    /// Whether the line announces binary content.
    fn binary_marker(&self, line: &[u8]) -> Option<BinaryMarker> {
        if is_binary_files_line(line) {
            Some(BinaryMarker::Summary)
        } else {
            None
        }
    }
}

/// `Binary files X and Y differ`
pub(super) fn is_binary_files_line(line: &[u8]) -> bool {
    line.starts_with(b"Binary files ") && line.ends_with(b" differ")
}

/// Split the remainder of a `---`/`+++` line into the path and the
/// revision info that follows the first tab.
pub(super) fn split_file_header(rest: &[u8]) -> (&[u8], Option<String>) {
    match rest.iter().position(|byte| *byte == b'\t') {
        Some(tab) => {
            let info = String::from_utf8_lossy(&rest[tab + 1..]).trim().to_string();
            let info = if info.is_empty() { None } else { Some(info) };
            (&rest[..tab], info)
        }
        None => (rest, None),
    }
}
