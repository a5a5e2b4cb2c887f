//! Hunk header parsing and hunk body line classification.

use regex::bytes::Regex;
use std::sync::LazyLock;

use crate::file::{HunkInfo, LineKind};

/// `@@ -a[,b] +c[,d] @@[ heading]`
static HUNK_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u)^@@ -(\d+)(?:,(\d+))? \+(\d+)(?:,(\d+))? @@(?: ?(.*))?$")
        .expect("hunk header regex is valid")
});

/// Whether a line (terminator stripped) starts a hunk.
pub(super) fn is_hunk_header(line: &[u8]) -> bool {
    line.starts_with(b"@@")
}

/// Parse a hunk header line (terminator stripped).
///
/// Returns `None` if the line is not a well-formed header. An omitted
/// length means 1.
pub(super) fn parse_hunk_header(line: &[u8]) -> Option<HunkInfo> {
    let caps = HUNK_HEADER.captures(line)?;

    let number = |index: usize, default: usize| -> Option<usize> {
        match caps.get(index) {
            Some(m) => std::str::from_utf8(m.as_bytes()).ok()?.parse().ok(),
            None => Some(default),
        }
    };

    let heading = caps
        .get(5)
        .map(|m| String::from_utf8_lossy(m.as_bytes()).into_owned())
        .filter(|heading| !heading.is_empty());

    Some(HunkInfo {
        orig_start: number(1, 0)?,
        orig_len: number(2, 1)?,
        new_start: number(3, 0)?,
        new_len: number(4, 1)?,
        heading,
        insert_count: 0,
        delete_count: 0,
        orig_missing_newline: false,
        new_missing_newline: false,
    })
}

/// A classified hunk body line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum HunkLine {
    Change(LineKind),
    /// `\ No newline at end of file`
    NoNewline,
}

/// Classify a hunk body line by its leading byte.
///
/// A bare empty line is context: some tools strip the single space from
/// blank context lines.
pub(super) fn classify_line(line: &[u8]) -> Option<HunkLine> {
    match line.first() {
        Some(b' ') => Some(HunkLine::Change(LineKind::Context)),
        Some(b'-') => Some(HunkLine::Change(LineKind::Removed)),
        Some(b'+') => Some(HunkLine::Change(LineKind::Added)),
        Some(b'\\') => Some(HunkLine::NoNewline),
        None => Some(HunkLine::Change(LineKind::Context)),
        Some(_) => None,
    }
}

/// Remaining declared lengths of an open hunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct HunkProgress {
    pub orig_remaining: usize,
    pub new_remaining: usize,
}

impl HunkProgress {
    pub fn new(hunk: &HunkInfo) -> Self {
        Self {
            orig_remaining: hunk.orig_len,
            new_remaining: hunk.new_len,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.orig_remaining == 0 && self.new_remaining == 0
    }

    /// Count a line against the remaining lengths.
    ///
    /// Returns `false` if the line does not fit the declared range.
    pub fn consume(&mut self, kind: LineKind) -> bool {
        match kind {
            LineKind::Context if self.orig_remaining > 0 && self.new_remaining > 0 => {
                self.orig_remaining -= 1;
                self.new_remaining -= 1;
                true
            }
            LineKind::Removed if self.orig_remaining > 0 => {
                self.orig_remaining -= 1;
                true
            }
            LineKind::Added if self.new_remaining > 0 => {
                self.new_remaining -= 1;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_header() {
        let hunk = parse_hunk_header(b"@@ -10,2 +11,3 @@ fn main() {").unwrap();
        assert_eq!(hunk.orig_start, 10);
        assert_eq!(hunk.orig_len, 2);
        assert_eq!(hunk.new_start, 11);
        assert_eq!(hunk.new_len, 3);
        assert_eq!(hunk.heading.as_deref(), Some("fn main() {"));
    }

    #[test]
    fn omitted_lengths_default_to_one() {
        let hunk = parse_hunk_header(b"@@ -5 +7 @@").unwrap();
        assert_eq!((hunk.orig_start, hunk.orig_len), (5, 1));
        assert_eq!((hunk.new_start, hunk.new_len), (7, 1));
        assert_eq!(hunk.heading, None);
    }

    #[test]
    fn zero_length_sides() {
        let hunk = parse_hunk_header(b"@@ -0,0 +1,3 @@").unwrap();
        assert_eq!(hunk.orig_len, 0);
        assert_eq!(hunk.new_len, 3);
    }

    #[test]
    fn rejects_malformed_headers() {
        assert!(parse_hunk_header(b"@@ -a,b +c,d @@").is_none());
        assert!(parse_hunk_header(b"@@ -1,2 +3,4").is_none());
        assert!(parse_hunk_header(b"@@@ -1,2 -1,2 +1,3 @@@").is_none());
    }

    #[test]
    fn classifies_by_leading_byte() {
        assert_eq!(
            classify_line(b" context"),
            Some(HunkLine::Change(LineKind::Context))
        );
        assert_eq!(
            classify_line(b"-old"),
            Some(HunkLine::Change(LineKind::Removed))
        );
        assert_eq!(
            classify_line(b"+new"),
            Some(HunkLine::Change(LineKind::Added))
        );
        assert_eq!(
            classify_line(b"\\ No newline at end of file"),
            Some(HunkLine::NoNewline)
        );
        assert_eq!(classify_line(b""), Some(HunkLine::Change(LineKind::Context)));
        assert_eq!(classify_line(b"garbage"), None);
    }

    #[test]
    fn progress_rejects_overrun() {
        let mut progress = HunkProgress {
            orig_remaining: 1,
            new_remaining: 0,
        };
        assert!(!progress.consume(LineKind::Added));
        assert!(!progress.consume(LineKind::Context));
        assert!(progress.consume(LineKind::Removed));
        assert!(progress.is_complete());
    }
}
