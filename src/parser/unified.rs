//! Plain unified diff, as produced by `diff -u`.
//!
//! A file starts at a `--- ` line immediately followed by a `+++ ` line.
//! There are no extended headers.

use crate::error::ParseError;
use crate::file::FileBuilder;
use crate::lines::LineBuffer;

use super::dialect::{split_file_header, BoundaryMatch, Dialect};

#[derive(Debug, Clone, Copy, Default)]
pub struct UnifiedDialect;

impl Dialect for UnifiedDialect {
    fn name(&self) -> &'static str {
        "unified"
    }

    fn is_boundary(&self, lines: &LineBuffer<'_>, index: usize) -> bool {
        let starts = |index: usize, prefix: &[u8]| {
            lines
                .content(index)
                .is_some_and(|line| line.starts_with(prefix))
        };
        starts(index, b"--- ") && starts(index + 1, b"+++ ")
    }

    fn begin_file(
        &self,
        lines: &LineBuffer<'_>,
        index: usize,
    ) -> Result<Option<BoundaryMatch>, ParseError> {
        if !self.is_boundary(lines, index) {
            return Ok(None);
        }

        let orig_line = lines.content(index).unwrap_or_default();
        let new_line = lines.content(index + 1).unwrap_or_default();
        let (orig_path, orig_info) = split_file_header(&orig_line[4..]);
        let (new_path, new_info) = split_file_header(&new_line[4..]);

        let mut file = FileBuilder::new(
            String::from_utf8_lossy(orig_path).into_owned(),
            String::from_utf8_lossy(new_path).into_owned(),
        );
        if let Some(info) = orig_info {
            file.set_orig_info(info);
        }
        if let Some(info) = new_info {
            file.set_new_info(info);
        }

        Ok(Some(BoundaryMatch {
            file,
            line_count: 2,
            file_header_seen: true,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_needs_both_lines() {
        let lines = LineBuffer::new(b"--- a.c\n+++ a.c\n--- b.c\nnot a header\n");
        let dialect = UnifiedDialect;
        assert!(dialect.is_boundary(&lines, 0));
        assert!(!dialect.is_boundary(&lines, 1));
        assert!(!dialect.is_boundary(&lines, 2));
        assert!(!dialect.is_boundary(&lines, 3));
        assert!(!dialect.is_boundary(&lines, 4));
    }

    #[test]
    fn begin_file_reads_paths_and_info() {
        let lines = LineBuffer::new(
            b"--- src/old.c\t2024-01-01 00:00:00 +0000\n+++ src/new.c\t2024-01-02 00:00:00 +0000\n",
        );
        let matched = UnifiedDialect.begin_file(&lines, 0).unwrap().unwrap();
        assert_eq!(matched.line_count, 2);
        assert!(matched.file_header_seen);

        let mut file = matched.file;
        file.append_data(b"x");
        let file = file.finalize();
        assert_eq!(file.orig_file(), "src/old.c");
        assert_eq!(file.new_file(), "src/new.c");
        assert_eq!(file.orig_info(), Some("2024-01-01 00:00:00 +0000"));
        assert_eq!(file.new_info(), Some("2024-01-02 00:00:00 +0000"));
    }
}
