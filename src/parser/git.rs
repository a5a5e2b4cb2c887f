//! The git dialect: `diff --git` boundaries and extended headers.

use crate::error::ParseError;
use crate::file::{FileBuilder, PRE_CREATION};
use crate::lines::LineBuffer;

use super::dialect::{is_binary_files_line, BinaryMarker, BoundaryMatch, Dialect, Side};
use super::helpers::{is_hex_id, is_octal_mode, parse_percent, strip_side_prefix, unquote_c_style};

const BOUNDARY_PREFIX: &[u8] = b"diff --git ";
const BINARY_PATCH: &[u8] = b"GIT binary patch";
const DEV_NULL: &[u8] = b"/dev/null";

/// One extended header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitHeader {
    NewFileMode(String),
    DeletedFileMode(String),
    OldMode(String),
    NewMode(String),
    SimilarityIndex(u8),
    DissimilarityIndex(u8),
    RenameFrom(String),
    RenameTo(String),
    CopyFrom(String),
    CopyTo(String),
    Index {
        orig: String,
        new: String,
        mode: Option<String>,
    },
}

impl GitHeader {
    /// Match a line against the known header kinds.
    ///
    /// `Ok(None)` means the line is not an extended header at all. A line
    /// that starts like a header but has a bad value is an error.
    pub fn parse(line: &[u8], line_number: usize) -> Result<Option<Self>, ParseError> {
        let bad = |what: &str| {
            ParseError::malformed_header(
                format!(
                    "invalid {} header '{}'",
                    what,
                    String::from_utf8_lossy(line)
                ),
                line_number,
            )
        };

        let mode = |rest: &[u8], what: &str| -> Result<String, ParseError> {
            if is_octal_mode(rest) {
                Ok(String::from_utf8_lossy(rest).into_owned())
            } else {
                Err(bad(what))
            }
        };

        let path = |rest: &[u8], what: &str| -> Result<String, ParseError> {
            if rest.is_empty() {
                return Err(bad(what));
            }
            Ok(header_path(rest))
        };

        let header = if let Some(rest) = line.strip_prefix(b"new file mode ") {
            GitHeader::NewFileMode(mode(rest, "new file mode")?)
        } else if let Some(rest) = line.strip_prefix(b"deleted file mode ") {
            GitHeader::DeletedFileMode(mode(rest, "deleted file mode")?)
        } else if let Some(rest) = line.strip_prefix(b"old mode ") {
            GitHeader::OldMode(mode(rest, "old mode")?)
        } else if let Some(rest) = line.strip_prefix(b"new mode ") {
            GitHeader::NewMode(mode(rest, "new mode")?)
        } else if let Some(rest) = line.strip_prefix(b"similarity index ") {
            GitHeader::SimilarityIndex(parse_percent(rest).ok_or_else(|| bad("similarity index"))?)
        } else if let Some(rest) = line.strip_prefix(b"dissimilarity index ") {
            GitHeader::DissimilarityIndex(
                parse_percent(rest).ok_or_else(|| bad("dissimilarity index"))?,
            )
        } else if let Some(rest) = line.strip_prefix(b"rename from ") {
            GitHeader::RenameFrom(path(rest, "rename from")?)
        } else if let Some(rest) = line.strip_prefix(b"rename to ") {
            GitHeader::RenameTo(path(rest, "rename to")?)
        } else if let Some(rest) = line.strip_prefix(b"copy from ") {
            GitHeader::CopyFrom(path(rest, "copy from")?)
        } else if let Some(rest) = line.strip_prefix(b"copy to ") {
            GitHeader::CopyTo(path(rest, "copy to")?)
        } else if let Some(rest) = line.strip_prefix(b"index ") {
            parse_index(rest).ok_or_else(|| bad("index"))?
        } else {
            return Ok(None);
        };

        Ok(Some(header))
    }

    /// Apply the header to the record being built.
    pub fn apply(self, file: &mut FileBuilder, line_number: usize) -> Result<(), ParseError> {
        match self {
            GitHeader::NewFileMode(mode) => {
                if file.is_deleted() {
                    return Err(ParseError::malformed_header(
                        format!("'{}' cannot be both created and deleted", file.new_file()),
                        line_number,
                    ));
                }
                file.mark_created();
                file.set_new_mode(mode);
                file.set_orig_info(PRE_CREATION.to_string());
            }
            GitHeader::DeletedFileMode(mode) => {
                if file.is_created() {
                    return Err(ParseError::malformed_header(
                        format!("'{}' cannot be both created and deleted", file.orig_file()),
                        line_number,
                    ));
                }
                if file.is_moved_or_copied() {
                    return Err(delete_conflict(file, line_number));
                }
                file.mark_deleted();
                file.set_old_mode(mode);
            }
            GitHeader::OldMode(mode) => file.set_old_mode(mode),
            GitHeader::NewMode(mode) => file.set_new_mode(mode),
            GitHeader::SimilarityIndex(percent) => file.set_similarity(percent),
            GitHeader::DissimilarityIndex(percent) => file.set_dissimilarity(percent),
            GitHeader::RenameFrom(_)
            | GitHeader::RenameTo(_)
            | GitHeader::CopyFrom(_)
            | GitHeader::CopyTo(_)
                if file.is_deleted() =>
            {
                return Err(delete_conflict(file, line_number));
            }
            GitHeader::RenameFrom(path) => file.rename_from(path),
            GitHeader::RenameTo(path) => file.rename_to(path),
            GitHeader::CopyFrom(path) => file.copy_from(path),
            GitHeader::CopyTo(path) => file.copy_to(path),
            GitHeader::Index { orig, new, mode } => {
                if !file.has_orig_info() {
                    file.set_orig_info(orig.clone());
                }
                if !file.has_new_info() {
                    file.set_new_info(new.clone());
                }
                file.set_blobs(orig, new);
                if let Some(mode) = mode {
                    file.set_unchanged_mode(mode);
                }
            }
        }

        Ok(())
    }
}

fn delete_conflict(file: &FileBuilder, line_number: usize) -> ParseError {
    ParseError::malformed_header(
        format!(
            "'{}' cannot be both deleted and renamed or copied",
            file.orig_file()
        ),
        line_number,
    )
}

/// `<orig>..<new>[ <mode>]`
fn parse_index(rest: &[u8]) -> Option<GitHeader> {
    let text = std::str::from_utf8(rest).ok()?;
    let mut parts = text.split(' ');
    let range = parts.next()?;
    let mode = parts.next();
    if parts.next().is_some() {
        return None;
    }

    let (orig, new) = range.split_once("..")?;
    if !is_hex_id(orig) || !is_hex_id(new) {
        return None;
    }
    if let Some(mode) = mode {
        if !is_octal_mode(mode.as_bytes()) {
            return None;
        }
    }

    Some(GitHeader::Index {
        orig: orig.to_string(),
        new: new.to_string(),
        mode: mode.map(str::to_string),
    })
}

/// Paths in rename/copy headers carry no side prefix but may be quoted.
fn header_path(raw: &[u8]) -> String {
    match unquote_c_style(raw) {
        Some(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        None => String::from_utf8_lossy(raw).into_owned(),
    }
}

/// Split the remainder of a `diff --git` line into the two paths, with
/// side prefixes removed.
pub(super) fn parse_boundary_paths(rest: &[u8]) -> Option<(String, String)> {
    let (orig, new) = split_boundary(rest)?;
    Some((side_path(&orig, b"a/"), side_path(&new, b"b/")))
}

fn side_path(raw: &[u8], prefix: &[u8]) -> String {
    String::from_utf8_lossy(strip_side_prefix(raw, prefix)).into_owned()
}

fn split_boundary(rest: &[u8]) -> Option<(Vec<u8>, Vec<u8>)> {
    // Quoted orig path: `"a/x y" b/z` or `"a/x y" "b/x y"`.
    if rest.first() == Some(&b'"') {
        let end = closing_quote(rest)?;
        let orig = unquote_c_style(&rest[..=end])?;
        let new = rest[end + 1..].strip_prefix(b" ")?;
        return Some((orig, unquote_or_raw(new)?));
    }

    // Quoted new path only: `a/x "b/x y"`.
    if rest.last() == Some(&b'"') {
        if let Some(space) = find_subslice(rest, b" \"") {
            let new = unquote_c_style(&rest[space + 1..])?;
            return Some((rest[..space].to_vec(), new));
        }
    }

    let candidates: Vec<usize> = rest
        .iter()
        .enumerate()
        .filter(|(_, byte)| **byte == b' ')
        .map(|(index, _)| index)
        .collect();
    if candidates.is_empty() {
        return None;
    }

    // Same path on both sides is by far the common case, and is the only
    // unambiguous split when a path contains spaces.
    let symmetric = candidates.iter().copied().find(|&space| {
        let orig = strip_side_prefix(&rest[..space], b"a/");
        let new = strip_side_prefix(&rest[space + 1..], b"b/");
        orig == new
    });

    let split = symmetric.or_else(|| {
        candidates
            .iter()
            .rev()
            .copied()
            .find(|&space| rest[space + 1..].starts_with(b"b/"))
    });
    let split = split.unwrap_or(candidates[0]);

    Some((rest[..split].to_vec(), rest[split + 1..].to_vec()))
}

fn unquote_or_raw(raw: &[u8]) -> Option<Vec<u8>> {
    if raw.first() == Some(&b'"') {
        unquote_c_style(raw)
    } else {
        Some(raw.to_vec())
    }
}

/// Index of the quote closing the string that opens at index 0.
fn closing_quote(raw: &[u8]) -> Option<usize> {
    let mut escaped = false;
    for (index, byte) in raw.iter().enumerate().skip(1) {
        match byte {
            _ if escaped => escaped = false,
            b'\\' => escaped = true,
            b'"' => return Some(index),
            _ => {}
        }
    }
    None
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// The git dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitDialect;

impl Dialect for GitDialect {
    fn name(&self) -> &'static str {
        "git"
    }

    fn is_boundary(&self, lines: &LineBuffer<'_>, index: usize) -> bool {
        lines
            .content(index)
            .is_some_and(|line| line.starts_with(BOUNDARY_PREFIX))
    }

    fn begin_file(
        &self,
        lines: &LineBuffer<'_>,
        index: usize,
    ) -> Result<Option<BoundaryMatch>, ParseError> {
        let Some(rest) = lines
            .content(index)
            .and_then(|line| line.strip_prefix(BOUNDARY_PREFIX))
        else {
            return Ok(None);
        };

        let (orig, new) = parse_boundary_paths(rest).ok_or_else(|| {
            ParseError::malformed_header(
                format!(
                    "unable to parse file paths from 'diff --git {}'",
                    String::from_utf8_lossy(rest)
                ),
                LineBuffer::line_number(index),
            )
        })?;

        Ok(Some(BoundaryMatch {
            file: FileBuilder::new(orig, new),
            line_count: 1,
            file_header_seen: false,
        }))
    }

    fn parse_header_line(
        &self,
        line: &[u8],
        line_number: usize,
        file: &mut FileBuilder,
    ) -> Result<bool, ParseError> {
        match GitHeader::parse(line, line_number)? {
            Some(header) => {
                log::trace!("line {}: {:?}", line_number, header);
                header.apply(file, line_number)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn revision_path(&self, raw: &[u8], side: Side) -> Option<String> {
        if raw == DEV_NULL {
            return None;
        }

        let unquoted = unquote_or_raw(raw)?;
        let prefix: &[u8] = match side {
            Side::Orig => b"a/",
            Side::New => b"b/",
        };
        Some(side_path(&unquoted, prefix))
    }

    fn binary_marker(&self, line: &[u8]) -> Option<BinaryMarker> {
        if line == BINARY_PATCH {
            Some(BinaryMarker::Patch)
        } else if is_binary_files_line(line) {
            Some(BinaryMarker::Summary)
        } else {
            None
        }
    }
}
