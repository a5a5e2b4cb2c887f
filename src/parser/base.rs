//! The generic unified-diff state machine.
//!
//! The parser walks the input once, left to right. Lines before a file
//! boundary collect as preamble and are moved into the next file record.
//! After the boundary come zero or more dialect headers, then either a
//! binary marker or a `---`/`+++` pair followed by hunks. Each hunk's
//! declared lengths must be consumed exactly. The first inconsistency
//! aborts the parse.

use crate::error::ParseError;
use crate::file::{FileBuilder, LineKind, ParsedDiffFile};
use crate::lines::{strip_terminator, LineBuffer};

use super::dialect::{split_file_header, BinaryMarker, BoundaryMatch, Dialect, Side};
use super::helpers::is_blank;
use super::hunk::{classify_line, is_hunk_header, parse_hunk_header, HunkLine, HunkProgress};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Collecting preamble until a boundary.
    SeekingBoundary,
    /// After a boundary, before the first hunk.
    InHeader { file_header_seen: bool },
    /// Inside a `GIT binary patch` payload.
    BinaryPayload,
    /// Inside a hunk with lines still owed.
    InHunk(HunkProgress),
    /// A hunk just closed.
    BetweenHunks,
}

/// One-shot parser over a single diff buffer.
pub struct DiffParser<'a, D> {
    dialect: D,
    lines: LineBuffer<'a>,
    files: Vec<ParsedDiffFile>,
    current: Option<FileBuilder>,
    preamble: Vec<u8>,
    index: usize,
    /// Kind of the last hunk line consumed, for `\ No newline` markers.
    last_line: Option<LineKind>,
}

impl<'a, D: Dialect> DiffParser<'a, D> {
    pub fn new(dialect: D, data: &'a [u8]) -> Self {
        Self {
            dialect,
            lines: LineBuffer::new(data),
            files: Vec::new(),
            current: None,
            preamble: Vec::new(),
            index: 0,
            last_line: None,
        }
    }

    /// Parse the whole buffer into file records.
    pub fn parse(mut self) -> Result<Vec<ParsedDiffFile>, ParseError> {
        log::debug!(
            "parsing {} line(s) as a {} diff",
            self.lines.len(),
            self.dialect.name()
        );

        let mut state = State::SeekingBoundary;
        while self.index < self.lines.len() {
            state = match state {
                State::SeekingBoundary => self.seek_boundary()?,
                State::InHeader { file_header_seen } => self.parse_header(file_header_seen)?,
                State::BinaryPayload => self.parse_binary_payload(),
                State::InHunk(progress) => self.parse_hunk_line(progress)?,
                State::BetweenHunks => self.parse_between_hunks()?,
            };
        }

        if let State::InHunk(progress) = state {
            return Err(truncated(progress, self.lines.len()));
        }

        self.finish()
    }

    fn raw(&self, index: usize) -> &'a [u8] {
        self.lines.get(index).unwrap_or_default()
    }

    fn seek_boundary(&mut self) -> Result<State, ParseError> {
        if let Some(matched) = self.dialect.begin_file(&self.lines, self.index)? {
            let file_header_seen = matched.file_header_seen;
            self.start_file(matched);
            return Ok(State::InHeader { file_header_seen });
        }

        let raw = self.raw(self.index);
        self.preamble.extend_from_slice(raw);
        self.index += 1;
        Ok(State::SeekingBoundary)
    }

    fn start_file(&mut self, matched: BoundaryMatch) {
        if let Some(previous) = self.current.take() {
            self.files.push(previous.finalize());
        }

        let mut file = matched.file;
        file.prepend_data(std::mem::take(&mut self.preamble));
        for offset in 0..matched.line_count {
            file.append_data(self.raw(self.index + offset));
        }

        log::debug!(
            "line {}: file {} -> {}",
            LineBuffer::line_number(self.index),
            file.orig_file(),
            file.new_file()
        );

        self.index += matched.line_count;
        self.current = Some(file);
    }

    fn parse_header(&mut self, file_header_seen: bool) -> Result<State, ParseError> {
        let index = self.index;
        let line_number = LineBuffer::line_number(index);
        let raw = self.raw(index);
        let line = strip_terminator(raw);

        if self.dialect.is_boundary(&self.lines, index) {
            return Ok(State::SeekingBoundary);
        }
        let Some(file) = self.current.as_mut() else {
            return Ok(State::SeekingBoundary);
        };

        if let Some(marker) = self.dialect.binary_marker(line) {
            file.mark_binary();
            file.append_data(raw);
            self.index += 1;
            return Ok(match marker {
                BinaryMarker::Summary => State::SeekingBoundary,
                BinaryMarker::Patch => State::BinaryPayload,
            });
        }

        if !file_header_seen && self.dialect.parse_header_line(line, line_number, file)? {
            file.append_data(raw);
            self.index += 1;
            return Ok(State::InHeader {
                file_header_seen: false,
            });
        }

        if line.starts_with(b"--- ") {
            if file_header_seen {
                return Err(ParseError::malformed_header(
                    "unexpected second '---' line for this file",
                    line_number,
                ));
            }
            self.apply_file_header(index)?;
            return Ok(State::InHeader {
                file_header_seen: true,
            });
        }

        if line.starts_with(b"+++ ") {
            return Err(ParseError::malformed_header(
                "'+++' line without a preceding '---' line",
                line_number,
            ));
        }

        if is_hunk_header(line) {
            if !file_header_seen {
                return Err(ParseError::malformed_header(
                    "hunk header before the '---'/'+++' lines",
                    line_number,
                ));
            }
            return self.open_hunk();
        }

        Ok(State::SeekingBoundary)
    }

    /// Consume a `---`/`+++` pair starting at `index`.
    fn apply_file_header(&mut self, index: usize) -> Result<(), ParseError> {
        let orig_raw = self.raw(index);
        let new_raw = self.raw(index + 1);
        let orig_line = strip_terminator(orig_raw);
        let new_line = strip_terminator(new_raw);

        let Some(new_rest) = new_line.strip_prefix(b"+++ ") else {
            return Err(ParseError::malformed_header(
                "'---' line without a following '+++' line",
                LineBuffer::line_number(index),
            ));
        };
        let orig_rest = orig_line.get(4..).unwrap_or_default();

        let (orig_path, orig_info) = split_file_header(orig_rest);
        let (new_path, new_info) = split_file_header(new_rest);
        let orig_path = self.dialect.revision_path(orig_path, Side::Orig);
        let new_path = self.dialect.revision_path(new_path, Side::New);

        let Some(file) = self.current.as_mut() else {
            return Ok(());
        };
        if let Some(path) = orig_path {
            file.set_orig_file(path);
        }
        if let Some(path) = new_path {
            file.set_new_file(path);
        }
        if let Some(info) = orig_info {
            file.set_orig_info(info);
        }
        if let Some(info) = new_info {
            file.set_new_info(info);
        }
        file.append_data(orig_raw);
        file.append_data(new_raw);

        self.index = index + 2;
        Ok(())
    }

    fn open_hunk(&mut self) -> Result<State, ParseError> {
        let line_number = LineBuffer::line_number(self.index);
        let raw = self.raw(self.index);
        let line = strip_terminator(raw);

        let hunk = parse_hunk_header(line).ok_or_else(|| {
            ParseError::malformed_hunk(
                format!("invalid hunk header '{}'", String::from_utf8_lossy(line)),
                line_number,
            )
        })?;
        let progress = HunkProgress::new(&hunk);
        log::trace!(
            "line {}: hunk -{},{} +{},{}",
            line_number,
            hunk.orig_start,
            hunk.orig_len,
            hunk.new_start,
            hunk.new_len
        );

        if let Some(file) = self.current.as_mut() {
            file.begin_hunk(hunk);
            file.append_data(raw);
        }
        self.index += 1;
        self.last_line = None;

        Ok(if progress.is_complete() {
            State::BetweenHunks
        } else {
            State::InHunk(progress)
        })
    }

    fn parse_hunk_line(&mut self, mut progress: HunkProgress) -> Result<State, ParseError> {
        let index = self.index;
        let line_number = LineBuffer::line_number(index);
        let raw = self.raw(index);
        let line = strip_terminator(raw);

        if self.boundary_cuts_hunk(progress, index) {
            // The last consumed line is the one before the boundary.
            return Err(truncated(progress, index));
        }

        let kind = match classify_line(line) {
            Some(HunkLine::Change(kind)) => kind,
            Some(HunkLine::NoNewline) => {
                let Some(previous) = self.last_line else {
                    return Err(ParseError::malformed_hunk(
                        "'\\' marker before any hunk line",
                        line_number,
                    ));
                };
                if let Some(file) = self.current.as_mut() {
                    file.mark_missing_newline(previous);
                    file.append_data(raw);
                }
                self.index += 1;
                return Ok(State::InHunk(progress));
            }
            None => {
                return Err(ParseError::malformed_hunk(
                    format!(
                        "unexpected line in hunk '{}'",
                        String::from_utf8_lossy(line)
                    ),
                    line_number,
                ));
            }
        };

        if !progress.consume(kind) {
            return Err(ParseError::malformed_hunk(
                format!(
                    "line exceeds the declared hunk range ({} original and {} new line(s) left)",
                    progress.orig_remaining, progress.new_remaining
                ),
                line_number,
            ));
        }

        if let Some(file) = self.current.as_mut() {
            file.count_line(kind);
            file.append_data(raw);
        }
        self.index += 1;
        self.last_line = Some(kind);

        Ok(if progress.is_complete() {
            State::BetweenHunks
        } else {
            State::InHunk(progress)
        })
    }

    /// Whether a boundary at `index` ends the open hunk early.
    ///
    /// Unified boundaries (`---`/`+++`) also read as removed and added
    /// lines. They are hunk content only if the hunk can still be completed
    /// from `index` on.
    fn boundary_cuts_hunk(&self, mut progress: HunkProgress, index: usize) -> bool {
        if !self.dialect.is_boundary(&self.lines, index) {
            return false;
        }

        for ahead in index..self.lines.len() {
            let line = self.lines.content(ahead).unwrap_or_default();
            match classify_line(line) {
                Some(HunkLine::NoNewline) => {}
                Some(HunkLine::Change(kind)) if progress.consume(kind) => {
                    if progress.is_complete() {
                        return false;
                    }
                }
                _ => return true,
            }
        }
        true
    }

    fn parse_between_hunks(&mut self) -> Result<State, ParseError> {
        let raw = self.raw(self.index);
        let line = strip_terminator(raw);

        if line.first() == Some(&b'\\') {
            if let Some(previous) = self.last_line.take() {
                if let Some(file) = self.current.as_mut() {
                    file.mark_missing_newline(previous);
                    file.append_data(raw);
                }
                self.index += 1;
                return Ok(State::BetweenHunks);
            }
        }

        if is_hunk_header(line) {
            return self.open_hunk();
        }

        Ok(State::SeekingBoundary)
    }

    fn parse_binary_payload(&mut self) -> State {
        if self.dialect.is_boundary(&self.lines, self.index) {
            return State::SeekingBoundary;
        }

        let raw = self.raw(self.index);
        if let Some(file) = self.current.as_mut() {
            file.append_data(raw);
        }
        self.index += 1;
        State::BinaryPayload
    }

    fn finish(mut self) -> Result<Vec<ParsedDiffFile>, ParseError> {
        match self.current.take() {
            Some(mut last) => {
                // Trailing bytes stay with the last file so byte order holds.
                if !self.preamble.is_empty() {
                    last.append_data(&self.preamble);
                }
                self.files.push(last.finalize());
            }
            None if !is_blank(&self.preamble) => {
                return Err(ParseError::not_recognized(format!(
                    "This does not appear to be a {} diff",
                    self.dialect.name()
                )));
            }
            None => {}
        }

        log::debug!("parsed {} file(s)", self.files.len());
        Ok(self.files)
    }
}

fn truncated(progress: HunkProgress, last_line: usize) -> ParseError {
    ParseError::truncated_hunk(
        format!(
            "hunk ended early: {} original and {} new line(s) missing",
            progress.orig_remaining, progress.new_remaining
        ),
        last_line,
    )
}
