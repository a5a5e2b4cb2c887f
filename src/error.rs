//! Error types for diffparse.
//!
//! `ParseError` is what the parsing core returns. `Error` wraps it for the
//! CLI and maps every failure to an exit code.

use crate::exit_codes;
use thiserror::Error;

/// A diff could not be parsed.
///
/// Every variant carries the 1-based line where parsing stopped. Line 0
/// means the input as a whole was rejected. Once returned, nothing parsed
/// so far is usable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No file boundary was ever found, but the input is not blank.
    #[error("line {line}: {message}")]
    NotARecognizedFormat { message: String, line: usize },

    /// An extended header or `---`/`+++` line has the wrong shape.
    #[error("line {line}: {message}")]
    MalformedHeader { message: String, line: usize },

    /// A line inside a hunk is not context, added, removed, or a
    /// no-newline marker, or it overruns the declared range.
    #[error("line {line}: {message}")]
    MalformedHunk { message: String, line: usize },

    /// Input (or the file section) ended before a hunk's declared
    /// lengths were reached.
    #[error("line {line}: {message}")]
    TruncatedHunk { message: String, line: usize },
}

impl ParseError {
    pub fn not_recognized(message: impl Into<String>) -> Self {
        ParseError::NotARecognizedFormat {
            message: message.into(),
            line: 0,
        }
    }

    pub fn malformed_header(message: impl Into<String>, line: usize) -> Self {
        ParseError::MalformedHeader {
            message: message.into(),
            line,
        }
    }

    pub fn malformed_hunk(message: impl Into<String>, line: usize) -> Self {
        ParseError::MalformedHunk {
            message: message.into(),
            line,
        }
    }

    pub fn truncated_hunk(message: impl Into<String>, line: usize) -> Self {
        ParseError::TruncatedHunk {
            message: message.into(),
            line,
        }
    }

    /// The 1-based line where parsing stopped (0 for whole-input errors).
    pub fn line(&self) -> usize {
        match self {
            ParseError::NotARecognizedFormat { line, .. }
            | ParseError::MalformedHeader { line, .. }
            | ParseError::MalformedHunk { line, .. }
            | ParseError::TruncatedHunk { line, .. } => *line,
        }
    }

    /// The message without the line prefix.
    pub fn message(&self) -> &str {
        match self {
            ParseError::NotARecognizedFormat { message, .. }
            | ParseError::MalformedHeader { message, .. }
            | ParseError::MalformedHunk { message, .. }
            | ParseError::TruncatedHunk { message, .. } => message,
        }
    }

    /// Short stable name of the error kind, for machine-readable output.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ParseError::NotARecognizedFormat { .. } => "not_a_recognized_format",
            ParseError::MalformedHeader { .. } => "malformed_header",
            ParseError::MalformedHunk { .. } => "malformed_hunk",
            ParseError::TruncatedHunk { .. } => "truncated_hunk",
        }
    }
}

/// Top-level error for the diffparse CLI.
#[derive(Error, Debug)]
pub enum Error {
    /// Bad arguments or unreadable input.
    #[error("{0}")]
    UserError(String),

    /// The config file could not be read or is invalid.
    #[error("Config error: {0}")]
    ConfigError(String),

    /// The diff itself is malformed.
    #[error("Parse failed at {0}")]
    Parse(#[from] ParseError),
}

impl Error {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::UserError(_) => exit_codes::USER_ERROR,
            Error::ConfigError(_) => exit_codes::CONFIG_ERROR,
            Error::Parse(_) => exit_codes::PARSE_FAILURE,
        }
    }
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, Error>;
