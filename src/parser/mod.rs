//! Diff parsing.
//!
//! The state machine in [`base`] is shared by every dialect; a [`Dialect`]
//! decides where files start and which extended headers exist. Supported:
//! - `git`: `diff --git` boundaries with mode, rename, copy, similarity
//!   and index headers, binary markers
//! - `unified`: plain `diff -u` output
//!
//! Parsing is all-or-nothing. Either every file section is returned,
//! byte-exact, or a [`ParseError`] names the line where it stopped.

mod base;
mod dialect;
mod git;
mod helpers;
mod hunk;
mod unified;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::file::ParsedDiffFile;

pub use base::DiffParser;
pub use dialect::{BinaryMarker, BoundaryMatch, Dialect, Side};
pub use git::{GitDialect, GitHeader};
pub use unified::UnifiedDialect;

/// Which dialect to parse a diff as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DiffFormat {
    #[default]
    Git,
    #[serde(alias = "diff")]
    Unified,
}

impl DiffFormat {
    /// Parse a format selector such as `git` or `unified`.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "git" => Some(Self::Git),
            "unified" | "diff" => Some(Self::Unified),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Git => "git",
            Self::Unified => "unified",
        }
    }
}

/// Parse `data` as a diff in the given format.
pub fn parse(data: &[u8], format: DiffFormat) -> Result<Vec<ParsedDiffFile>, ParseError> {
    match format {
        DiffFormat::Git => parse_git(data),
        DiffFormat::Unified => parse_unified(data),
    }
}

/// Parse `data` as git diff output.
pub fn parse_git(data: &[u8]) -> Result<Vec<ParsedDiffFile>, ParseError> {
    DiffParser::new(GitDialect, data).parse()
}

/// Parse `data` as a plain unified diff.
pub fn parse_unified(data: &[u8]) -> Result<Vec<ParsedDiffFile>, ParseError> {
    DiffParser::new(UnifiedDialect, data).parse()
}
