//! Config struct definition and default implementation.

use super::types::*;
use crate::parser::DiffFormat;
use serde::{Deserialize, Serialize};

/// Configuration for the diffparse CLI.
///
/// This struct represents the contents of `.diffparse.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dialect used when `--format` is not given.
    #[serde(default)]
    pub format: DiffFormat,

    /// Inputs larger than this are refused before parsing.
    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: u64,

    /// Glob patterns selecting which files to report (empty means all).
    #[serde(default)]
    pub include: Vec<String>,

    /// Output format when `--json` is not given.
    #[serde(default)]
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: DiffFormat::default(),
            max_input_bytes: default_max_input_bytes(),
            include: Vec::new(),
            output: OutputFormat::default(),
        }
    }
}
