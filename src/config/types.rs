//! Configuration types and defaults for diffparse.

use serde::{Deserialize, Serialize};

/// File name looked up in the working directory when `--config` is absent.
pub const CONFIG_FILE_NAME: &str = ".diffparse.yaml";

/// How the CLI prints results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Aligned, human-readable text (default).
    #[default]
    Text,
    /// One JSON document on stdout.
    Json,
}

// Default value functions for serde
pub(crate) fn default_max_input_bytes() -> u64 {
    64 * 1024 * 1024
}
