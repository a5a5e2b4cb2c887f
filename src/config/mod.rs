//! Configuration model for diffparse.
//!
//! This module defines the Config struct that represents `.diffparse.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for every field, and validation of config values.
//! The config only shapes the CLI; the parsing library takes none.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use types::{OutputFormat, CONFIG_FILE_NAME};
