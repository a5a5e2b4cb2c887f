//! Command implementations for diffparse.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Every command shares the same input pipeline in
//! [`input`]: resolve config, read the diff, parse it, filter it.

mod check;
mod files;
mod input;
mod stats;

use crate::cli::Command;
use diffparse::config::Config;
use diffparse::error::{Error, Result};
use std::path::Path;

/// Dispatch a command to its implementation.
///
/// The config is resolved once here: an explicit `--config` path, else
/// `.diffparse.yaml` in the current directory, else defaults.
pub fn dispatch(config_path: Option<&Path>, command: Command) -> Result<()> {
    let cwd = std::env::current_dir()
        .map_err(|e| Error::UserError(format!("failed to read current directory: {}", e)))?;
    let config = Config::discover(config_path, &cwd)?;

    match command {
        Command::Files(args) => files::cmd_files(&config, &args),
        Command::Stats(args) => stats::cmd_stats(&config, &args),
        Command::Check(args) => check::cmd_check(&config, &args),
    }
}

/// Serialize a value for `--json` output.
fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| Error::UserError(format!("failed to serialize output: {}", e)))
}
