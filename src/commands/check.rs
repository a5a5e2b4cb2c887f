//! Implementation of the `diffparse check` command.

use super::input;
use super::to_json;
use crate::cli::DiffArgs;
use diffparse::config::Config;
use diffparse::error::{Error, Result};
use serde_json::json;

/// Execute the `diffparse check` command.
///
/// Succeeds silently apart from a one-line verdict. With `--json`, a
/// parse failure is also reported on stdout before the error propagates
/// to set the exit code.
pub fn cmd_check(config: &Config, args: &DiffArgs) -> Result<()> {
    let json = input::wants_json(config, args);

    match input::load(config, args) {
        Ok(loaded) => {
            let hunks: usize = loaded.files.iter().map(|f| f.hunks().len()).sum();
            if json {
                let report = json!({
                    "ok": true,
                    "format": loaded.format.as_str(),
                    "files": loaded.files.len(),
                    "hunks": hunks,
                });
                println!("{}", to_json(&report)?);
            } else {
                println!(
                    "OK: {} file(s), {} hunk(s) in {} diff",
                    loaded.files.len(),
                    hunks,
                    loaded.format.as_str()
                );
            }
            Ok(())
        }
        Err(Error::Parse(err)) if json => {
            let report = json!({
                "ok": false,
                "kind": err.kind_name(),
                "line": err.line(),
                "message": err.message(),
            });
            println!("{}", to_json(&report)?);
            Err(Error::Parse(err))
        }
        Err(err) => Err(err),
    }
}
