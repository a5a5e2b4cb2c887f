//! Reading, parsing, and filtering the diff a command operates on.

use crate::cli::DiffArgs;
use diffparse::config::{Config, OutputFormat};
use diffparse::error::{Error, Result};
use diffparse::{DiffFormat, ParsedDiffFile};
use globset::GlobSet;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// A parsed diff, narrowed to the files the user asked about.
#[derive(Debug)]
pub struct LoadedDiff {
    pub format: DiffFormat,
    pub files: Vec<ParsedDiffFile>,
    /// Files parsed before `--include` filtering.
    pub total_files: usize,
}

/// Read, parse, and filter the input named by `args`.
pub fn load(config: &Config, args: &DiffArgs) -> Result<LoadedDiff> {
    let format = resolve_format(config, args)?;
    let include = resolve_include(config, args)?;
    let data = read_input(args.input_path().map(|p| p.as_path()), config.max_input_bytes)?;

    let files = diffparse::parse(&data, format)?;
    let total_files = files.len();
    let files = filter_files(files, include.as_ref());
    log::info!(
        "{} of {} file(s) selected from a {} diff",
        files.len(),
        total_files,
        format.as_str()
    );

    Ok(LoadedDiff {
        format,
        files,
        total_files,
    })
}

/// `--json` wins over the config's `output`.
pub fn wants_json(config: &Config, args: &DiffArgs) -> bool {
    args.json || config.output == OutputFormat::Json
}

/// `--format` wins over the config's `format`.
pub fn resolve_format(config: &Config, args: &DiffArgs) -> Result<DiffFormat> {
    match args.format.as_deref() {
        Some(name) => DiffFormat::from_str(name).ok_or_else(|| {
            Error::UserError(format!(
                "unknown diff format '{}' (expected git or unified)",
                name
            ))
        }),
        None => Ok(config.format),
    }
}

/// `--include` patterns replace the config's `include` list.
pub fn resolve_include(config: &Config, args: &DiffArgs) -> Result<Option<GlobSet>> {
    if args.include.is_empty() {
        return config.include_set();
    }
    Config::compile_globs(&args.include).map_err(|e| match e {
        Error::ConfigError(msg) => Error::UserError(msg),
        other => other,
    })
}

/// Read the diff from `path`, or stdin when it is `None`.
pub fn read_input(path: Option<&Path>, limit: u64) -> Result<Vec<u8>> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|e| {
                Error::UserError(format!("failed to open '{}': {}", path.display(), e))
            })?;
            read_limited(file, limit, &path.display().to_string())
        }
        None => read_limited(io::stdin().lock(), limit, "stdin"),
    }
}

/// Read everything from `reader`, refusing more than `limit` bytes.
pub fn read_limited<R: Read>(reader: R, limit: u64, source: &str) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    reader
        .take(limit.saturating_add(1))
        .read_to_end(&mut data)
        .map_err(|e| Error::UserError(format!("failed to read {}: {}", source, e)))?;

    if data.len() as u64 > limit {
        return Err(Error::UserError(format!(
            "{} exceeds max_input_bytes ({} bytes)",
            source, limit
        )));
    }

    log::debug!("read {} byte(s) from {}", data.len(), source);
    Ok(data)
}

/// Keep files whose old or new path matches `include`.
pub fn filter_files(files: Vec<ParsedDiffFile>, include: Option<&GlobSet>) -> Vec<ParsedDiffFile> {
    let Some(set) = include else {
        return files;
    };
    files
        .into_iter()
        .filter(|file| set.is_match(file.new_file()) || set.is_match(file.orig_file()))
        .collect()
}
