//! Implementation of the `diffparse stats` command.
//!
//! Prints a `git diff --stat` style histogram followed by totals.

use super::input::{self, LoadedDiff};
use super::to_json;
use crate::cli::DiffArgs;
use diffparse::config::Config;
use diffparse::error::Result;
use diffparse::{DiffFormat, DiffSummary, FileSummary};
use serde::Serialize;

/// Widest the +/- bar may grow before it is scaled down.
const BAR_WIDTH: usize = 40;

#[derive(Serialize)]
struct StatsReport {
    format: DiffFormat,
    files: Vec<FileSummary>,
    summary: DiffSummary,
}

/// Execute the `diffparse stats` command.
pub fn cmd_stats(config: &Config, args: &DiffArgs) -> Result<()> {
    let loaded = input::load(config, args)?;

    if input::wants_json(config, args) {
        let report = StatsReport {
            format: loaded.format,
            files: loaded.files.iter().map(FileSummary::from).collect(),
            summary: DiffSummary::from_files(&loaded.files),
        };
        println!("{}", to_json(&report)?);
    } else {
        print!("{}", render_text(&loaded));
    }

    Ok(())
}

fn render_text(loaded: &LoadedDiff) -> String {
    let rows: Vec<FileSummary> = loaded.files.iter().map(FileSummary::from).collect();
    let name_width = rows
        .iter()
        .map(|row| row.new_file.chars().count())
        .max()
        .unwrap_or(0);
    let widest = rows
        .iter()
        .map(|row| row.insertions + row.deletions)
        .max()
        .unwrap_or(0);
    let count_width = widest.to_string().len();

    let mut out = String::new();
    for row in &rows {
        let changed = row.insertions + row.deletions;
        let detail = if row.binary {
            "Bin".to_string()
        } else {
            let (plus, minus) = scale(row.insertions, row.deletions, widest);
            format!(
                "{:>width$} {}{}",
                changed,
                "+".repeat(plus),
                "-".repeat(minus),
                width = count_width
            )
        };
        out.push_str(&format!(
            " {:<name_width$} | {}\n",
            row.new_file,
            detail.trim_end(),
            name_width = name_width
        ));
    }

    out.push_str(&format!(
        " {}\n",
        DiffSummary::from_files(&loaded.files).shortstat()
    ));
    out
}

/// Shrink a +/- bar proportionally once the widest file exceeds `BAR_WIDTH`.
fn scale(insertions: usize, deletions: usize, widest: usize) -> (usize, usize) {
    if widest <= BAR_WIDTH {
        return (insertions, deletions);
    }
    let shrink = |n: usize| {
        if n == 0 {
            0
        } else {
            (n * BAR_WIDTH / widest).max(1)
        }
    };
    (shrink(insertions), shrink(deletions))
}
