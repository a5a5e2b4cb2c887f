//! Implementation of the `diffparse files` command.
//!
//! Lists each file section with a `git diff --name-status` style letter.

use super::input::{self, LoadedDiff};
use super::to_json;
use crate::cli::DiffArgs;
use diffparse::config::Config;
use diffparse::error::Result;
use diffparse::{ChangeKind, FileSummary, ParsedDiffFile};

/// Execute the `diffparse files` command.
pub fn cmd_files(config: &Config, args: &DiffArgs) -> Result<()> {
    let loaded = input::load(config, args)?;

    if input::wants_json(config, args) {
        let summaries: Vec<FileSummary> = loaded.files.iter().map(FileSummary::from).collect();
        println!("{}", to_json(&summaries)?);
    } else {
        print!("{}", render_text(&loaded));
    }

    Ok(())
}

fn status_letter(kind: ChangeKind) -> char {
    match kind {
        ChangeKind::Added => 'A',
        ChangeKind::Deleted => 'D',
        ChangeKind::Renamed => 'R',
        ChangeKind::Copied => 'C',
        ChangeKind::Modified => 'M',
    }
}

fn describe(file: &ParsedDiffFile) -> String {
    let mut line = format!("{}  ", status_letter(file.change_kind()));

    if file.moved() || file.copied() {
        line.push_str(&format!("{} -> {}", file.orig_file(), file.new_file()));
        if let Some(percent) = file.similarity_percent() {
            line.push_str(&format!(" ({}%)", percent));
        }
    } else {
        line.push_str(file.display_path());
    }

    if file.binary() {
        line.push_str("  binary");
    } else if !file.hunks().is_empty() {
        line.push_str(&format!(
            "  +{} -{}",
            file.insert_count(),
            file.delete_count()
        ));
    }

    if let Some(mode) = file.mode_info() {
        if let (Some(old), Some(new)) = (&mode.old_mode, &mode.new_mode) {
            if old != new {
                line.push_str(&format!("  mode {} -> {}", old, new));
            }
        }
    }

    line
}

fn render_text(loaded: &LoadedDiff) -> String {
    let mut out = String::new();
    for file in &loaded.files {
        out.push_str(&describe(file));
        out.push('\n');
    }
    if loaded.files.len() != loaded.total_files {
        out.push_str(&format!(
            "({} of {} file(s) shown)\n",
            loaded.files.len(),
            loaded.total_files
        ));
    }
    out
}
