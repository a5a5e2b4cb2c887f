//! CLI argument parsing for diffparse.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use std::path::{Path, PathBuf};

/// diffparse: inspect unified and git diffs.
///
/// Every command reads one diff from a file or stdin and parses it in full
/// before printing anything. Malformed input exits with status 2 and names
/// the offending line.
#[derive(Parser, Debug)]
#[command(name = "diffparse")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (defaults to .diffparse.yaml in the current directory).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for diffparse.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the files in a diff.
    ///
    /// Prints one line per file with its change kind and line counts.
    #[command(alias = "ls")]
    Files(DiffArgs),

    /// Summarize a diff.
    ///
    /// Prints per-file insertions and deletions followed by totals,
    /// in the style of `git diff --stat`.
    Stats(DiffArgs),

    /// Check that a diff parses.
    ///
    /// Prints nothing but a short verdict; the exit status carries the result.
    Check(DiffArgs),
}

/// Input selection shared by every command.
#[derive(Parser, Debug, Default)]
pub struct DiffArgs {
    /// Diff file to read; `-` or omitted reads stdin.
    pub path: Option<PathBuf>,

    /// Dialect to parse as (git, unified). Overrides the config file.
    #[arg(short, long)]
    pub format: Option<String>,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Only report files whose path matches this glob (repeatable).
    #[arg(short, long)]
    pub include: Vec<String>,
}

impl DiffArgs {
    /// The input path, or `None` for stdin.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.path.as_ref().filter(|p| p.as_path() != Path::new("-"))
    }
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_files_minimal() {
        let cli = Cli::try_parse_from(["diffparse", "files"]).unwrap();
        if let Command::Files(args) = cli.command {
            assert!(args.path.is_none());
            assert!(args.format.is_none());
            assert!(!args.json);
            assert!(args.include.is_empty());
        } else {
            panic!("Expected Files command");
        }
        assert!(cli.config.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn parse_files_alias() {
        let cli = Cli::try_parse_from(["diffparse", "ls", "change.diff"]).unwrap();
        assert!(matches!(cli.command, Command::Files(_)));
    }

    #[test]
    fn parse_stats_full() {
        let cli = Cli::try_parse_from([
            "diffparse",
            "stats",
            "change.diff",
            "--format",
            "unified",
            "--json",
            "--include",
            "src/**",
            "-i",
            "*.md",
        ])
        .unwrap();
        if let Command::Stats(args) = cli.command {
            assert_eq!(args.path, Some(PathBuf::from("change.diff")));
            assert_eq!(args.format.as_deref(), Some("unified"));
            assert!(args.json);
            assert_eq!(args.include, vec!["src/**", "*.md"]);
        } else {
            panic!("Expected Stats command");
        }
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["diffparse", "check", "-", "--config", "ci.yaml", "-vv"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("ci.yaml")));
        assert_eq!(cli.verbose, 2);
        if let Command::Check(args) = cli.command {
            assert!(args.input_path().is_none());
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn input_path_keeps_real_paths() {
        let args = DiffArgs {
            path: Some(PathBuf::from("a.diff")),
            ..Default::default()
        };
        assert_eq!(args.input_path(), Some(&PathBuf::from("a.diff")));
    }

    #[test]
    fn parse_unknown_command_fails() {
        assert!(Cli::try_parse_from(["diffparse", "apply"]).is_err());
    }
}
