//! Statistics over a parsed diff.

use serde::Serialize;

use crate::file::{ChangeKind, ModeInfo, ParsedDiffFile};

/// What a reviewer sees for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileSummary {
    pub orig_file: String,
    pub new_file: String,
    pub change: ChangeKind,
    pub binary: bool,
    pub insertions: usize,
    pub deletions: usize,
    pub hunks: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity_percent: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode_info: Option<ModeInfo>,
}

impl From<&ParsedDiffFile> for FileSummary {
    fn from(file: &ParsedDiffFile) -> Self {
        Self {
            orig_file: file.orig_file().to_string(),
            new_file: file.new_file().to_string(),
            change: file.change_kind(),
            binary: file.binary(),
            insertions: file.insert_count(),
            deletions: file.delete_count(),
            hunks: file.hunks().len(),
            similarity_percent: file.similarity_percent(),
            mode_info: file.mode_info().cloned(),
        }
    }
}

/// Totals across every file in a diff.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiffSummary {
    pub files: usize,
    pub insertions: usize,
    pub deletions: usize,
    pub added: usize,
    pub deleted: usize,
    pub renamed: usize,
    pub copied: usize,
    pub modified: usize,
    pub binary: usize,
}

impl DiffSummary {
    pub fn from_files<'a>(files: impl IntoIterator<Item = &'a ParsedDiffFile>) -> Self {
        let mut summary = Self::default();

        for file in files {
            summary.files += 1;
            summary.insertions += file.insert_count();
            summary.deletions += file.delete_count();
            if file.binary() {
                summary.binary += 1;
            }
            match file.change_kind() {
                ChangeKind::Added => summary.added += 1,
                ChangeKind::Deleted => summary.deleted += 1,
                ChangeKind::Renamed => summary.renamed += 1,
                ChangeKind::Copied => summary.copied += 1,
                ChangeKind::Modified => summary.modified += 1,
            }
        }

        summary
    }

    /// One line in the style of `git diff --shortstat`.
    pub fn shortstat(&self) -> String {
        let plural = |n: usize, one: &str, many: &str| {
            format!("{} {}", n, if n == 1 { one } else { many })
        };
        format!(
            "{} changed, {}(+), {}(-)",
            plural(self.files, "file", "files"),
            plural(self.insertions, "insertion", "insertions"),
            plural(self.deletions, "deletion", "deletions"),
        )
    }
}
