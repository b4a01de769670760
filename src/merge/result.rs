//! Structured outcome of a merge invocation.

use crate::exit_codes;
use serde::Serialize;

/// Result of one merge, consumed by the reporting layer.
///
/// Built once per invocation and not mutated afterwards. The list fields
/// preserve the original user-line order; `kept_custom` counts only
/// non-comment, non-blank retained lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeResult {
    /// Section identifier used in the managed markers.
    pub section_id: String,

    /// File name of the merge target (no directory components).
    pub filename: String,

    /// User lines dropped as exact duplicates of template lines.
    pub removed_duplicates: Vec<String>,

    /// (user line, template line) pairs that set the same vim option
    /// to different values. Advisory: the user line stays on disk.
    pub value_conflicts: Vec<(String, String)>,

    /// Retained user customizations (non-comment, non-blank).
    pub kept_custom: Vec<String>,

    /// Backup file path, set on first-upgrade merges. In dry-run mode
    /// the path is computed and reported but the file is never written.
    pub backup_path: Option<String>,

    /// Process exit code for this outcome.
    pub exit_code: i32,
}

impl MergeResult {
    /// A result for the given section with the default success status.
    pub fn new(section_id: &str) -> Self {
        MergeResult {
            section_id: section_id.to_string(),
            filename: String::new(),
            removed_duplicates: Vec::new(),
            value_conflicts: Vec::new(),
            kept_custom: Vec::new(),
            backup_path: None,
            exit_code: exit_codes::SUCCESS,
        }
    }
}
