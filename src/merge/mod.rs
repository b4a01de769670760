//! The merge engine: path selection and the merge driver.
//!
//! Four mutually exclusive paths cover every target state:
//! - `FreshInstall`: target absent or blank
//! - `UpdateManaged`: a complete managed region for the section exists
//! - `AddSection`: other markers exist but this section is missing
//! - `FirstUpgrade`: content but no markers anywhere (backup + dedup)
//!
//! Selection is evaluated in that fixed priority order and exactly one
//! path runs per invocation. The builders in `paths` are pure; this
//! module owns all filesystem effects (template/target reads, backup and
//! target writes) so dry runs differ from real runs only in that no
//! write occurs.

mod paths;
mod result;


pub use result::MergeResult;

use crate::dialect::Dialect;
use crate::error::{MergeError, Result};
use crate::fs;
use crate::locate::{find_managed_section, has_any_markers};
use chrono::Local;
use std::path::Path;

/// The merge strategy chosen for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePath {
    /// Target absent or whitespace-only: synthesize the full structure.
    FreshInstall,
    /// Replace the existing managed region at this span (inclusive,
    /// marker lines included).
    UpdateManaged { begin_idx: usize, end_idx: usize },
    /// Insert a new managed block before the user region.
    AddSection,
    /// Wrap unmarked content: backup, dedup, and add markers.
    FirstUpgrade,
}

/// Choose the merge path for the given target content.
///
/// `None` means the target file does not exist. Partial markers (a begin
/// with no matching end) do not count as a present region, but they do
/// count as "has markers", so such files take the add-section path and
/// the stray content falls into user-authored text downstream.
pub fn select_path(target_content: Option<&str>, section_id: &str, dialect: Dialect) -> MergePath {
    let Some(content) = target_content else {
        return MergePath::FreshInstall;
    };
    if content.trim().is_empty() {
        return MergePath::FreshInstall;
    }

    let lines: Vec<&str> = content.lines().collect();

    if let Some((begin_idx, end_idx)) = find_managed_section(&lines, section_id, dialect) {
        return MergePath::UpdateManaged { begin_idx, end_idx };
    }
    if has_any_markers(&lines) {
        return MergePath::AddSection;
    }
    MergePath::FirstUpgrade
}

/// Execute a merge and return its result.
///
/// Reads the template (fatal if missing) and the target (absent is a
/// valid state), dispatches to exactly one merge path, and writes the
/// new target content. With `dry_run` the returned result is identical
/// field-for-field but nothing is written, backup included — the backup
/// path is still computed and reported.
pub fn merge(
    target_path: &Path,
    template_path: &Path,
    section_id: &str,
    dialect: Dialect,
    dry_run: bool,
) -> Result<MergeResult> {
    let template = fs::read_optional(template_path)?
        .ok_or_else(|| MergeError::TemplateNotFound(template_path.to_path_buf()))?;

    let target = fs::read_optional(target_path)?;
    let path = select_path(target.as_deref(), section_id, dialect);

    let target_content = target.unwrap_or_default();
    let target_lines: Vec<&str> = target_content.lines().collect();

    let (output, mut result) = match path {
        MergePath::FreshInstall => paths::fresh_install(&template, section_id, dialect),
        MergePath::UpdateManaged { begin_idx, end_idx } => paths::update_managed(
            &target_lines,
            (begin_idx, end_idx),
            &template,
            section_id,
            dialect,
        ),
        MergePath::AddSection => paths::add_section(&target_lines, &template, section_id, dialect),
        MergePath::FirstUpgrade => {
            let (output, mut result) =
                paths::first_upgrade(&target_content, &template, section_id, dialect);

            let stamp = Local::now().format("%Y%m%d-%H%M%S").to_string();
            let backup_path = fs::backup_path_for(target_path, &stamp);
            if !dry_run {
                fs::write_backup(&backup_path, &target_content)?;
            }
            result.backup_path = Some(backup_path.display().to_string());

            (output, result)
        }
    };

    result.filename = target_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if !dry_run {
        fs::write_text(target_path, &output)?;
    }

    Ok(result)
}
