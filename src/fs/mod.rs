//! Filesystem primitives for confmerge.
//!
//! Reads distinguish "not found" from other failures (a missing target
//! is a valid state, a missing template is fatal). Writes go through a
//! temp-file-and-rename so an interrupted run never leaves the target
//! half-written; parent directories are created as needed.

use crate::error::{MergeError, Result};
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Read a file as UTF-8 text, returning `None` when it does not exist.
///
/// Any other I/O failure is an error.
pub fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(MergeError::Io(format!(
            "failed to read '{}': {}",
            path.display(),
            e
        ))),
    }
}

/// Write text to a file, creating parent directories as needed.
///
/// Writes to a `.{name}.tmp` sibling, syncs, then renames over the
/// target so the target is never observed in a partial state.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            MergeError::Io(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;

    let mut file = File::create(&temp_path).map_err(|e| {
        MergeError::Io(format!(
            "failed to create temporary file '{}': {}",
            temp_path.display(),
            e
        ))
    })?;
    file.write_all(content.as_bytes())
        .and_then(|()| file.sync_all())
        .map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            MergeError::Io(format!("failed to write '{}': {}", path.display(), e))
        })?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        MergeError::Io(format!(
            "failed to replace '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Sibling path `.{name}.tmp` used during atomic writes.
fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| MergeError::Io(format!("invalid file path: {}", target.display())))?;
    Ok(parent.join(format!(".{filename}.tmp")))
}

/// Compute the backup sibling path for a target: `<name>.bak.<stamp>`.
///
/// The stamp is local time formatted `YYYYMMDD-HHMMSS`. Pure naming;
/// use [`write_backup`] to actually copy the content.
pub fn backup_path_for(target: &Path, stamp: &str) -> PathBuf {
    let name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    target.with_file_name(format!("{name}.bak.{stamp}"))
}

/// Write the pre-merge content to the backup path.
pub fn write_backup(backup_path: &Path, content: &str) -> Result<()> {
    fs::write(backup_path, content).map_err(|e| {
        MergeError::Io(format!(
            "failed to write backup '{}': {}",
            backup_path.display(),
            e
        ))
    })
}
