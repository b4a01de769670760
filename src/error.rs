//! Error types for the confmerge CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for confmerge operations.
///
/// Only I/O produces errors: classification and path selection are total
/// over any readable input. A missing template is fatal and aborts before
/// the target is touched; a missing target is not an error (it selects
/// the fresh-install path instead).
#[derive(Error, Debug)]
pub enum MergeError {
    /// The template file does not exist.
    #[error("template file not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    /// A filesystem read or write failed.
    #[error("{0}")]
    Io(String),
}

impl MergeError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            MergeError::TemplateNotFound(_) => exit_codes::ERROR,
            MergeError::Io(_) => exit_codes::ERROR,
        }
    }
}

/// Result type alias for confmerge operations.
pub type Result<T> = std::result::Result<T, MergeError>;
