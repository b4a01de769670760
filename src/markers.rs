//! Marker vocabulary for managed and user regions.
//!
//! Markers are comment lines with a fixed, distinctive prefix token so
//! they never collide with legitimate config syntax:
//!
//! ```text
//! # === settingZsh:managed:zsh-base:begin ===
//! # === settingZsh:managed:zsh-base:end ===
//! # === settingZsh:user:begin ===
//! # === settingZsh:user:end ===
//! ```
//!
//! The vim dialect uses `"` in place of `#`. All functions here are pure
//! string builders; region lookup lives in `locate`.

use crate::dialect::Dialect;

/// Fixed prefix token shared by both dialects. Markers are recognized by
/// this token, so it must stay stable across versions.
pub const MARKER_PREFIX: &str = "settingZsh";

/// Begin marker for a managed section.
pub fn managed_begin(section_id: &str, dialect: Dialect) -> String {
    let cc = dialect.comment_char();
    format!("{cc} === {MARKER_PREFIX}:managed:{section_id}:begin ===")
}

/// End marker for a managed section.
pub fn managed_end(section_id: &str, dialect: Dialect) -> String {
    let cc = dialect.comment_char();
    format!("{cc} === {MARKER_PREFIX}:managed:{section_id}:end ===")
}

/// Begin marker for the user section.
pub fn user_begin(dialect: Dialect) -> String {
    let cc = dialect.comment_char();
    format!("{cc} === {MARKER_PREFIX}:user:begin ===")
}

/// End marker for the user section.
pub fn user_end(dialect: Dialect) -> String {
    let cc = dialect.comment_char();
    format!("{cc} === {MARKER_PREFIX}:user:end ===")
}

/// Whether a line is any confmerge marker, regardless of dialect.
///
/// Checks both comment characters so a stray hash marker inside a vim
/// file still counts as "has markers". Per-section lookups remain
/// dialect-specific; only this presence check is dialect-agnostic.
pub fn is_marker_line(line: &str) -> bool {
    let trimmed = line.trim();
    for cc in ['#', '"'] {
        let prefix = format!("{cc} === {MARKER_PREFIX}:");
        if trimmed.starts_with(&prefix) && trimmed.ends_with(" ===") {
            return true;
        }
    }
    false
}
