//! Region location within a target file's lines.
//!
//! Managed and user regions use deliberately different pairing policies:
//! managed sections take the first begin and the first complete pair,
//! while the user section takes the first begin and the *last* end seen.
//! The asymmetry is load-bearing for files with stray duplicate markers,
//! so the two scans are kept separate rather than unified.

use crate::dialect::Dialect;
use crate::markers;

/// Find the span of a complete managed region for `section_id`.
///
/// Single forward scan. The earliest begin marker wins; the scan stops at
/// the first end marker that follows a begin. Returns the closed interval
/// `(begin_idx, end_idx)` including both marker lines, or `None` when no
/// complete pair exists — a begin without an end is a partial region and
/// does not count as present.
pub fn find_managed_section(
    lines: &[&str],
    section_id: &str,
    dialect: Dialect,
) -> Option<(usize, usize)> {
    let begin_marker = markers::managed_begin(section_id, dialect);
    let end_marker = markers::managed_end(section_id, dialect);

    let mut begin_idx: Option<usize> = None;

    for (i, line) in lines.iter().enumerate() {
        let stripped = line.trim_end();
        if stripped == begin_marker {
            if begin_idx.is_none() {
                begin_idx = Some(i);
            }
        } else if stripped == end_marker
            && let Some(begin) = begin_idx
        {
            return Some((begin, i));
        }
    }

    None
}

/// Find the span of the user region.
///
/// Takes the first begin and the last end across the whole scan, so a
/// file with duplicated user markers still yields one enclosing span.
/// Returns `None` unless both markers exist.
pub fn find_user_section(lines: &[&str], dialect: Dialect) -> Option<(usize, usize)> {
    let begin_marker = markers::user_begin(dialect);
    let end_marker = markers::user_end(dialect);

    let mut begin_idx: Option<usize> = None;
    let mut end_idx: Option<usize> = None;

    for (i, line) in lines.iter().enumerate() {
        let stripped = line.trim_end();
        if stripped == begin_marker {
            if begin_idx.is_none() {
                begin_idx = Some(i);
            }
        } else if stripped == end_marker {
            end_idx = Some(i);
        }
    }

    match (begin_idx, end_idx) {
        (Some(begin), Some(end)) => Some((begin, end)),
        _ => None,
    }
}

/// Whether any line is a confmerge marker (either dialect).
pub fn has_any_markers(lines: &[&str]) -> bool {
    lines.iter().any(|line| markers::is_marker_line(line))
}
