//! Dedup engine: classifies user lines against a template.
//!
//! Each user line lands in exactly one of three buckets:
//! - removed: exact duplicate of a template line (normalized comparison)
//! - conflict: vim `set` directive whose option also appears in the
//!   template with a different line — the user line is additionally kept,
//!   so the user's value wins on disk and the conflict is advisory only
//! - kept: everything else, comments and blank lines included
//!
//! All three buckets preserve the original user-line order.

use crate::classify::{is_comment_or_blank, normalize, vim_set_key};
use crate::dialect::Dialect;
use std::collections::{HashMap, HashSet};

/// Outcome of deduplicating user lines against template lines.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DedupOutcome {
    /// User lines dropped as exact duplicates, right-trimmed.
    pub removed: Vec<String>,
    /// User lines retained verbatim (comments, blanks, customizations,
    /// and conflicting `set` directives).
    pub kept: Vec<String>,
    /// Pairs of (trimmed user line, trimmed template line) that set the
    /// same vim option to different values.
    pub conflicts: Vec<(String, String)>,
}

/// Classify `user_lines` against `template_lines`.
///
/// Comment and blank template lines contribute nothing to the comparison
/// sets; comment and blank user lines are kept unconditionally.
pub fn dedup_lines(user_lines: &[&str], template_lines: &[&str], dialect: Dialect) -> DedupOutcome {
    let mut tpl_normalized: HashSet<String> = HashSet::new();
    // vim option name -> trimmed template line
    let mut tpl_vim_keys: HashMap<String, String> = HashMap::new();

    for tl in template_lines {
        if is_comment_or_blank(tl, dialect) {
            continue;
        }
        let norm = normalize(tl);
        if dialect == Dialect::Vim
            && let Some(key) = vim_set_key(&norm)
        {
            tpl_vim_keys.insert(key.to_string(), tl.trim().to_string());
        }
        tpl_normalized.insert(norm);
    }

    let mut outcome = DedupOutcome::default();

    for ul in user_lines {
        if is_comment_or_blank(ul, dialect) {
            outcome.kept.push(ul.to_string());
            continue;
        }

        let norm_u = normalize(ul);

        if tpl_normalized.contains(&norm_u) {
            outcome.removed.push(ul.trim_end().to_string());
            continue;
        }

        if dialect == Dialect::Vim
            && let Some(key) = vim_set_key(&norm_u)
            && let Some(tpl_line) = tpl_vim_keys.get(key)
        {
            outcome
                .conflicts
                .push((ul.trim().to_string(), tpl_line.clone()));
            outcome.kept.push(ul.to_string());
            continue;
        }

        outcome.kept.push(ul.to_string());
    }

    outcome
}
