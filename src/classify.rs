//! Line normalization and classification primitives.
//!
//! These feed the dedup engine: lines are compared in normalized form
//! (whitespace-insensitive), comment and blank lines are excluded from
//! comparison entirely, and vim `set` directives are reduced to their
//! option name so differing values can be flagged as conflicts.

use crate::dialect::Dialect;
use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("invalid whitespace regex"));

/// Matches `set <word>` / `set no<word>` / `set <word>=value`, capturing
/// the option word without the `no` negation prefix.
static VIM_SET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*set\s+(no)?(\w+)").expect("invalid vim set regex"));

/// Normalize a line for comparison: trim leading/trailing whitespace and
/// collapse internal whitespace runs to a single space.
pub fn normalize(line: &str) -> String {
    WHITESPACE_RUN.replace_all(line.trim(), " ").into_owned()
}

/// Whether a line is blank or a pure comment for the given dialect.
///
/// Such lines are always kept verbatim and never participate in
/// dedup comparison.
pub fn is_comment_or_blank(line: &str, dialect: Dialect) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with(dialect.comment_char())
}

/// Extract the option name from a vim `set` directive.
///
/// `set tabstop=4` → `tabstop`, `set nonumber` → `number`. Two lines
/// sharing a key set the same option, even when one uses the `no`
/// negation form or a different `=value`. Returns `None` for anything
/// that is not a `set` directive.
pub fn vim_set_key(line: &str) -> Option<&str> {
    VIM_SET
        .captures(line)
        .map(|caps| caps.get(2).expect("set regex has group 2").as_str())
}
