//! Terminal summary rendering for merge results.
//!
//! This is the single consumed interface of the presentation layer: a
//! colored, human-readable summary plus a JSON mode for scripting. It
//! uses raw ANSI escape codes rather than a terminal dependency stack.

use crate::merge::MergeResult;
use regex::Regex;
use std::sync::LazyLock;

const BOLD: &str = "\x1b[1m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

static ANSI_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("invalid ANSI regex"));

/// Conditionally wrap text in an ANSI color code.
fn paint(text: &str, code: &str, use_color: bool) -> String {
    if use_color {
        format!("{code}{text}{RESET}")
    } else {
        text.to_string()
    }
}

/// Visible length of a string with ANSI escapes stripped.
fn visible_len(s: &str) -> usize {
    ANSI_ESCAPE.replace_all(s, "").chars().count()
}

/// Print the merge summary to stdout.
pub fn render(result: &MergeResult, use_color: bool) {
    let filename = if result.filename.is_empty() {
        "(unknown)"
    } else {
        result.filename.as_str()
    };
    let header = format!("=== Merge summary: {filename} ===");
    let footer = "=".repeat(visible_len(&header));

    println!("{}", paint(&header, BOLD, use_color));
    println!("  Managed section: written ({})", result.section_id);

    let dup_line = format!("  Removed duplicates: {} line(s)", result.removed_duplicates.len());
    println!("{}", paint(&dup_line, YELLOW, use_color));
    for line in &result.removed_duplicates {
        println!("{}", paint(&format!("    - {line}"), YELLOW, use_color));
    }

    let conflict_line = format!("  Value conflicts: {} line(s)", result.value_conflicts.len());
    println!("{}", paint(&conflict_line, RED, use_color));
    for (user_line, tpl_line) in &result.value_conflicts {
        println!(
            "{}",
            paint(
                &format!("    - user: {user_line} / template: {tpl_line}"),
                RED,
                use_color
            )
        );
    }

    let kept_line = format!("  Kept custom: {} line(s)", result.kept_custom.len());
    println!("{}", paint(&kept_line, GREEN, use_color));

    if let Some(backup) = &result.backup_path {
        println!("{}", paint(&format!("  Backup: {backup}"), CYAN, use_color));
    }

    println!("{}", paint(&footer, BOLD, use_color));
}

/// Print the merge result as a JSON document to stdout.
pub fn render_json(result: &MergeResult) {
    match serde_json::to_string_pretty(result) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Warning: failed to serialize merge result: {e}"),
    }
}
