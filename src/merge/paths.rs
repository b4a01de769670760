//! Pure builders for the four merge paths.
//!
//! Each builder maps `(target lines, template, section, dialect)` to the
//! new file text plus a `MergeResult`. Filesystem effects (reading,
//! writing, backups) live in the driver; nothing here touches disk.

use super::result::MergeResult;
use crate::classify::is_comment_or_blank;
use crate::dedup::dedup_lines;
use crate::dialect::Dialect;
use crate::exit_codes;
use crate::locate::find_user_section;
use crate::markers;

/// Build a managed block: begin marker, raw template lines, end marker.
fn build_managed_block(template: &str, section_id: &str, dialect: Dialect) -> Vec<String> {
    let mut block = vec![markers::managed_begin(section_id, dialect)];
    block.extend(template.lines().map(str::to_string));
    block.push(markers::managed_end(section_id, dialect));
    block
}

/// Build a user block wrapping the given lines in user markers.
fn build_user_block(user_lines: &[String], dialect: Dialect) -> Vec<String> {
    let mut block = vec![markers::user_begin(dialect)];
    block.extend(user_lines.iter().cloned());
    block.push(markers::user_end(dialect));
    block
}

/// Join lines and guarantee exactly one trailing newline.
fn join_lines(lines: &[String]) -> String {
    let mut output = lines.join("\n");
    while output.ends_with('\n') {
        output.pop();
    }
    output.push('\n');
    output
}

/// Fresh install: the target is absent or blank.
///
/// Emits one managed region with the template content, a blank line, and
/// an empty user region. Signals the distinct fresh-install status.
pub fn fresh_install(template: &str, section_id: &str, dialect: Dialect) -> (String, MergeResult) {
    let mut lines = build_managed_block(template, section_id, dialect);
    lines.push(String::new());
    lines.extend(build_user_block(&[], dialect));

    let mut result = MergeResult::new(section_id);
    result.exit_code = exit_codes::FRESH_INSTALL;
    (join_lines(&lines), result)
}

/// Update managed: a complete region for this section exists.
///
/// Splices out the old span (markers included) and substitutes a freshly
/// built block. Everything outside the span, other sections and the user
/// region included, is carried through unchanged. The span comes from
/// path selection, so selection and building always agree on the file's
/// state.
pub fn update_managed(
    target_lines: &[&str],
    span: (usize, usize),
    template: &str,
    section_id: &str,
    dialect: Dialect,
) -> (String, MergeResult) {
    let (begin_idx, end_idx) = span;

    let mut lines: Vec<String> = target_lines[..begin_idx]
        .iter()
        .map(|l| l.to_string())
        .collect();
    lines.extend(build_managed_block(template, section_id, dialect));
    lines.extend(target_lines[end_idx + 1..].iter().map(|l| l.to_string()));

    (join_lines(&lines), MergeResult::new(section_id))
}

/// Add section: other markers exist but this section is missing.
///
/// Inserts the new managed block immediately before the user region, so
/// managed content always precedes user content. Without a user region,
/// appends the block and a fresh empty user block at end of file —
/// guaranteeing at most one user region ever exists.
pub fn add_section(
    target_lines: &[&str],
    template: &str,
    section_id: &str,
    dialect: Dialect,
) -> (String, MergeResult) {
    let new_managed = build_managed_block(template, section_id, dialect);

    let lines: Vec<String> = match find_user_section(target_lines, dialect) {
        Some((user_begin, _)) => {
            let mut lines: Vec<String> = target_lines[..user_begin]
                .iter()
                .map(|l| l.to_string())
                .collect();
            lines.extend(new_managed);
            lines.push(String::new());
            lines.extend(target_lines[user_begin..].iter().map(|l| l.to_string()));
            lines
        }
        None => {
            let mut lines: Vec<String> = target_lines.iter().map(|l| l.to_string()).collect();
            lines.push(String::new());
            lines.extend(new_managed);
            lines.push(String::new());
            lines.extend(build_user_block(&[], dialect));
            lines
        }
    };

    (join_lines(&lines), MergeResult::new(section_id))
}

/// First upgrade: the target has content but no markers anywhere.
///
/// Runs the dedup engine over the whole target against the template,
/// then emits the managed block, a blank line, and the kept lines
/// wrapped as the new user block. Backing up the original is the
/// driver's job.
pub fn first_upgrade(
    target_content: &str,
    template: &str,
    section_id: &str,
    dialect: Dialect,
) -> (String, MergeResult) {
    let user_lines: Vec<&str> = target_content.lines().collect();
    let template_lines: Vec<&str> = template.lines().collect();

    let outcome = dedup_lines(&user_lines, &template_lines, dialect);

    let mut result = MergeResult::new(section_id);
    result.removed_duplicates = outcome.removed;
    result.value_conflicts = outcome.conflicts;
    result.kept_custom = outcome
        .kept
        .iter()
        .filter(|line| !is_comment_or_blank(line, dialect))
        .cloned()
        .collect();

    let mut lines = build_managed_block(template, section_id, dialect);
    lines.push(String::new());
    lines.extend(build_user_block(&outcome.kept, dialect));

    (join_lines(&lines), result)
}
