//! Instruction headers and Canonical Context sections.

use crate::tasklist::{Epic, Task, subtask_suffix};
use regex::Regex;
use std::sync::LazyLock;

/// Leading text that marks an existing instruction block.
pub const INSTRUCTION_MARKER: &str = "# INSTRUCTIONS FOR CLAUDE";

/// Separator after which the context section goes.
const SECTION_BREAK: &str = "\n---\n\n";

static CANONICAL_HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^#\s*(Task\s+\d{3}|EPIC\s+\d+)\b").expect("Invalid canonical heading regex")
});

/// Remove an existing instruction block.
///
/// A document whose first non-blank text is [`INSTRUCTION_MARKER`] is cut
/// down to its first `# Task NNN` or `# EPIC N` heading. With no such heading
/// only the leading whitespace is dropped. Documents without the marker come
/// back unchanged.
pub fn strip_instructions(text: &str) -> &str {
    let trimmed = text.trim_start();
    if !trimmed.starts_with(INSTRUCTION_MARKER) {
        return text;
    }
    match CANONICAL_HEADING_RE.find(trimmed) {
        Some(m) => &trimmed[m.start()..],
        None => trimmed,
    }
}

/// Put `header` in front of `body` unless the body already starts with it.
pub fn ensure_header(header: &str, body: &str) -> String {
    if body.starts_with(header) {
        body.to_string()
    } else {
        format!("{}{}", header, body)
    }
}

/// Insert `context` right after the first section break, or at the start.
pub fn insert_context(document: &str, context: &str) -> String {
    match document.find(SECTION_BREAK) {
        Some(pos) => {
            let at = pos + SECTION_BREAK.len();
            format!("{}{}{}", &document[..at], context, &document[at..])
        }
        None => format!("{}{}", context, document),
    }
}

/// Bullet lines for a task's subtasks, two-space indented.
pub fn sibling_lines(task: &Task) -> String {
    if task.subtasks.is_empty() {
        return "  - (none)".to_string();
    }
    subtask_lines(task, "  ")
}

/// Bullet lines for every task in an epic, each followed by its subtasks.
pub fn epic_task_lines(epic: &Epic) -> String {
    if epic.tasks.is_empty() {
        return "- (none)".to_string();
    }
    epic.tasks
        .iter()
        .map(|task| {
            let mut block = format!("- Task {}: {}", task.id(), task.title);
            if !task.subtasks.is_empty() {
                block.push('\n');
                block.push_str(&subtask_lines(task, "  "));
            }
            block
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn subtask_lines(task: &Task, indent: &str) -> String {
    task.subtasks
        .iter()
        .enumerate()
        .map(|(i, title)| match subtask_suffix(i) {
            Some(letter) => format!("{}- Task {}.{}: {}", indent, task.id(), letter, title),
            None => format!("{}- Task {} (subtask #{}): {}", indent, task.id(), i + 1, title),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
