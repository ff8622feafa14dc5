//! Second pass: fold flat headings into the Epic → Task → Subtask tree.

use super::scan::Heading;
use super::{Epic, Task};
use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

static EPIC_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^EPIC\s+(\d+)\s+—\s+(.*)$").expect("Invalid epic heading regex")
});

static TASK_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Task\s+(\d+):\s+(.*)$").expect("Invalid task heading regex"));

/// Canonical epic code for an epic number (`EPIC 3`), whatever the heading spacing.
pub fn epic_code(number: &str) -> String {
    format!("EPIC {}", number)
}

/// Parse `EPIC <n> — <title>` heading text into (code, title).
pub fn match_epic(text: &str) -> Option<(String, String)> {
    let caps = EPIC_HEADING.captures(text)?;
    Some((epic_code(&caps[1]), caps[2].trim().to_string()))
}

/// Parse `Task <n>: <title>` heading text into (number, title).
pub fn match_task(text: &str) -> Option<(u32, String)> {
    let caps = TASK_HEADING.captures(text)?;
    let number = caps[1].parse().ok()?;
    Some((number, caps[2].trim().to_string()))
}

/// Fold headings into epics.
///
/// Only three shapes matter: level-2 epic headings, level-3 task headings
/// inside an epic, and level-4 headings inside a task. Every other heading
/// is skipped and does not close the open epic or task.
pub fn fold_headings(headings: &[Heading]) -> Vec<Epic> {
    let mut epics: Vec<Epic> = Vec::new();
    let mut task_open = false;

    for heading in headings {
        match heading.level {
            2 => {
                if let Some((code, title)) = match_epic(&heading.text) {
                    epics.push(Epic {
                        code,
                        title,
                        tasks: Vec::new(),
                    });
                    task_open = false;
                }
            }
            3 => {
                let Some(epic) = epics.last_mut() else {
                    continue;
                };
                if let Some((number, title)) = match_task(&heading.text) {
                    epic.tasks.push(Task {
                        number,
                        title,
                        subtasks: Vec::new(),
                        epic_code: epic.code.clone(),
                        epic_title: epic.title.clone(),
                    });
                    task_open = true;
                }
            }
            4 if task_open => {
                if let Some(task) = epics.last_mut().and_then(|e| e.tasks.last_mut()) {
                    task.subtasks.push(heading.text.clone());
                }
            }
            _ => trace!(line = heading.line, text = %heading.text, "heading skipped"),
        }
    }

    epics
}
