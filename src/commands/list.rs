//! Implementation of the `taskdoc list` command.

use super::{load_task_list, task_list_path};
use crate::cli::ListArgs;
use crate::config::Config;
use crate::error::Result;
use crate::tasklist::{TaskList, subtask_suffix};

/// Execute the `taskdoc list` command.
pub fn cmd_list(config: &Config, args: ListArgs) -> Result<()> {
    let path = task_list_path(config, args.task_list);
    let list = load_task_list(&path)?;
    print!("{}", render_tree(&list));
    Ok(())
}

/// Indented epic / task / subtask tree followed by a count line.
pub(crate) fn render_tree(list: &TaskList) -> String {
    let mut out = String::new();

    for epic in &list.epics {
        out.push_str(&format!("{} — {}\n", epic.code, epic.title));
        for task in &epic.tasks {
            out.push_str(&format!("  Task {}: {}\n", task.id(), task.title));
            for (i, title) in task.subtasks.iter().enumerate() {
                let id = match subtask_suffix(i) {
                    Some(letter) => format!("{}.{}", task.id(), letter),
                    None => format!("{} #{}", task.id(), i + 1),
                };
                out.push_str(&format!("    {} {}\n", id, title));
            }
        }
    }

    out.push_str(&format!(
        "\n{} epic(s), {} task(s), {} subtask(s)\n",
        list.epics.len(),
        list.task_count(),
        list.subtask_count()
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_tree() {
        let list = TaskList::parse(
            "## EPIC 1 — Foundation\n### Task 007: Modes\n#### Alpha\n#### Beta\n",
        );
        assert_eq!(
            render_tree(&list),
            "EPIC 1 — Foundation\n  Task 007: Modes\n    007.a Alpha\n    007.b Beta\n\
             \n1 epic(s), 1 task(s), 2 subtask(s)\n"
        );
    }

    #[test]
    fn test_render_empty_tree() {
        assert_eq!(
            render_tree(&TaskList::default()),
            "\n0 epic(s), 0 task(s), 0 subtask(s)\n"
        );
    }
}
