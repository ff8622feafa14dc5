//! Default stub metadata.

use crate::config::StubSettings;

/// Header metadata of a stub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubMeta {
    pub priority: u32,
    pub tier: String,
    pub complexity: u32,
    pub phase: String,
    pub dependencies: String,
}

impl StubMeta {
    /// Placeholder metadata for a task or subtask, meant to be edited by hand.
    ///
    /// Priority is the task number. Everything except complexity and
    /// dependencies comes straight from the settings.
    pub fn default_for(task_number: u32, is_subtask: bool, settings: &StubSettings) -> Self {
        let complexity = if is_subtask {
            settings.subtask_complexity
        } else {
            settings.task_complexity
        };
        let dependencies = if task_number > 0 { "Task 000" } else { "None" };

        Self {
            priority: task_number,
            tier: settings.tier.clone(),
            complexity,
            phase: settings.phase.clone(),
            dependencies: dependencies.to_string(),
        }
    }
}
