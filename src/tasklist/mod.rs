//! Task-list parsing.
//!
//! The task list is a Markdown document with this heading structure:
//!
//! ```text
//! ## EPIC 1 — Foundation
//! ### Task 000: Repository layout
//! #### Solution structure
//! #### Build scripts
//! ### Task 001: Operating modes
//! ```
//!
//! Parsing runs in two passes: [`scan_headings`] produces a flat list of
//! heading records, then [`fold_headings`] nests them into epics, tasks and
//! subtask titles. The parser is permissive: headings that do not match the
//! expected shapes are skipped, never reported as errors.

mod fold;
mod scan;


pub use fold::{epic_code, fold_headings, match_epic, match_task};
pub use scan::{Heading, scan_headings};

use crate::error::{Result, TaskdocError};
use crate::template::TemplateError;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::{debug, warn};

/// A top-level grouping of tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Epic {
    /// Normalized code, e.g. `EPIC 3`.
    pub code: String,
    pub title: String,
    pub tasks: Vec<Task>,
}

/// A numbered task and its subtask titles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub number: u32,
    pub title: String,
    /// Subtask titles in document order. Position determines the letter suffix.
    pub subtasks: Vec<String>,
    pub epic_code: String,
    pub epic_title: String,
}

impl Task {
    /// Zero-padded task id, e.g. `007`.
    pub fn id(&self) -> String {
        format!("{:03}", self.number)
    }

    /// Display id of a subtask, e.g. `007.a`.
    pub fn subtask_id(&self, index: usize) -> std::result::Result<String, TemplateError> {
        let suffix = self.subtask_suffix(index)?;
        Ok(format!("{:03}.{}", self.number, suffix))
    }

    /// Letter suffix of a subtask by position.
    pub fn subtask_suffix(&self, index: usize) -> std::result::Result<char, TemplateError> {
        subtask_suffix(index).ok_or(TemplateError::SuffixOverflow {
            task: self.number,
            index,
        })
    }
}

/// `a` for index 0 through `z` for index 25.
pub fn subtask_suffix(index: usize) -> Option<char> {
    (index < 26).then(|| char::from(b'a' + index as u8))
}

/// Position of a subtask letter suffix (`a` → 0).
pub fn suffix_index(suffix: char) -> Option<usize> {
    suffix
        .is_ascii_lowercase()
        .then(|| (suffix as u8 - b'a') as usize)
}

/// A parsed task list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    pub epics: Vec<Epic>,
}

impl TaskList {
    /// Parse task-list Markdown.
    pub fn parse(text: &str) -> Self {
        let headings = scan_headings(text);
        let epics = fold_headings(&headings);
        debug!(
            headings = headings.len(),
            epics = epics.len(),
            "task list parsed"
        );
        Self { epics }
    }

    /// Read and parse a task-list file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            TaskdocError::UserError(format!(
                "failed to read task list '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(Self::parse(&text))
    }

    /// All tasks across all epics, in document order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.epics.iter().flat_map(|e| e.tasks.iter())
    }

    pub fn task_count(&self) -> usize {
        self.tasks().count()
    }

    pub fn subtask_count(&self) -> usize {
        self.tasks().map(|t| t.subtasks.len()).sum()
    }

    /// Build lookup tables for the context injector.
    pub fn index(&self) -> TaskIndex<'_> {
        TaskIndex::build(self)
    }
}

/// Lookup tables over a parsed task list.
///
/// When a task number or epic code appears more than once, the first
/// occurrence wins and the duplicate is logged.
#[derive(Debug)]
pub struct TaskIndex<'a> {
    epics: HashMap<&'a str, &'a Epic>,
    tasks: BTreeMap<u32, &'a Task>,
}

impl<'a> TaskIndex<'a> {
    pub fn build(list: &'a TaskList) -> Self {
        let mut epics = HashMap::new();
        let mut tasks = BTreeMap::new();

        for epic in &list.epics {
            if epics.contains_key(epic.code.as_str()) {
                warn!(epic = %epic.code, "duplicate epic code in task list; keeping first");
            } else {
                epics.insert(epic.code.as_str(), epic);
            }

            for task in &epic.tasks {
                if tasks.contains_key(&task.number) {
                    warn!(task = %task.id(), "duplicate task number in task list; keeping first");
                } else {
                    tasks.insert(task.number, task);
                }
            }
        }

        Self { epics, tasks }
    }

    pub fn epic(&self, code: &str) -> Option<&'a Epic> {
        self.epics.get(code).copied()
    }

    pub fn task(&self, number: u32) -> Option<&'a Task> {
        self.tasks.get(&number).copied()
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}
