//! Document classification by heading.

use crate::tasklist::{epic_code, suffix_index};
use regex::Regex;
use std::sync::LazyLock;

static TASK_DOC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^#\s*Task\s+(\d{3})(?:\.([a-z]))?:\s*(.+?)\s*$").expect("Invalid task document regex")
});

static EPIC_DOC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^#\s*EPIC\s+(\d+)\s+—\s+(.+?)\s*$").expect("Invalid epic document regex")
});

/// What an existing document claims to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocKind {
    Task {
        number: u32,
        /// Position of the subtask when the heading carries a letter suffix.
        subtask: Option<usize>,
        title: String,
    },
    Epic {
        /// Normalized, e.g. `EPIC 3`.
        code: String,
        title: String,
    },
}

impl DocKind {
    /// Source id as written in manifests, e.g. `Task 007.a` or `EPIC 2`.
    pub fn source_id(&self) -> String {
        match self {
            DocKind::Task {
                number,
                subtask: Some(index),
                ..
            } => {
                let letter = crate::tasklist::subtask_suffix(*index).unwrap_or('?');
                format!("Task {:03}.{}", number, letter)
            }
            DocKind::Task { number, .. } => format!("Task {:03}", number),
            DocKind::Epic { code, .. } => code.clone(),
        }
    }
}

/// Classify a document by its first task or epic heading.
///
/// Only level-1 headings of the forms `# Task 007: …`, `# Task 007.a: …`
/// and `# EPIC 2 — …` count. When both forms are present the earlier one
/// wins.
pub fn classify(text: &str) -> Option<DocKind> {
    let task = TASK_DOC_RE.captures(text).and_then(|caps| {
        let whole = caps.get(0)?;
        let number = caps[1].parse().ok()?;
        let subtask = match caps.get(2) {
            Some(m) => Some(suffix_index(m.as_str().chars().next()?)?),
            None => None,
        };
        let kind = DocKind::Task {
            number,
            subtask,
            title: caps[3].to_string(),
        };
        Some((whole.start(), kind))
    });

    let epic = EPIC_DOC_RE.captures(text).and_then(|caps| {
        let whole = caps.get(0)?;
        let kind = DocKind::Epic {
            code: epic_code(&caps[1]),
            title: caps[2].to_string(),
        };
        Some((whole.start(), kind))
    });

    match (task, epic) {
        (Some((t, task)), Some((e, epic))) => Some(if e < t { epic } else { task }),
        (Some((_, task)), None) => Some(task),
        (None, Some((_, epic))) => Some(epic),
        (None, None) => None,
    }
}
