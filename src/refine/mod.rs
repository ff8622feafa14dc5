//! Context injection for task and epic documents.
//!
//! Each pass walks a tree of Markdown documents, classifies every file by
//! heading (see [`classify`]), and writes a refined copy:
//!
//! 1. any existing instruction block is stripped,
//! 2. the pass's instruction header is put in front,
//! 3. a Canonical Context section built from the task list is inserted after
//!    the header's closing `---`.
//!
//! Files that do not classify for the pass, or classify but have no entry
//! in the task list, get the header only. Running a pass over its own output
//! reproduces that output.
//!
//! | Pass  | Input                        | Output                |
//! |-------|------------------------------|-----------------------|
//! | tasks | `<in>/tasks` or `<in>`       | `<out>/refined-tasks` |
//! | epics | `<in>/epics` or `<in>`       | `<out>/refined-epics` |

mod classify;
mod context;

#[cfg(test)]
mod tests;

pub use classify::{DocKind, classify};
pub use context::{
    INSTRUCTION_MARKER, ensure_header, epic_task_lines, insert_context, sibling_lines,
    strip_instructions,
};

use crate::config::RefineMode;
use crate::error::{Result, TaskdocError};
use crate::fs::{atomic_write_file, markdown_files};
use crate::manifest::{Artifact, ArtifactKind, Manifest};
use crate::stubs::normalize_filename;
use crate::tasklist::{TaskIndex, TaskList};
use crate::template::{TemplateError, TemplateKind, TemplateSet, Vars, vars};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// One injection pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    Tasks,
    Epics,
}

impl Pass {
    /// Passes selected by a mode, in run order.
    pub fn for_mode(mode: RefineMode) -> Vec<Pass> {
        let mut passes = Vec::new();
        if mode.includes_tasks() {
            passes.push(Pass::Tasks);
        }
        if mode.includes_epics() {
            passes.push(Pass::Epics);
        }
        passes
    }

    /// Preferred input subdirectory.
    pub fn input_subdir(self) -> &'static str {
        match self {
            Pass::Tasks => "tasks",
            Pass::Epics => "epics",
        }
    }

    /// Output directory under the output root.
    pub fn output_dir(self) -> &'static str {
        match self {
            Pass::Tasks => "refined-tasks",
            Pass::Epics => "refined-epics",
        }
    }

    fn header_kind(self) -> TemplateKind {
        match self {
            Pass::Tasks => TemplateKind::TaskHeader,
            Pass::Epics => TemplateKind::EpicHeader,
        }
    }

    fn context_kind(self) -> TemplateKind {
        match self {
            Pass::Tasks => TemplateKind::TaskContext,
            Pass::Epics => TemplateKind::EpicContext,
        }
    }

    fn artifact_kind(self) -> ArtifactKind {
        match self {
            Pass::Tasks => ArtifactKind::RefinedTask,
            Pass::Epics => ArtifactKind::RefinedEpic,
        }
    }
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.input_subdir())
    }
}

/// How a document was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Header and canonical context.
    Refined,
    /// Classified, but the task list has no matching task, subtask or epic.
    NoCanonicalEntry,
    /// Heading does not match the pass's document kind.
    Unclassified,
}

/// A refined document, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefinedDoc {
    pub content: String,
    pub outcome: Outcome,
    pub source: Option<String>,
}

/// Results of one pass.
#[derive(Debug)]
pub struct PassReport {
    pub pass: Pass,
    pub input: PathBuf,
    pub output: PathBuf,
    pub refined: Vec<PathBuf>,
    pub no_canonical_entry: Vec<PathBuf>,
    pub unclassified: Vec<PathBuf>,
    pub failures: Vec<(PathBuf, TaskdocError)>,
    pub manifest: Option<PathBuf>,
}

impl PassReport {
    fn new(pass: Pass, input: PathBuf, output: PathBuf) -> Self {
        Self {
            pass,
            input,
            output,
            refined: Vec::new(),
            no_canonical_entry: Vec::new(),
            unclassified: Vec::new(),
            failures: Vec::new(),
            manifest: None,
        }
    }

    /// Number of files written.
    pub fn written(&self) -> usize {
        self.refined.len() + self.no_canonical_entry.len() + self.unclassified.len()
    }
}

/// Injects headers and canonical context using a parsed task list.
pub struct ContextInjector<'a> {
    index: TaskIndex<'a>,
    templates: &'a TemplateSet,
    /// Task-list name shown in context sections.
    source: String,
}

impl<'a> ContextInjector<'a> {
    pub fn new(list: &'a TaskList, templates: &'a TemplateSet, source: &str) -> Self {
        Self {
            index: list.index(),
            templates,
            source: source.to_string(),
        }
    }

    /// Refine a single document's text for a pass.
    pub fn refine(&self, pass: Pass, text: &str) -> std::result::Result<RefinedDoc, TemplateError> {
        let header = self.templates.render(pass.header_kind(), &Vars::new())?;
        let body = strip_instructions(text);
        let headed = ensure_header(&header, body);

        let kind = classify(body);
        let matched = match (pass, &kind) {
            (Pass::Tasks, Some(kind @ DocKind::Task { .. }))
            | (Pass::Epics, Some(kind @ DocKind::Epic { .. })) => kind,
            _ => {
                return Ok(RefinedDoc {
                    content: headed,
                    outcome: Outcome::Unclassified,
                    source: None,
                });
            }
        };

        let source = Some(matched.source_id());
        match self.context_for(pass, matched)? {
            Some(context) => Ok(RefinedDoc {
                content: insert_context(&headed, &context),
                outcome: Outcome::Refined,
                source,
            }),
            None => Ok(RefinedDoc {
                content: headed,
                outcome: Outcome::NoCanonicalEntry,
                source,
            }),
        }
    }

    /// Render the context section, or `None` when the task list has no entry
    /// for the task number or epic code.
    fn context_for(
        &self,
        pass: Pass,
        kind: &DocKind,
    ) -> std::result::Result<Option<String>, TemplateError> {
        let variables = match kind {
            DocKind::Task {
                number, subtask, ..
            } => {
                let Some(task) = self.index.task(*number) else {
                    return Ok(None);
                };
                // A subtask letter past the parsed list keeps the parent title.
                let (task_id, canonical_title) = match subtask {
                    None => (task.id(), task.title.clone()),
                    Some(i) => {
                        let title = task.subtasks.get(*i).unwrap_or(&task.title);
                        (task.subtask_id(*i)?, title.clone())
                    }
                };
                vars([
                    ("source", self.source.clone()),
                    ("epic_code", task.epic_code.clone()),
                    ("epic_title", task.epic_title.clone()),
                    ("task_id", task_id),
                    ("canonical_title", canonical_title),
                    ("siblings", sibling_lines(task)),
                ])
            }
            DocKind::Epic { code, .. } => {
                let Some(epic) = self.index.epic(code) else {
                    return Ok(None);
                };
                vars([
                    ("source", self.source.clone()),
                    ("epic_code", epic.code.clone()),
                    ("epic_title", epic.title.clone()),
                    ("task_lines", epic_task_lines(epic)),
                ])
            }
        };
        self.templates
            .render(pass.context_kind(), &variables)
            .map(Some)
    }

    /// Run one pass from `in_root` into `out_root`.
    pub fn run_pass(&self, pass: Pass, in_root: &Path, out_root: &Path) -> Result<PassReport> {
        let preferred = in_root.join(pass.input_subdir());
        let input = if preferred.is_dir() {
            preferred
        } else {
            in_root.to_path_buf()
        };
        if !input.is_dir() {
            return Err(TaskdocError::UserError(format!(
                "input directory '{}' does not exist",
                input.display()
            )));
        }

        let output = out_root.join(pass.output_dir());
        std::fs::create_dir_all(&output).map_err(|e| {
            TaskdocError::UserError(format!(
                "failed to create output directory '{}': {}",
                output.display(),
                e
            ))
        })?;

        // Compare canonical paths so the output root is skipped however it was spelled.
        let input = canonical(&input)?;
        let output = canonical(&output)?;
        let exclude = canonical(out_root)?;

        let mut report = PassReport::new(pass, input.clone(), output.clone());
        let mut manifest = Manifest::new("refine", input.display().to_string());

        for path in markdown_files(&input, Some(&exclude))? {
            match self.refine_file(pass, &path, &output) {
                Ok((target, doc)) => {
                    let file = target
                        .file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_default();
                    let (artifact_kind, template) = match doc.outcome {
                        Outcome::Refined => (
                            pass.artifact_kind(),
                            self.templates.get(pass.context_kind()).label(),
                        ),
                        _ => (
                            ArtifactKind::HeaderOnly,
                            self.templates.get(pass.header_kind()).label(),
                        ),
                    };
                    manifest.push(Artifact {
                        file,
                        kind: artifact_kind,
                        source: doc.source,
                        template,
                    });

                    match doc.outcome {
                        Outcome::Refined => report.refined.push(target),
                        Outcome::NoCanonicalEntry => {
                            warn!(file = %path.display(), "no canonical entry in task list");
                            report.no_canonical_entry.push(target)
                        }
                        Outcome::Unclassified => {
                            debug!(file = %path.display(), pass = %pass, "document not classified");
                            report.unclassified.push(target)
                        }
                    }
                }
                Err(error) => {
                    warn!(file = %path.display(), error = %error, "document not refined");
                    report.failures.push((path, error));
                }
            }
        }

        report.manifest = Some(manifest.write(&output)?);
        info!(
            pass = %pass,
            refined = report.refined.len(),
            no_canonical_entry = report.no_canonical_entry.len(),
            unclassified = report.unclassified.len(),
            failed = report.failures.len(),
            "refine pass finished"
        );
        Ok(report)
    }

    fn refine_file(&self, pass: Pass, path: &Path, output: &Path) -> Result<(PathBuf, RefinedDoc)> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            TaskdocError::UserError(format!("failed to read '{}': {}", path.display(), e))
        })?;
        let doc = self.refine(pass, &text)?;

        let name = path
            .file_name()
            .map(|n| normalize_filename(&n.to_string_lossy()))
            .ok_or_else(|| {
                TaskdocError::UserError(format!("invalid file path '{}'", path.display()))
            })?;
        let target = output.join(name);
        atomic_write_file(&target, &doc.content)?;
        debug!(from = %path.display(), to = %target.display(), "document refined");
        Ok((target, doc))
    }

    /// Run every pass a mode selects.
    pub fn run(&self, mode: RefineMode, in_root: &Path, out_root: &Path) -> Result<Vec<PassReport>> {
        Pass::for_mode(mode)
            .into_iter()
            .map(|pass| self.run_pass(pass, in_root, out_root))
            .collect()
    }
}

fn canonical(path: &Path) -> Result<PathBuf> {
    path.canonicalize().map_err(|e| {
        TaskdocError::UserError(format!("failed to resolve '{}': {}", path.display(), e))
    })
}
