//! Stub generation.
//!
//! One stub is written per task and one per subtask. A stub is the stub
//! instruction block followed by the stub body (metadata plus empty section
//! placeholders). Filenames follow [`stub_filename`].
//!
//! Each item is rendered and written independently: a template failure for
//! one item writes nothing for it and the batch carries on. Failures are
//! collected in the [`StubReport`].

mod meta;
mod naming;


pub use meta::StubMeta;
pub use naming::{EMPTY_SLUG, NEEDS_REFINEMENT_MARKER, normalize_filename, slugify, stub_filename};

use crate::config::StubSettings;
use crate::error::{Result, TaskdocError};
use crate::fs::atomic_write_file;
use crate::manifest::{Artifact, ArtifactKind, Manifest};
use crate::tasklist::{Task, TaskList};
use crate::template::{TemplateError, TemplateKind, TemplateSet, vars};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// A rendered stub, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedStub {
    pub file_name: String,
    pub content: String,
    /// `Task 007` or `Task 007.a`.
    pub source: String,
    pub kind: ArtifactKind,
}

/// An item that could not be generated.
#[derive(Debug)]
pub struct StubFailure {
    pub source: String,
    pub error: TaskdocError,
}

/// Outcome of a stub run.
#[derive(Debug, Default)]
pub struct StubReport {
    /// Paths written, in generation order.
    pub written: Vec<PathBuf>,
    pub failures: Vec<StubFailure>,
    /// Path of the manifest, once written.
    pub manifest: Option<PathBuf>,
}

impl StubReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Renders and writes stubs into one output directory.
pub struct StubWriter<'a> {
    settings: &'a StubSettings,
    templates: &'a TemplateSet,
    out_dir: PathBuf,
}

impl<'a> StubWriter<'a> {
    pub fn new(settings: &'a StubSettings, templates: &'a TemplateSet, out_dir: &Path) -> Self {
        Self {
            settings,
            templates,
            out_dir: out_dir.to_path_buf(),
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Render the stub for a task (`subtask = None`) or one of its subtasks.
    pub fn render(
        &self,
        task: &Task,
        subtask: Option<usize>,
    ) -> std::result::Result<RenderedStub, TemplateError> {
        let (id, suffix, title, kind) = match subtask {
            None => (task.id(), None, task.title.as_str(), ArtifactKind::TaskStub),
            Some(index) => {
                let suffix = task.subtask_suffix(index)?;
                let title = task.subtasks.get(index).map(String::as_str).unwrap_or_default();
                (
                    task.subtask_id(index)?,
                    Some(suffix),
                    title,
                    ArtifactKind::SubtaskStub,
                )
            }
        };

        let meta = StubMeta::default_for(task.number, subtask.is_some(), self.settings);
        let variables = vars([
            ("task_id", id.clone()),
            ("title", title.to_string()),
            ("priority", meta.priority.to_string()),
            ("priority_scale", self.settings.priority_scale.to_string()),
            ("tier", meta.tier),
            ("complexity", meta.complexity.to_string()),
            ("phase", meta.phase),
            ("dependencies", meta.dependencies),
            ("description", self.settings.description.clone()),
        ]);

        let mut content = self.templates.render(TemplateKind::StubInstructions, &variables)?;
        content.push_str(&self.templates.render(TemplateKind::StubBody, &variables)?);

        Ok(RenderedStub {
            file_name: stub_filename(task.number, suffix, title, self.settings.slug_max_len),
            content,
            source: format!("Task {}", id),
            kind,
        })
    }

    /// Render and write one item, recording it in the manifest.
    fn write_one(
        &self,
        task: &Task,
        subtask: Option<usize>,
        manifest: &mut Manifest,
    ) -> Result<PathBuf> {
        let stub = self.render(task, subtask)?;
        let path = self.out_dir.join(&stub.file_name);
        atomic_write_file(&path, &stub.content)?;
        debug!(path = %path.display(), source = %stub.source, "stub written");

        manifest.push(Artifact {
            file: stub.file_name,
            kind: stub.kind,
            source: Some(stub.source),
            template: self.templates.get(TemplateKind::StubBody).label(),
        });
        Ok(path)
    }

    /// Write a parent stub for every task and a stub for every subtask, then
    /// the manifest.
    pub fn write_all(&self, list: &TaskList, input: &str) -> Result<StubReport> {
        std::fs::create_dir_all(&self.out_dir).map_err(|e| {
            TaskdocError::UserError(format!(
                "failed to create stub directory '{}': {}",
                self.out_dir.display(),
                e
            ))
        })?;

        let mut report = StubReport::default();
        let mut manifest = Manifest::new("stubs", input);

        for task in list.tasks() {
            let items = std::iter::once(None).chain((0..task.subtasks.len()).map(Some));
            for subtask in items {
                match self.write_one(task, subtask, &mut manifest) {
                    Ok(path) => report.written.push(path),
                    Err(error) => {
                        let source = match subtask {
                            None => format!("Task {}", task.id()),
                            Some(i) => format!("Task {} subtask #{}", task.id(), i + 1),
                        };
                        warn!(source = %source, error = %error, "stub not generated");
                        report.failures.push(StubFailure { source, error });
                    }
                }
            }
        }

        report.manifest = Some(manifest.write(&self.out_dir)?);
        info!(
            written = report.written.len(),
            failed = report.failures.len(),
            out_dir = %self.out_dir.display(),
            "stub generation finished"
        );
        Ok(report)
    }
}
