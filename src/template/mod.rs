//! Document templates for stubs and refined documents.
//!
//! Every template is a named, versioned definition keyed by [`TemplateKind`].
//! Rendering is a pure function of the definition body and a variable map
//! (see [`render_template`]), so callers and tests can swap definitions
//! through a [`TemplateSet`] without touching global state.
//!
//! # Overrides
//!
//! A `templates_dir` may hold `<kind>.md` files (e.g. `stub-body.md`). Each
//! file found replaces the built-in body for that kind.

mod builtin;
mod engine;


pub use engine::{TemplateError, Vars, render_template, vars};

use crate::error::{Result, TaskdocError};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Version of the built-in template bodies. Bump when any built-in text changes.
pub const BUILTIN_VERSION: u32 = 1;

/// The kinds of document fragments taskdoc renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TemplateKind {
    /// Instruction block at the top of a generated stub.
    StubInstructions,
    /// Metadata and placeholder sections of a stub.
    StubBody,
    /// Instruction header for refined task documents.
    TaskHeader,
    /// Instruction header for refined epic documents.
    EpicHeader,
    /// Canonical Context section for a task or subtask.
    TaskContext,
    /// Canonical Context section for an epic.
    EpicContext,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 6] = [
        TemplateKind::StubInstructions,
        TemplateKind::StubBody,
        TemplateKind::TaskHeader,
        TemplateKind::EpicHeader,
        TemplateKind::TaskContext,
        TemplateKind::EpicContext,
    ];

    /// Stable name, also the override file stem.
    pub fn name(self) -> &'static str {
        match self {
            TemplateKind::StubInstructions => "stub-instructions",
            TemplateKind::StubBody => "stub-body",
            TemplateKind::TaskHeader => "task-header",
            TemplateKind::EpicHeader => "epic-header",
            TemplateKind::TaskContext => "task-context",
            TemplateKind::EpicContext => "epic-context",
        }
    }

    fn builtin_body(self) -> &'static str {
        match self {
            TemplateKind::StubInstructions => builtin::STUB_INSTRUCTIONS,
            TemplateKind::StubBody => builtin::STUB_BODY,
            TemplateKind::TaskHeader => builtin::TASK_HEADER,
            TemplateKind::EpicHeader => builtin::EPIC_HEADER,
            TemplateKind::TaskContext => builtin::TASK_CONTEXT,
            TemplateKind::EpicContext => builtin::EPIC_CONTEXT,
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single template definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDef {
    pub kind: TemplateKind,
    pub version: u32,
    pub body: Cow<'static, str>,
    /// File the body was loaded from; `None` for built-ins.
    pub origin: Option<PathBuf>,
}

impl TemplateDef {
    /// The built-in definition for a kind.
    pub fn builtin(kind: TemplateKind) -> Self {
        Self {
            kind,
            version: BUILTIN_VERSION,
            body: Cow::Borrowed(kind.builtin_body()),
            origin: None,
        }
    }

    /// Identifier recorded in manifests, e.g. `stub-body@v1` or `stub-body@file`.
    pub fn label(&self) -> String {
        match self.origin {
            None => format!("{}@v{}", self.kind, self.version),
            Some(_) => format!("{}@file", self.kind),
        }
    }

    pub fn render(&self, variables: &Vars) -> std::result::Result<String, TemplateError> {
        render_template(&self.body, variables)
    }
}

/// The set of definitions used for one run.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    defs: BTreeMap<TemplateKind, TemplateDef>,
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TemplateSet {
    /// All built-in definitions.
    pub fn builtin() -> Self {
        let defs = TemplateKind::ALL
            .into_iter()
            .map(|kind| (kind, TemplateDef::builtin(kind)))
            .collect();
        Self { defs }
    }

    /// Built-ins, with any `<kind>.md` file in `dir` replacing its kind.
    pub fn with_overrides_from<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(TaskdocError::UserError(format!(
                "templates directory '{}' does not exist",
                dir.display()
            )));
        }

        let mut set = Self::builtin();
        for kind in TemplateKind::ALL {
            let path = dir.join(format!("{}.md", kind.name()));
            if !path.is_file() {
                continue;
            }
            let body = std::fs::read_to_string(&path).map_err(|e| {
                TaskdocError::UserError(format!(
                    "failed to read template '{}': {}",
                    path.display(),
                    e
                ))
            })?;
            debug!(kind = %kind, path = %path.display(), "template override loaded");
            set.replace(TemplateDef {
                kind,
                version: BUILTIN_VERSION,
                body: Cow::Owned(body),
                origin: Some(path),
            });
        }
        Ok(set)
    }

    /// Replace the definition for `def.kind`.
    pub fn replace(&mut self, def: TemplateDef) {
        self.defs.insert(def.kind, def);
    }

    pub fn get(&self, kind: TemplateKind) -> &TemplateDef {
        // Every kind is seeded by `builtin()` and `replace` never removes one.
        &self.defs[&kind]
    }

    pub fn render(
        &self,
        kind: TemplateKind,
        variables: &Vars,
    ) -> std::result::Result<String, TemplateError> {
        self.get(kind).render(variables)
    }
}
