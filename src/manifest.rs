//! Generation manifests.
//!
//! Each run writes `manifest.json` into every output directory it touched,
//! listing the files it produced, the task or epic each came from, and the
//! template that rendered it. Reruns overwrite the manifest along with the
//! documents, so the manifest always describes the directory's latest run.
//!
//! ```text
//! {
//!   "generated_at": "2026-01-13T10:00:00Z",
//!   "generated_by": "neil@devbox",
//!   "command": "stubs",
//!   "input": "task-list.md",
//!   "artifacts": [
//!     { "file": "task-000-repository-layout (NEEDS-REFINEMENT).md",
//!       "kind": "task_stub", "source": "Task 000", "template": "stub-body@v1" }
//!   ]
//! }
//! ```

use crate::error::{Result, TaskdocError};
use crate::fs::atomic_write_file;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of the manifest inside an output directory.
pub const MANIFEST_FILE: &str = "manifest.json";

/// What kind of document an artifact is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    TaskStub,
    SubtaskStub,
    RefinedTask,
    RefinedEpic,
    /// Refined with a header only: heading did not classify or had no canonical entry.
    HeaderOnly,
}

/// One generated file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    /// File name relative to the manifest's directory.
    pub file: String,
    pub kind: ArtifactKind,
    /// Source id, e.g. `Task 007.a` or `EPIC 1`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Template label of the main body, e.g. `stub-body@v1`.
    pub template: String,
}

/// The manifest for one output directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub generated_at: DateTime<Utc>,
    /// `user@host` of whoever ran the command.
    pub generated_by: String,
    /// Subcommand that produced the directory (`stubs`, `refine`).
    pub command: String,
    /// Primary input (task list or input directory).
    pub input: String,
    pub artifacts: Vec<Artifact>,
}

impl Manifest {
    pub fn new(command: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            generated_at: Utc::now(),
            generated_by: actor_string(),
            command: command.into(),
            input: input.into(),
            artifacts: Vec::new(),
        }
    }

    pub fn push(&mut self, artifact: Artifact) {
        self.artifacts.push(artifact);
    }

    pub(crate) fn len(&self) -> usize {
        self.artifacts.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// Write `manifest.json` into `dir`, returning its path.
    pub fn write(&self, dir: &Path) -> Result<PathBuf> {
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            TaskdocError::UserError(format!("failed to serialize manifest: {}", e))
        })?;
        let path = dir.join(MANIFEST_FILE);
        atomic_write_file(&path, &(json + "\n"))?;
        debug!(path = %path.display(), artifacts = self.len(), "manifest written");
        Ok(path)
    }

    #[cfg(test)]
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            TaskdocError::UserError(format!(
                "failed to read manifest '{}': {}",
                path.display(),
                e
            ))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            TaskdocError::UserError(format!(
                "failed to parse manifest '{}': {}",
                path.display(),
                e
            ))
        })
    }
}

fn actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn stub_artifact() -> Artifact {
        Artifact {
            file: "task-007-alpha (NEEDS-REFINEMENT).md".to_string(),
            kind: ArtifactKind::TaskStub,
            source: Some("Task 007".to_string()),
            template: "stub-body@v1".to_string(),
        }
    }

    #[test]
    fn test_new_manifest_is_empty() {
        let manifest = Manifest::new("stubs", "task-list.md");
        assert!(manifest.is_empty());
        assert_eq!(manifest.command, "stubs");
        assert!(manifest.generated_by.contains('@'));
    }

    #[test]
    fn test_artifact_kind_serialization() {
        let json = serde_json::to_string(&ArtifactKind::SubtaskStub).unwrap();
        assert_eq!(json, "\"subtask_stub\"");
        let json = serde_json::to_string(&ArtifactKind::HeaderOnly).unwrap();
        assert_eq!(json, "\"header_only\"");
    }

    #[test]
    fn test_artifact_without_source_omits_field() {
        let artifact = Artifact {
            source: None,
            ..stub_artifact()
        };
        let json = serde_json::to_string(&artifact).unwrap();
        assert!(!json.contains("source"));
    }

    #[test]
    fn test_write_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut manifest = Manifest::new("stubs", "task-list.md");
        manifest.push(stub_artifact());

        let path = manifest.write(dir.path()).unwrap();
        assert_eq!(path, dir.path().join(MANIFEST_FILE));

        let loaded = Manifest::load(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.artifacts[0], stub_artifact());
        assert_eq!(loaded.generated_at, manifest.generated_at);
    }

    #[test]
    fn test_load_missing_manifest() {
        let dir = TempDir::new().unwrap();
        let err = Manifest::load(&dir.path().join(MANIFEST_FILE)).unwrap_err();
        assert!(err.to_string().contains("failed to read manifest"));
    }
}
