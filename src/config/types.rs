//! Configuration section types and defaults.

use serde::{Deserialize, Serialize};

/// Which document passes the context injector runs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum RefineMode {
    /// Task documents only (`refined-tasks/`).
    Tasks,
    /// Epic documents only (`refined-epics/`).
    Epics,
    /// Both passes (default).
    #[default]
    All,
}

impl RefineMode {
    pub fn includes_tasks(self) -> bool {
        matches!(self, RefineMode::Tasks | RefineMode::All)
    }

    pub fn includes_epics(self) -> bool {
        matches!(self, RefineMode::Epics | RefineMode::All)
    }
}

/// Stub generation defaults.
///
/// These are placeholders meant for manual follow-up, not estimates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StubSettings {
    /// Directory stubs are written to.
    pub out_dir: String,
    pub tier: String,
    pub phase: String,
    /// Complexity points for parent tasks.
    pub task_complexity: u32,
    /// Complexity points for subtasks.
    pub subtask_complexity: u32,
    /// Denominator shown after the priority (`7 / 49`).
    pub priority_scale: u32,
    /// Text placed under "Description (EXPAND THIS)".
    pub description: String,
    /// Maximum slug length in generated filenames.
    pub slug_max_len: usize,
}

impl Default for StubSettings {
    fn default() -> Self {
        Self {
            out_dir: default_stub_out_dir(),
            tier: "S".to_string(),
            phase: "Phase 1 - Foundation".to_string(),
            task_complexity: 8,
            subtask_complexity: 5,
            priority_scale: 49,
            description: "Expand this stub into a complete specification following the instructions."
                .to_string(),
            slug_max_len: 80,
        }
    }
}

/// Context injector defaults (overridable with `--in`, `--out`, `--mode`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefineSettings {
    pub in_dir: String,
    pub out_dir: String,
    pub mode: RefineMode,
}

impl Default for RefineSettings {
    fn default() -> Self {
        Self {
            in_dir: ".".to_string(),
            out_dir: "./refined".to_string(),
            mode: RefineMode::All,
        }
    }
}

/// Locations and thresholds for the schema conformance suite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaSettings {
    pub schema_path: String,
    pub examples_dir: String,
    /// Example file names expected to validate.
    pub valid_examples: Vec<String>,
    /// Example file name expected to fail validation.
    pub invalid_example: String,
    /// Upper bound for validating one example, in milliseconds.
    pub max_validation_ms: u64,
}

impl Default for SchemaSettings {
    fn default() -> Self {
        Self {
            schema_path: "data/config-schema.json".to_string(),
            examples_dir: "docs/config-examples".to_string(),
            valid_examples: default_valid_examples(),
            invalid_example: "invalid.yml".to_string(),
            max_validation_ms: 100,
        }
    }
}

/// Example files shipped with the schema that must validate.
pub fn default_valid_examples() -> Vec<String> {
    [
        "minimal.yml",
        "full.yml",
        "dotnet.yml",
        "node.yml",
        "python.yml",
        "go.yml",
        "rust.yml",
        "java.yml",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

pub(crate) fn default_task_list() -> String {
    "task-list.md".to_string()
}

pub(crate) fn default_stub_out_dir() -> String {
    "tasks/stubs".to_string()
}
