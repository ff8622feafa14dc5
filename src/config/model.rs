//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for taskdoc.
///
/// This struct represents the contents of `taskdoc.yaml`. Every field has a
/// default, and unknown fields in the YAML are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the canonical task list.
    #[serde(default = "default_task_list")]
    pub task_list: String,

    /// Directory holding `<kind>.md` template overrides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templates_dir: Option<String>,

    /// Stub generation defaults.
    pub stubs: StubSettings,

    /// Context injector defaults.
    pub refine: RefineSettings,

    /// Schema conformance suite locations.
    pub schema: SchemaSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            task_list: default_task_list(),
            templates_dir: None,
            stubs: StubSettings::default(),
            refine: RefineSettings::default(),
            schema: SchemaSettings::default(),
        }
    }
}
