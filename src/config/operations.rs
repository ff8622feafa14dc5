//! Config loading, validation, and template resolution.

use super::model::Config;
use crate::error::{Result, TaskdocError};
use crate::template::TemplateSet;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "taskdoc.yaml";

impl Config {
    /// Load config from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            TaskdocError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the config for a run.
    ///
    /// An explicit path must exist. Without one, `taskdoc.yaml` in the working
    /// directory is used when present, otherwise the defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    debug!(path = %path.display(), "using config file");
                    Self::load(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse config from a YAML string. An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| {
                TaskdocError::UserError(format!("failed to parse config YAML: {}", e))
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            TaskdocError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values.
    ///
    /// - complexities, `priority_scale`, `slug_max_len` and `max_validation_ms` are positive
    /// - at least one valid example is listed
    /// - example names are plain file names
    pub fn validate(&self) -> Result<()> {
        let stubs = &self.stubs;
        if stubs.task_complexity == 0 || stubs.subtask_complexity == 0 {
            return Err(invalid("stubs complexity values must be greater than 0"));
        }
        if stubs.priority_scale == 0 {
            return Err(invalid("stubs.priority_scale must be greater than 0"));
        }
        if stubs.slug_max_len == 0 {
            return Err(invalid("stubs.slug_max_len must be greater than 0"));
        }

        let schema = &self.schema;
        if schema.max_validation_ms == 0 {
            return Err(invalid("schema.max_validation_ms must be greater than 0"));
        }
        if schema.valid_examples.is_empty() {
            return Err(invalid("schema.valid_examples must list at least one file"));
        }
        for name in schema
            .valid_examples
            .iter()
            .chain(std::iter::once(&schema.invalid_example))
        {
            if name.is_empty() || name.contains('/') || name.contains('\\') || name.contains("..")
            {
                return Err(TaskdocError::UserError(format!(
                    "config validation failed: example '{}' must be a plain file name",
                    name
                )));
            }
        }

        Ok(())
    }

    /// Template definitions for this run: built-ins plus any overrides.
    pub fn templates(&self) -> Result<TemplateSet> {
        match &self.templates_dir {
            Some(dir) => TemplateSet::with_overrides_from(dir),
            None => Ok(TemplateSet::builtin()),
        }
    }
}

fn invalid(message: &str) -> TaskdocError {
    TaskdocError::UserError(format!("config validation failed: {}", message))
}
