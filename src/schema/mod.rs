//! Conformance suite for the configuration JSON Schema and its examples.
//!
//! The suite is a fixed list of independent [`Check`]s over read-only
//! fixtures: the schema document and a directory of YAML examples. Each
//! check produces a [`CheckOutcome`] carrying the violations it found, so a
//! report lists every problem at once instead of stopping at the first.

mod checks;


pub use checks::FULL_SECTIONS;

use crate::config::SchemaSettings;
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Example expected to carry only the essentials.
pub const MINIMAL_EXAMPLE: &str = "minimal.yml";
/// Example expected to carry every section.
pub const FULL_EXAMPLE: &str = "full.yml";

/// One finding: where it is and what is wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON pointer into the schema or example, or a file path.
    pub path: String,
    pub message: String,
}

impl Violation {
    pub fn at(path: impl fmt::Display, message: impl Into<String>) -> Self {
        Self {
            path: path.to_string(),
            message: message.into(),
        }
    }

    /// A violation about a document as a whole.
    pub fn root(message: impl Into<String>) -> Self {
        Self::at("", message)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// A conformance check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Check {
    SchemaFileExists,
    SchemaIsObject,
    DeclaresDraft202012,
    HasId,
    HasTitle,
    HasDescription,
    RequiresSchemaVersion,
    UsesDefs,
    RefsUseDefs,
    SchemaVersionPattern,
    MetaValid,
    /// The named example validates.
    ValidExample(String),
    MinimalIsMinimal,
    FullHasAllSections,
    InvalidExampleExists,
    InvalidExampleFails,
    TemperatureRange,
    MaxTokensMinimum,
    TopPRange,
    ModeDefaultEnum,
    ProjectNamePattern,
    ProjectTypeEnum,
    ValidationLatency,
}

impl Check {
    pub fn name(&self) -> String {
        let name = match self {
            Check::SchemaFileExists => "schema-file-exists",
            Check::SchemaIsObject => "schema-is-object",
            Check::DeclaresDraft202012 => "declares-draft-2020-12",
            Check::HasId => "has-id",
            Check::HasTitle => "has-title",
            Check::HasDescription => "has-description",
            Check::RequiresSchemaVersion => "requires-schema-version",
            Check::UsesDefs => "uses-defs",
            Check::RefsUseDefs => "refs-use-defs",
            Check::SchemaVersionPattern => "schema-version-pattern",
            Check::MetaValid => "meta-valid",
            Check::ValidExample(file) => return format!("valid-example:{}", file),
            Check::MinimalIsMinimal => "minimal-is-minimal",
            Check::FullHasAllSections => "full-has-all-sections",
            Check::InvalidExampleExists => "invalid-example-exists",
            Check::InvalidExampleFails => "invalid-example-fails",
            Check::TemperatureRange => "temperature-range",
            Check::MaxTokensMinimum => "max-tokens-minimum",
            Check::TopPRange => "top-p-range",
            Check::ModeDefaultEnum => "mode-default-enum",
            Check::ProjectNamePattern => "project-name-pattern",
            Check::ProjectTypeEnum => "project-type-enum",
            Check::ValidationLatency => "validation-latency",
        };
        name.to_string()
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Result of one check.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub check: Check,
    pub violations: Vec<Violation>,
    /// Measured time, for timing checks.
    pub elapsed: Option<Duration>,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Outcomes of a full suite run, in check order.
#[derive(Debug, Clone, Default)]
pub struct SuiteReport {
    pub outcomes: Vec<CheckOutcome>,
}

impl SuiteReport {
    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn failed(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes.iter().filter(|o| !o.passed())
    }

    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(CheckOutcome::passed)
    }
}

/// The conformance suite over one schema and one examples directory.
#[derive(Debug, Clone)]
pub struct ConformanceSuite {
    schema_path: PathBuf,
    examples_dir: PathBuf,
    valid_examples: Vec<String>,
    invalid_example: String,
    max_validation: Duration,
}

impl ConformanceSuite {
    /// Suite configured from settings, with paths taken as given.
    pub fn from_settings(settings: &SchemaSettings) -> Self {
        Self {
            schema_path: PathBuf::from(&settings.schema_path),
            examples_dir: PathBuf::from(&settings.examples_dir),
            valid_examples: settings.valid_examples.clone(),
            invalid_example: settings.invalid_example.clone(),
            max_validation: Duration::from_millis(settings.max_validation_ms),
        }
    }

    /// Replace the schema and examples locations.
    pub fn with_paths(mut self, schema_path: &Path, examples_dir: &Path) -> Self {
        self.schema_path = schema_path.to_path_buf();
        self.examples_dir = examples_dir.to_path_buf();
        self
    }

    /// Resolve relative locations against `base`.
    pub fn rooted_at(mut self, base: &Path) -> Self {
        self.schema_path = base.join(&self.schema_path);
        self.examples_dir = base.join(&self.examples_dir);
        self
    }

    pub fn schema_path(&self) -> &Path {
        &self.schema_path
    }

    pub fn examples_dir(&self) -> &Path {
        &self.examples_dir
    }

    /// Every check, in report order.
    pub fn checks(&self) -> Vec<Check> {
        let mut list = vec![
            Check::SchemaFileExists,
            Check::SchemaIsObject,
            Check::DeclaresDraft202012,
            Check::HasId,
            Check::HasTitle,
            Check::HasDescription,
            Check::RequiresSchemaVersion,
            Check::UsesDefs,
            Check::RefsUseDefs,
            Check::SchemaVersionPattern,
            Check::MetaValid,
        ];
        list.extend(
            self.valid_examples
                .iter()
                .map(|file| Check::ValidExample(file.clone())),
        );
        list.extend([
            Check::MinimalIsMinimal,
            Check::FullHasAllSections,
            Check::InvalidExampleExists,
            Check::InvalidExampleFails,
            Check::TemperatureRange,
            Check::MaxTokensMinimum,
            Check::TopPRange,
            Check::ModeDefaultEnum,
            Check::ProjectNamePattern,
            Check::ProjectTypeEnum,
            Check::ValidationLatency,
        ]);
        list
    }

    /// Run every check.
    pub fn run_all(&self) -> SuiteReport {
        let outcomes = self.checks().iter().map(|check| self.run(check)).collect();
        SuiteReport { outcomes }
    }

    /// Run a single check.
    pub fn run(&self, check: &Check) -> CheckOutcome {
        let mut elapsed = None;
        let violations = match check {
            Check::SchemaFileExists => checks::schema_file_exists(&self.schema_path),
            Check::SchemaIsObject => self.with_schema(checks::schema_is_object),
            Check::DeclaresDraft202012 => self.with_schema(checks::declares_draft),
            Check::HasId => self.with_schema(checks::has_id),
            Check::HasTitle => self.with_schema(checks::has_title),
            Check::HasDescription => self.with_schema(checks::has_description),
            Check::RequiresSchemaVersion => self.with_schema(checks::requires_schema_version),
            Check::UsesDefs => self.with_schema(checks::uses_defs),
            Check::RefsUseDefs => self.with_schema(checks::refs_use_defs),
            Check::SchemaVersionPattern => self.with_schema(checks::schema_version_pattern),
            Check::MetaValid => self.with_schema(checks::meta_valid),
            Check::ValidExample(file) => self.with_validated(file, checks::example_is_valid),
            Check::MinimalIsMinimal => self.with_example(MINIMAL_EXAMPLE, checks::minimal_is_minimal),
            Check::FullHasAllSections => {
                self.with_example(FULL_EXAMPLE, checks::full_has_all_sections)
            }
            Check::InvalidExampleExists => {
                checks::example_exists(&self.examples_dir.join(&self.invalid_example))
            }
            Check::InvalidExampleFails => {
                self.with_validated(&self.invalid_example, checks::example_is_rejected)
            }
            Check::TemperatureRange => self.with_schema(checks::temperature_range),
            Check::MaxTokensMinimum => self.with_schema(checks::max_tokens_minimum),
            Check::TopPRange => self.with_schema(checks::top_p_range),
            Check::ModeDefaultEnum => self.with_schema(checks::mode_default_enum),
            Check::ProjectNamePattern => self.with_schema(checks::project_name_pattern),
            Check::ProjectTypeEnum => self.with_schema(checks::project_type_enum),
            Check::ValidationLatency => {
                self.with_validated(FULL_EXAMPLE, |validator, example| {
                    let (violations, took) =
                        checks::validation_latency(validator, example, self.max_validation);
                    elapsed = Some(took);
                    violations
                })
            }
        };

        debug!(check = %check, violations = violations.len(), "check finished");
        CheckOutcome {
            check: check.clone(),
            violations,
            elapsed,
        }
    }

    fn with_schema(&self, check: impl FnOnce(&Value) -> Vec<Violation>) -> Vec<Violation> {
        match checks::load_schema(&self.schema_path) {
            Ok(schema) => check(&schema),
            Err(v) => vec![v],
        }
    }

    fn with_example(
        &self,
        file: &str,
        check: impl FnOnce(&Value) -> Vec<Violation>,
    ) -> Vec<Violation> {
        match checks::load_example(&self.examples_dir.join(file)) {
            Ok(example) => check(&example),
            Err(v) => vec![v],
        }
    }

    fn with_validated(
        &self,
        file: &str,
        check: impl FnOnce(&jsonschema::Validator, &Value) -> Vec<Violation>,
    ) -> Vec<Violation> {
        let validator = match checks::load_schema(&self.schema_path).and_then(|s| checks::compile(&s)) {
            Ok(validator) => validator,
            Err(v) => return vec![v],
        };
        match checks::load_example(&self.examples_dir.join(file)) {
            Ok(example) => check(&validator, &example),
            Err(v) => vec![v],
        }
    }
}
