//! Tests for config functionality.

use crate::config::types::default_valid_examples;
use crate::config::{Config, RefineMode};
use crate::template::TemplateKind;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.task_list, "task-list.md");
    assert!(config.templates_dir.is_none());
    assert_eq!(config.stubs.out_dir, "tasks/stubs");
    assert_eq!(config.stubs.tier, "S");
    assert_eq!(config.stubs.phase, "Phase 1 - Foundation");
    assert_eq!(config.stubs.task_complexity, 8);
    assert_eq!(config.stubs.subtask_complexity, 5);
    assert_eq!(config.stubs.priority_scale, 49);
    assert_eq!(config.stubs.slug_max_len, 80);
    assert_eq!(config.refine.in_dir, ".");
    assert_eq!(config.refine.out_dir, "./refined");
    assert_eq!(config.refine.mode, RefineMode::All);
    assert_eq!(config.schema.schema_path, "data/config-schema.json");
    assert_eq!(config.schema.examples_dir, "docs/config-examples");
    assert_eq!(config.schema.valid_examples.len(), 8);
    assert_eq!(config.schema.invalid_example, "invalid.yml");
    assert_eq!(config.schema.max_validation_ms, 100);
}

#[test]
fn test_parse_empty_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
task_list: docs/task-list.md
stubs:
  tier: M
  subtask_complexity: 3
refine:
  mode: epics
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.task_list, "docs/task-list.md");
    assert_eq!(config.stubs.tier, "M");
    assert_eq!(config.stubs.subtask_complexity, 3);
    assert_eq!(config.refine.mode, RefineMode::Epics);

    // Unspecified values keep their defaults
    assert_eq!(config.stubs.task_complexity, 8);
    assert_eq!(config.stubs.out_dir, "tasks/stubs");
    assert_eq!(config.refine.out_dir, "./refined");
    assert_eq!(config.schema.valid_examples, default_valid_examples());
}

#[test]
fn test_unknown_fields_are_ignored() {
    let yaml = r#"
future_option: true
stubs:
  tier: L
  also_unknown: 3
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.stubs.tier, "L");
}

#[test]
fn test_invalid_yaml_is_user_error() {
    let err = Config::from_yaml("stubs: [not, a, map]").unwrap_err();
    assert!(err.to_string().contains("failed to parse config YAML"));
}

#[test]
fn test_zero_complexity_rejected() {
    let err = Config::from_yaml("stubs:\n  task_complexity: 0\n").unwrap_err();
    assert!(err.to_string().contains("complexity"));
}

#[test]
fn test_zero_slug_len_rejected() {
    let err = Config::from_yaml("stubs:\n  slug_max_len: 0\n").unwrap_err();
    assert!(err.to_string().contains("slug_max_len"));
}

#[test]
fn test_example_names_must_be_plain() {
    let err = Config::from_yaml("schema:\n  invalid_example: ../invalid.yml\n").unwrap_err();
    assert!(err.to_string().contains("plain file name"));

    let err = Config::from_yaml("schema:\n  valid_examples: []\n").unwrap_err();
    assert!(err.to_string().contains("at least one"));
}

#[test]
fn test_yaml_round_trip() {
    let mut config = Config::default();
    config.stubs.phase = "Phase 2 - Runtime".to_string();
    config.refine.mode = RefineMode::Tasks;

    let yaml = config.to_yaml().unwrap();
    let parsed = Config::from_yaml(&yaml).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("taskdoc.yaml");
    std::fs::write(&path, "stubs:\n  priority_scale: 60\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.stubs.priority_scale, 60);
}

#[test]
fn test_resolve_explicit_missing_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.yaml");
    let err = Config::resolve(Some(missing.as_path())).unwrap_err();
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
fn test_templates_from_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("epic-header.md"), "# EPIC HEADER\n").unwrap();

    let config = Config {
        templates_dir: Some(dir.path().display().to_string()),
        ..Default::default()
    };
    let set = config.templates().unwrap();
    assert_eq!(set.get(TemplateKind::EpicHeader).body, "# EPIC HEADER\n");

    let builtin = Config::default().templates().unwrap();
    assert!(builtin.get(TemplateKind::EpicHeader).origin.is_none());
}
