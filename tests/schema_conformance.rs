//! Conformance of the shipped configuration schema and examples.
//!
//! Each check of the suite runs as its own test against
//! `data/config-schema.json` and `docs/config-examples/`.

use std::path::Path;
use taskdoc::config::SchemaSettings;
use taskdoc::schema::{Check, ConformanceSuite};

fn suite() -> ConformanceSuite {
    ConformanceSuite::from_settings(&SchemaSettings::default())
        .rooted_at(Path::new(env!("CARGO_MANIFEST_DIR")))
}

fn assert_passes(check: Check) {
    let outcome = suite().run(&check);
    assert!(
        outcome.passed(),
        "{} failed:\n{}",
        check,
        outcome
            .violations
            .iter()
            .map(|v| format!("  {}", v))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

#[test]
fn schema_file_exists() {
    assert_passes(Check::SchemaFileExists);
}

#[test]
fn schema_is_object() {
    assert_passes(Check::SchemaIsObject);
}

#[test]
fn schema_declares_draft_2020_12() {
    assert_passes(Check::DeclaresDraft202012);
}

#[test]
fn schema_has_id() {
    assert_passes(Check::HasId);
}

#[test]
fn schema_has_title() {
    assert_passes(Check::HasTitle);
}

#[test]
fn schema_has_description() {
    assert_passes(Check::HasDescription);
}

#[test]
fn schema_requires_schema_version() {
    assert_passes(Check::RequiresSchemaVersion);
}

#[test]
fn schema_uses_defs_not_definitions() {
    assert_passes(Check::UsesDefs);
}

#[test]
fn schema_refs_use_defs() {
    assert_passes(Check::RefsUseDefs);
}

#[test]
fn schema_version_uses_pattern_not_enum() {
    assert_passes(Check::SchemaVersionPattern);
}

#[test]
fn schema_passes_meta_validation() {
    assert_passes(Check::MetaValid);
}

#[test]
fn valid_example_minimal() {
    assert_passes(Check::ValidExample("minimal.yml".to_string()));
}

#[test]
fn valid_example_full() {
    assert_passes(Check::ValidExample("full.yml".to_string()));
}

#[test]
fn valid_example_dotnet() {
    assert_passes(Check::ValidExample("dotnet.yml".to_string()));
}

#[test]
fn valid_example_node() {
    assert_passes(Check::ValidExample("node.yml".to_string()));
}

#[test]
fn valid_example_python() {
    assert_passes(Check::ValidExample("python.yml".to_string()));
}

#[test]
fn valid_example_go() {
    assert_passes(Check::ValidExample("go.yml".to_string()));
}

#[test]
fn valid_example_rust() {
    assert_passes(Check::ValidExample("rust.yml".to_string()));
}

#[test]
fn valid_example_java() {
    assert_passes(Check::ValidExample("java.yml".to_string()));
}

#[test]
fn minimal_example_is_minimal() {
    assert_passes(Check::MinimalIsMinimal);
}

#[test]
fn full_example_has_all_sections() {
    assert_passes(Check::FullHasAllSections);
}

#[test]
fn invalid_example_exists() {
    assert_passes(Check::InvalidExampleExists);
}

#[test]
fn invalid_example_fails_validation() {
    assert_passes(Check::InvalidExampleFails);
}

#[test]
fn temperature_constraint() {
    assert_passes(Check::TemperatureRange);
}

#[test]
fn max_tokens_constraint() {
    assert_passes(Check::MaxTokensMinimum);
}

#[test]
fn top_p_constraint() {
    assert_passes(Check::TopPRange);
}

#[test]
fn mode_default_excludes_burst() {
    assert_passes(Check::ModeDefaultEnum);
}

#[test]
fn project_name_pattern() {
    assert_passes(Check::ProjectNamePattern);
}

#[test]
fn project_type_enum() {
    assert_passes(Check::ProjectTypeEnum);
}

#[test]
fn validation_performance() {
    assert_passes(Check::ValidationLatency);
}

#[test]
fn full_suite_passes() {
    let report = suite().run_all();
    let failed: Vec<String> = report.failed().map(|o| o.check.name()).collect();
    assert!(failed.is_empty(), "failed checks: {:?}", failed);
}
