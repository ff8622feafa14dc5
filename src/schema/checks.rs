//! Individual conformance checks.
//!
//! Every check returns the list of violations it found; an empty list is a
//! pass. Checks never panic and never depend on each other: each one loads
//! what it needs, so a missing schema fails the schema checks without
//! masking the example checks' own findings.

use super::Violation;
use jsonschema::Validator;
use serde_json::Value;
use std::hint::black_box;
use std::path::Path;
use std::time::{Duration, Instant};

pub(super) const DRAFT_2020_12: &str = "https://json-schema.org/draft/2020-12/schema";
pub(super) const SCHEMA_ID: &str = "https://acode.dev/schemas/config-v1.json";
pub(super) const SCHEMA_TITLE: &str = "Acode Configuration";
pub(super) const SCHEMA_VERSION_PATTERN: &str = r"^\d+\.\d+\.\d+$";
pub(super) const PROJECT_NAME_PATTERN: &str = "^[a-z0-9][a-z0-9-_]*$";

/// Top-level sections a full example must carry.
pub const FULL_SECTIONS: [&str; 9] = [
    "schema_version",
    "project",
    "mode",
    "model",
    "commands",
    "paths",
    "ignore",
    "network",
    "storage",
];

const PROJECT_TYPES: [&str; 7] = ["dotnet", "node", "python", "go", "rust", "java", "other"];

const MINIMAL_MAX_KEYS: usize = 3;

// -------------------------------------------------------------------------
// Loading
// -------------------------------------------------------------------------

pub(super) fn load_schema(path: &Path) -> Result<Value, Violation> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        Violation::at(path.display(), format!("cannot read schema: {}", e))
    })?;
    serde_json::from_str(&text)
        .map_err(|e| Violation::at(path.display(), format!("schema is not valid JSON: {}", e)))
}

/// Load a YAML example as a JSON value.
pub(super) fn load_example(path: &Path) -> Result<Value, Violation> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        Violation::at(path.display(), format!("cannot read example: {}", e))
    })?;
    serde_yaml::from_str(&text)
        .map_err(|e| Violation::at(path.display(), format!("example is not valid YAML: {}", e)))
}

pub(super) fn compile(schema: &Value) -> Result<Validator, Violation> {
    jsonschema::draft202012::new(schema)
        .map_err(|e| Violation::at(e.instance_path.to_string(), format!("invalid schema: {}", e)))
}

/// All validation errors of `instance`, each with its instance path.
pub(super) fn validation_errors(validator: &Validator, instance: &Value) -> Vec<Violation> {
    validator
        .iter_errors(instance)
        .map(|error| Violation::at(error.instance_path.to_string(), error.to_string()))
        .collect()
}

fn lookup<'a>(schema: &'a Value, pointer: &str) -> Result<&'a Value, Violation> {
    schema
        .pointer(pointer)
        .ok_or_else(|| Violation::at(pointer, "missing from schema"))
}

fn expect_str(schema: &Value, pointer: &str, expected: &str) -> Vec<Violation> {
    match lookup(schema, pointer) {
        Ok(Value::String(actual)) if actual == expected => Vec::new(),
        Ok(other) => vec![Violation::at(
            pointer,
            format!("expected \"{}\", found {}", expected, other),
        )],
        Err(v) => vec![v],
    }
}

fn expect_number(schema: &Value, pointer: &str, expected: f64) -> Vec<Violation> {
    match lookup(schema, pointer).map(Value::as_f64) {
        Ok(Some(actual)) if actual == expected => Vec::new(),
        Ok(_) => vec![Violation::at(pointer, format!("expected {}", expected))],
        Err(v) => vec![v],
    }
}

fn string_set<'a>(schema: &'a Value, pointer: &str) -> Result<Vec<&'a str>, Violation> {
    lookup(schema, pointer)?
        .as_array()
        .map(|items| items.iter().filter_map(Value::as_str).collect())
        .ok_or_else(|| Violation::at(pointer, "expected an array"))
}

// -------------------------------------------------------------------------
// Schema document
// -------------------------------------------------------------------------

pub(super) fn schema_file_exists(path: &Path) -> Vec<Violation> {
    if path.is_file() {
        Vec::new()
    } else {
        vec![Violation::at(path.display(), "schema file not found")]
    }
}

pub(super) fn schema_is_object(schema: &Value) -> Vec<Violation> {
    if schema.is_object() {
        Vec::new()
    } else {
        vec![Violation::root("schema root must be a JSON object")]
    }
}

pub(super) fn declares_draft(schema: &Value) -> Vec<Violation> {
    expect_str(schema, "/$schema", DRAFT_2020_12)
}

pub(super) fn has_id(schema: &Value) -> Vec<Violation> {
    expect_str(schema, "/$id", SCHEMA_ID)
}

pub(super) fn has_title(schema: &Value) -> Vec<Violation> {
    expect_str(schema, "/title", SCHEMA_TITLE)
}

pub(super) fn has_description(schema: &Value) -> Vec<Violation> {
    match schema.get("description").and_then(Value::as_str) {
        Some(text) if !text.trim().is_empty() => Vec::new(),
        _ => vec![Violation::at("/description", "description must be a non-empty string")],
    }
}

pub(super) fn requires_schema_version(schema: &Value) -> Vec<Violation> {
    match string_set(schema, "/required") {
        Ok(required) if required.contains(&"schema_version") => Vec::new(),
        Ok(_) => vec![Violation::at("/required", "schema_version is not required")],
        Err(v) => vec![v],
    }
}

pub(super) fn uses_defs(schema: &Value) -> Vec<Violation> {
    let mut violations = Vec::new();
    if !schema.get("$defs").is_some_and(Value::is_object) {
        violations.push(Violation::at("/$defs", "$defs must be present"));
    }
    if schema.get("definitions").is_some() {
        violations.push(Violation::at(
            "/definitions",
            "legacy definitions keyword must not be used",
        ));
    }
    violations
}

pub(super) fn refs_use_defs(schema: &Value) -> Vec<Violation> {
    let mut refs = Vec::new();
    collect_refs(schema, "", &mut refs);

    let mut violations: Vec<Violation> = refs
        .iter()
        .filter(|(_, target)| target.starts_with("#/definitions/"))
        .map(|(at, target)| Violation::at(at, format!("$ref uses legacy path {}", target)))
        .collect();

    if !refs.iter().any(|(_, target)| target.starts_with("#/$defs/")) {
        violations.push(Violation::root("no $ref points into #/$defs/"));
    }
    violations
}

fn collect_refs(value: &Value, at: &str, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let pointer = format!("{}/{}", at, key.replace('~', "~0").replace('/', "~1"));
                if key == "$ref"
                    && let Value::String(target) = child
                {
                    out.push((pointer, target.clone()));
                } else {
                    collect_refs(child, &pointer, out);
                }
            }
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                collect_refs(child, &format!("{}/{}", at, i), out);
            }
        }
        _ => {}
    }
}

pub(super) fn schema_version_pattern(schema: &Value) -> Vec<Violation> {
    let base = "/properties/schema_version";
    let mut violations = expect_str(schema, &format!("{}/pattern", base), SCHEMA_VERSION_PATTERN);
    if schema.pointer(&format!("{}/enum", base)).is_some() {
        violations.push(Violation::at(
            format!("{}/enum", base),
            "schema_version must use a pattern, not an enum",
        ));
    }
    violations
}

pub(super) fn meta_valid(schema: &Value) -> Vec<Violation> {
    match compile(schema) {
        Ok(_) => Vec::new(),
        Err(v) => vec![v],
    }
}

pub(super) fn temperature_range(schema: &Value) -> Vec<Violation> {
    let base = "/$defs/model_parameters/properties/temperature";
    let mut violations = expect_number(schema, &format!("{}/minimum", base), 0.0);
    violations.extend(expect_number(schema, &format!("{}/maximum", base), 2.0));
    violations
}

pub(super) fn max_tokens_minimum(schema: &Value) -> Vec<Violation> {
    expect_number(
        schema,
        "/$defs/model_parameters/properties/max_tokens/minimum",
        1.0,
    )
}

pub(super) fn top_p_range(schema: &Value) -> Vec<Violation> {
    let base = "/$defs/model_parameters/properties/top_p";
    let mut violations = expect_number(schema, &format!("{}/minimum", base), 0.0);
    violations.extend(expect_number(schema, &format!("{}/maximum", base), 1.0));
    violations
}

pub(super) fn mode_default_enum(schema: &Value) -> Vec<Violation> {
    let pointer = "/$defs/mode/properties/default/enum";
    let values = match string_set(schema, pointer) {
        Ok(values) => values,
        Err(v) => return vec![v],
    };

    let mut violations = Vec::new();
    for required in ["local-only", "airgapped"] {
        if !values.contains(&required) {
            violations.push(Violation::at(pointer, format!("missing \"{}\"", required)));
        }
    }
    if values.contains(&"burst") {
        violations.push(Violation::at(pointer, "\"burst\" must not be a default mode"));
    }
    violations
}

pub(super) fn project_name_pattern(schema: &Value) -> Vec<Violation> {
    expect_str(
        schema,
        "/$defs/project/properties/name/pattern",
        PROJECT_NAME_PATTERN,
    )
}

pub(super) fn project_type_enum(schema: &Value) -> Vec<Violation> {
    let pointer = "/$defs/project/properties/type/enum";
    match string_set(schema, pointer) {
        Ok(values) => PROJECT_TYPES
            .iter()
            .filter(|t| !values.contains(*t))
            .map(|t| Violation::at(pointer, format!("missing \"{}\"", t)))
            .collect(),
        Err(v) => vec![v],
    }
}

// -------------------------------------------------------------------------
// Examples
// -------------------------------------------------------------------------

pub(super) fn example_is_valid(validator: &Validator, example: &Value) -> Vec<Violation> {
    validation_errors(validator, example)
}

pub(super) fn minimal_is_minimal(example: &Value) -> Vec<Violation> {
    let Some(map) = example.as_object() else {
        return vec![Violation::root("minimal example must be a mapping")];
    };

    let mut violations = Vec::new();
    if !map.contains_key("schema_version") {
        violations.push(Violation::root("minimal example must set schema_version"));
    }
    if map.len() > MINIMAL_MAX_KEYS {
        violations.push(Violation::root(format!(
            "minimal example has {} top-level keys, at most {} allowed",
            map.len(),
            MINIMAL_MAX_KEYS
        )));
    }
    violations
}

pub(super) fn full_has_all_sections(example: &Value) -> Vec<Violation> {
    FULL_SECTIONS
        .iter()
        .filter(|section| example.get(**section).is_none())
        .map(|section| Violation::at(format!("/{}", section), "section missing"))
        .collect()
}

pub(super) fn example_exists(path: &Path) -> Vec<Violation> {
    if path.is_file() {
        Vec::new()
    } else {
        vec![Violation::at(path.display(), "example file not found")]
    }
}

pub(super) fn example_is_rejected(validator: &Validator, example: &Value) -> Vec<Violation> {
    if validation_errors(validator, example).is_empty() {
        vec![Violation::root("invalid example passed validation")]
    } else {
        Vec::new()
    }
}

/// Time one validation of `example`, excluding schema compilation.
pub(super) fn validation_latency(
    validator: &Validator,
    example: &Value,
    limit: Duration,
) -> (Vec<Violation>, Duration) {
    let start = Instant::now();
    black_box(validator.is_valid(black_box(example)));
    let elapsed = start.elapsed();

    let violations = if elapsed < limit {
        Vec::new()
    } else {
        vec![Violation::root(format!(
            "validation took {} ms, limit is {} ms",
            elapsed.as_millis(),
            limit.as_millis()
        ))]
    };
    (violations, elapsed)
}
