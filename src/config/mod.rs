//! Configuration model for taskdoc.
//!
//! This module defines the Config struct that represents `taskdoc.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! defaults for every field, and validation of config values.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

pub use model::Config;
pub use operations::DEFAULT_CONFIG_FILE;
pub use types::{RefineMode, RefineSettings, SchemaSettings, StubSettings};
