//! Taskdoc: task-list driven documentation tooling.
//!
//! - [`tasklist`] parses the Markdown task list into epics, tasks and subtasks.
//! - [`stubs`] writes one stub document per task and subtask.
//! - [`refine`] injects instruction headers and canonical context into
//!   existing task and epic documents.
//! - [`schema`] checks the configuration JSON Schema and its YAML examples.
//!
//! Rendering goes through the versioned definitions in [`template`]; every
//! output directory gets a [`manifest`] of what was written.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod logging;
pub mod manifest;
pub mod refine;
pub mod schema;
pub mod stubs;
pub mod tasklist;
pub mod template;
