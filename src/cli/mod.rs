//! CLI argument parsing for taskdoc.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::config::RefineMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Taskdoc: task-list driven documentation tooling.
///
/// Turns a Markdown task list into per-task stub documents, injects
/// canonical context into existing task and epic documents, and checks the
/// configuration schema and its examples for conformance.
#[derive(Parser, Debug)]
#[command(name = "taskdoc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (defaults to ./taskdoc.yaml when present).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for taskdoc.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a stub document for every task and subtask.
    ///
    /// Existing stubs with the same name are overwritten.
    Stubs(StubsArgs),

    /// Inject instruction headers and canonical context into documents.
    ///
    /// Reads task documents from `<in>/tasks` (or `<in>`) and epic documents
    /// from `<in>/epics` (or `<in>`), writing to `<out>/refined-tasks` and
    /// `<out>/refined-epics`.
    Refine(RefineArgs),

    /// Print the parsed epic, task and subtask tree.
    List(ListArgs),

    /// Run the configuration schema conformance suite.
    ///
    /// Exits with status 2 when any check fails.
    CheckSchema(CheckSchemaArgs),
}

/// Arguments for the `stubs` command.
#[derive(Parser, Debug)]
pub struct StubsArgs {
    /// Task list to read.
    #[arg(long, value_name = "PATH")]
    pub task_list: Option<PathBuf>,

    /// Directory to write stubs into.
    #[arg(long, value_name = "DIR")]
    pub out: Option<PathBuf>,
}

/// Arguments for the `refine` command.
#[derive(Parser, Debug)]
pub struct RefineArgs {
    /// Root of the documents to refine.
    #[arg(long = "in", value_name = "DIR")]
    pub input: Option<PathBuf>,

    /// Output root.
    #[arg(long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Which passes to run.
    #[arg(long, value_enum)]
    pub mode: Option<RefineMode>,

    /// Task list to read.
    #[arg(long, value_name = "PATH")]
    pub task_list: Option<PathBuf>,
}

/// Arguments for the `list` command.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Task list to read.
    #[arg(long, value_name = "PATH")]
    pub task_list: Option<PathBuf>,
}

/// Arguments for the `check-schema` command.
#[derive(Parser, Debug)]
pub struct CheckSchemaArgs {
    /// Schema document to check.
    #[arg(long, value_name = "PATH")]
    pub schema: Option<PathBuf>,

    /// Directory holding the YAML examples.
    #[arg(long, value_name = "DIR")]
    pub examples: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
