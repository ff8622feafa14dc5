//! Command implementations for taskdoc.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Every command resolves the config first; flags given on
//! the command line override the config values.

mod check_schema;
mod list;
mod refine;
mod stubs;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::Result;
use crate::tasklist::TaskList;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::resolve(cli.config.as_deref())?;

    match cli.command {
        Command::Stubs(args) => stubs::cmd_stubs(&config, args),
        Command::Refine(args) => refine::cmd_refine(&config, args),
        Command::List(args) => list::cmd_list(&config, args),
        Command::CheckSchema(args) => check_schema::cmd_check_schema(&config, args),
    }
}

/// The task list to read: the flag when given, otherwise the config value.
fn task_list_path(config: &Config, flag: Option<PathBuf>) -> PathBuf {
    flag.unwrap_or_else(|| PathBuf::from(&config.task_list))
}

fn load_task_list(path: &Path) -> Result<TaskList> {
    let list = TaskList::load(path)?;
    debug!(
        path = %path.display(),
        epics = list.epics.len(),
        tasks = list.task_count(),
        "task list loaded"
    );
    Ok(list)
}
