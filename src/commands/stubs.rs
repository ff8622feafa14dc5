//! Implementation of the `taskdoc stubs` command.

use super::{load_task_list, task_list_path};
use crate::cli::StubsArgs;
use crate::config::Config;
use crate::error::{Result, TaskdocError};
use crate::stubs::StubWriter;
use std::path::PathBuf;

/// Execute the `taskdoc stubs` command.
///
/// Prints `Created <path>` per stub. Items that fail are listed on stderr
/// after the batch and make the command exit with a generation failure.
pub fn cmd_stubs(config: &Config, args: StubsArgs) -> Result<()> {
    let task_list = task_list_path(config, args.task_list);
    let out_dir = args
        .out
        .unwrap_or_else(|| PathBuf::from(&config.stubs.out_dir));

    let list = load_task_list(&task_list)?;
    let templates = config.templates()?;
    let writer = StubWriter::new(&config.stubs, &templates, &out_dir);
    let report = writer.write_all(&list, &task_list.display().to_string())?;

    for path in &report.written {
        println!("Created {}", path.display());
    }
    println!();
    println!(
        "Generated {} stub(s) for {} task(s) and {} subtask(s) in {}",
        report.written.len(),
        list.task_count(),
        list.subtask_count(),
        writer.out_dir().display()
    );

    if report.is_success() {
        return Ok(());
    }

    eprintln!("Failed to generate {} item(s):", report.failures.len());
    for failure in &report.failures {
        eprintln!("  - {}: {}", failure.source, failure.error);
    }
    Err(TaskdocError::GenerationError(format!(
        "{} of {} stub(s) could not be generated",
        report.failures.len(),
        report.failures.len() + report.written.len()
    )))
}
