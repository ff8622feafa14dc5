//! Implementation of the `taskdoc refine` command.

use super::{load_task_list, task_list_path};
use crate::cli::RefineArgs;
use crate::config::Config;
use crate::error::{Result, TaskdocError};
use crate::refine::{ContextInjector, PassReport};
use std::path::PathBuf;

/// Execute the `taskdoc refine` command.
///
/// Runs the passes selected by `--mode` and prints a summary per pass,
/// including the files that received a header only.
pub fn cmd_refine(config: &Config, args: RefineArgs) -> Result<()> {
    let task_list = task_list_path(config, args.task_list);
    let in_root = args
        .input
        .unwrap_or_else(|| PathBuf::from(&config.refine.in_dir));
    let out_root = args
        .out
        .unwrap_or_else(|| PathBuf::from(&config.refine.out_dir));
    let mode = args.mode.unwrap_or(config.refine.mode);

    let list = load_task_list(&task_list)?;
    let templates = config.templates()?;
    let source = task_list
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| task_list.display().to_string());
    let injector = ContextInjector::new(&list, &templates, &source);

    let reports = injector.run(mode, &in_root, &out_root)?;
    for report in &reports {
        print_report(report);
    }

    let failed: usize = reports.iter().map(|r| r.failures.len()).sum();
    if failed == 0 {
        return Ok(());
    }
    Err(TaskdocError::GenerationError(format!(
        "{} document(s) could not be refined",
        failed
    )))
}

fn print_report(report: &PassReport) {
    println!(
        "Pass {}: {} -> {}",
        report.pass,
        report.input.display(),
        report.output.display()
    );
    println!("  {:20} {:>4}", "refined", report.refined.len());
    println!(
        "  {:20} {:>4}",
        "no canonical entry",
        report.no_canonical_entry.len()
    );
    println!("  {:20} {:>4}", "unclassified", report.unclassified.len());
    println!("  {:20} {:>4}", "failed", report.failures.len());

    for path in &report.no_canonical_entry {
        println!("  [no canonical entry] {}", path.display());
    }
    for path in &report.unclassified {
        println!("  [unclassified] {}", path.display());
    }
    for (path, error) in &report.failures {
        eprintln!("  [failed] {}: {}", path.display(), error);
    }
    println!();
}
