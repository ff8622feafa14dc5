//! Implementation of the `taskdoc check-schema` command.

use crate::cli::CheckSchemaArgs;
use crate::config::Config;
use crate::error::{Result, TaskdocError};
use crate::schema::{ConformanceSuite, SuiteReport};
use tracing::info;

/// Execute the `taskdoc check-schema` command.
///
/// Prints one line per check and the violations of failed checks. Any
/// failure makes the command exit with a validation failure.
pub fn cmd_check_schema(config: &Config, args: CheckSchemaArgs) -> Result<()> {
    let defaults = ConformanceSuite::from_settings(&config.schema);
    let schema = args
        .schema
        .unwrap_or_else(|| defaults.schema_path().to_path_buf());
    let examples = args
        .examples
        .unwrap_or_else(|| defaults.examples_dir().to_path_buf());
    let suite = defaults.with_paths(&schema, &examples);

    info!(
        schema = %suite.schema_path().display(),
        examples = %suite.examples_dir().display(),
        "running schema conformance suite"
    );
    let report = suite.run_all();
    print_report(&report);

    if report.is_success() {
        return Ok(());
    }
    let failed = report.outcomes.len() - report.passed_count();
    Err(TaskdocError::ValidationError(format!(
        "{} of {} schema check(s) failed",
        failed,
        report.outcomes.len()
    )))
}

fn print_report(report: &SuiteReport) {
    for outcome in &report.outcomes {
        let status = if outcome.passed() { "PASS" } else { "FAIL" };
        match outcome.elapsed {
            Some(elapsed) => println!(
                "{} {} ({:.2} ms)",
                status,
                outcome.check,
                elapsed.as_secs_f64() * 1000.0
            ),
            None => println!("{} {}", status, outcome.check),
        }
        for violation in &outcome.violations {
            println!("       {}", violation);
        }
    }
    println!();
    println!(
        "{}/{} checks passed",
        report.passed_count(),
        report.outcomes.len()
    );
}
