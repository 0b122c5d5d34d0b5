//! save CLI - run static analyzer test suites
//!
//! Usage: save <PATH> [TESTS]...
//!
//! Exits with 0 when no test failed or crashed.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use save::application::{RunOptions, RunReport, RunUseCase};
use save::domain::entities::{TestResult, Verdict};
use save::{LocalFs, ShellExecutor};

mod cli;

use cli::Cli;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut options = RunOptions::new().with_test_filters(cli.tests);
    if let Some(dir) = cli.scratch_dir {
        options = options.with_scratch_dir(dir);
    }

    let use_case = RunUseCase::new(Arc::new(LocalFs::new()), Arc::new(ShellExecutor::new()));
    let report = use_case
        .execute(&cli.path, &options)
        .with_context(|| format!("failed to run tests at {}", cli.path.display()))?;

    print_report(&report);
    Ok(if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Initialize tracing; `RUST_LOG` wins over `-v`
fn init_logging(verbose: u8) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

fn print_report(report: &RunReport) {
    for node in &report.nodes {
        for plugin in &node.plugins {
            for result in &plugin.results {
                println!("{}", format_result(&node.suite_name, &plugin.kind.to_string(), result));
            }
        }
    }
    println!("{}", report.summary());
}

fn format_result(suite: &str, plugin: &str, result: &TestResult) -> String {
    let files: Vec<String> = result
        .resources
        .iter()
        .map(|path| path.display().to_string())
        .collect();
    let mut line = format!(
        "[{}] {} / {}: {}",
        result.verdict.label(),
        suite,
        plugin,
        files.join(", ")
    );
    if let Some(message) = result.verdict.message() {
        // Diff renderings span several lines.
        let indented = message.replace('\n', "\n    ");
        match result.verdict {
            Verdict::Pass(_) | Verdict::Ignored(_) => line.push_str(&format!(" ({})", indented)),
            _ => line.push_str(&format!("\n    {}", indented)),
        }
    }
    line
}
