//! Paperscore - rubric scoring for student papers
//!
//! Walks a directory of `.docx` papers, scores each one against the fixed
//! six-metric rubric, and writes a timestamped CSV report.

mod batch;
mod cli;

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::Cli;
use paperscore_core::error::ExitCode as PaperExitCode;
use paperscore_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = Cli::parse();

    // Initialize structured logging
    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        // If tracing initialization fails, fall back to stderr
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let result = cli
        .batch_config()
        .and_then(|config| batch::run(&config));

    match result {
        Ok(summary) => {
            if !cli.quiet {
                println!("{}", summary.report_path.display());
            }
            tracing::debug!(
                elapsed = ?start.elapsed(),
                scored = summary.scored,
                skipped = summary.skipped,
                "done"
            );
            ExitCode::from(PaperExitCode::Success as u8)
        }
        Err(e) => {
            if !cli.quiet {
                eprintln!("error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
