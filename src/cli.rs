//! CLI argument parsing for paperscore
//!
//! One flat command: score every paper in the input directory and write a
//! CSV report to the output directory. Directories come from flags, a TOML
//! config file, or the built-in defaults, in that order of precedence.

use std::path::PathBuf;

use clap::Parser;

use paperscore_core::config::BatchConfig;
use paperscore_core::error::Result;

/// Paperscore - scores student papers against a structural rubric
#[derive(Parser, Debug)]
#[command(name = "paperscore")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory containing the papers to score
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Directory the CSV report is written to
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// TOML config file with input/output directories
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(long, short)]
    pub quiet: bool,

    /// Report timing and per-file progress
    #[arg(long, short)]
    pub verbose: bool,

    /// Log level override (error, warn, info, debug, trace)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    /// Resolve the batch configuration: config file values (or defaults)
    /// overridden by explicit flags
    pub fn batch_config(&self) -> Result<BatchConfig> {
        let mut config = match &self.config {
            Some(path) => BatchConfig::load(path)?,
            None => BatchConfig::default(),
        };
        if let Some(input) = &self.input {
            config.input_dir = input.clone();
        }
        if let Some(output) = &self.output {
            config.output_dir = output.clone();
        }
        Ok(config)
    }
}
