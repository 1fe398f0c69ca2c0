//! Batch configuration for paperscore
//!
//! Input and output directories are explicit configuration passed into the
//! batch driver at startup, optionally loaded from a TOML file with CLI
//! flags taking precedence.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PaperError, Result};

/// Directory scanned for papers when nothing else is configured
pub const DEFAULT_INPUT_DIR: &str = "static/papers";

/// Directory the CSV report lands in when nothing else is configured
pub const DEFAULT_OUTPUT_DIR: &str = "static/output";

/// Directories for one batch run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Directory scanned (non-recursively) for papers to score
    pub input_dir: PathBuf,
    /// Directory the CSV report is written to
    pub output_dir: PathBuf,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl BatchConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| PaperError::invalid_config(path, e))?;
        toml::from_str(&raw).map_err(|e| PaperError::invalid_config(path, e))
    }
}
