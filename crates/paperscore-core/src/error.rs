//! Error types and exit codes for paperscore
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Input error (unreadable directory, invalid config)

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Process exit codes for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Input error - unreadable directory, invalid config (3)
    Input = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while scoring papers
#[derive(Error, Debug)]
pub enum PaperError {
    /// The file is missing, not a ZIP archive, or not a valid DOCX document.
    /// Terminal for the affected paper only; the batch driver logs and skips.
    #[error("could not read document {path:?}: {reason}")]
    Parse { path: PathBuf, reason: String },

    /// The input directory cannot be listed. Fatal to the whole run.
    #[error("could not open directory {path:?}: {reason}")]
    Directory { path: PathBuf, reason: String },

    #[error("invalid config {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl PaperError {
    /// Create an error for a document that could not be parsed
    pub fn parse(path: &Path, reason: impl std::fmt::Display) -> Self {
        PaperError::Parse {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for a directory that could not be listed
    pub fn directory(path: &Path, reason: impl std::fmt::Display) -> Self {
        PaperError::Directory {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for an invalid or unreadable config file
    pub fn invalid_config(path: &Path, reason: impl std::fmt::Display) -> Self {
        PaperError::InvalidConfig {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            PaperError::Parse { .. }
            | PaperError::Directory { .. }
            | PaperError::InvalidConfig { .. } => ExitCode::Input,

            PaperError::Io(_) | PaperError::Csv(_) => ExitCode::Failure,
        }
    }
}

/// Result type alias for paperscore operations
pub type Result<T> = std::result::Result<T, PaperError>;
