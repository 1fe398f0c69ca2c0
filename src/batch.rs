//! Batch scoring driver
//!
//! Walks the input directory (non-recursively), scores every file it can
//! parse, and writes one timestamped CSV report to the output directory.
//! A paper that cannot be parsed is logged and skipped; an unreadable
//! input directory aborts the run before any report is written.

use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use paperscore_core::config::BatchConfig;
use paperscore_core::error::{PaperError, Result};
use paperscore_core::paper::Paper;
use paperscore_core::report::{report_filename, ReportWriter};

/// Outcome of one batch run
#[derive(Debug)]
pub struct RunSummary {
    /// Path of the report that was written
    pub report_path: PathBuf,
    /// Number of papers scored
    pub scored: usize,
    /// Number of files skipped because they could not be parsed
    pub skipped: usize,
}

/// Score every paper in the input directory and write the CSV report
pub fn run(config: &BatchConfig) -> Result<RunSummary> {
    let files = list_input_files(&config.input_dir)?;
    debug!(files = files.len(), input = %config.input_dir.display(), "input directory listed");

    std::fs::create_dir_all(&config.output_dir)?;
    let report_path = config.output_dir.join(report_filename(Local::now()));
    let mut writer = ReportWriter::create(&report_path)?;

    let mut scored = 0usize;
    let mut skipped = 0usize;
    for path in &files {
        // The filename identifies the paper in the report
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        info!(file = %filename, "scoring paper");

        let paper = match Paper::open(path) {
            Ok(paper) => paper,
            Err(err) => {
                warn!(file = %filename, error = %err, "skipping unreadable paper");
                skipped += 1;
                continue;
            }
        };

        writer.append(&filename, &paper.scores())?;
        scored += 1;
    }
    writer.finish()?;

    info!(report = %report_path.display(), scored, skipped, "report written");
    Ok(RunSummary {
        report_path,
        scored,
        skipped,
    })
}

/// List the files of the input directory, sorted by file name.
/// Subdirectories are not descended into.
fn list_input_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| PaperError::directory(dir, e))?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_dir_is_directory_error() {
        let err = list_input_files(Path::new("/nonexistent/papers")).unwrap_err();
        assert!(matches!(err, PaperError::Directory { .. }));
    }

    #[test]
    fn test_listing_is_flat_and_sorted() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.docx"), b"").unwrap();
        std::fs::write(dir.path().join("a.docx"), b"").unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("nested").join("c.docx"), b"").unwrap();

        let files = list_input_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.docx", "b.docx"]);
    }
}
