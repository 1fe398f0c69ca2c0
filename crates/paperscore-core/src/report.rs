//! CSV report output
//!
//! One row per scored paper: filename first, then the six metric scores in
//! fixed header order. The first line of the file is the literal `sep=,`
//! delimiter declaration, because some spreadsheet locales default to `;`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Local};

use crate::error::Result;
use crate::paper::ScoreSet;

/// Report file name for a run started at `now`: `scores_YYYYmmddHHMMSS.csv`
pub fn report_filename(now: DateTime<Local>) -> String {
    format!("scores_{}.csv", now.format("%Y%m%d%H%M%S"))
}

/// Streaming writer for one score report
pub struct ReportWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl ReportWriter<BufWriter<File>> {
    /// Create the report file and write the delimiter declaration and header
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Self::from_writer(BufWriter::new(file))
    }
}

impl<W: Write> ReportWriter<W> {
    /// Start a report on an arbitrary writer
    pub fn from_writer(mut inner: W) -> Result<Self> {
        inner.write_all(b"sep=,\n")?;
        let mut writer = csv::Writer::from_writer(inner);
        writer.write_record(ScoreSet::csv_headers())?;
        Ok(Self { writer })
    }

    /// Append one scored paper. The filename identifies the paper; it is
    /// not guaranteed unique.
    pub fn append(&mut self, filename: &str, scores: &ScoreSet) -> Result<()> {
        let mut record: Vec<String> = Vec::with_capacity(7);
        record.push(filename.to_string());
        record.extend(scores.metric_values().iter().map(u8::to_string));
        self.writer.write_record(&record)?;
        Ok(())
    }

    /// Flush the report to its destination
    pub fn finish(mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
