//! JSON output format for gap reports

use crate::gap::{GapReport, GapRow};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Root JSON output structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonOutput {
    /// Output format version
    pub version: String,
    /// Grand total of corpus 1 occurrences
    pub total1: u64,
    /// Grand total of corpus 2 occurrences
    pub total2: u64,
    /// Unique n-grams before truncation
    pub unique_ngrams: usize,
    /// Whether the row list was capped
    pub truncated: bool,
    /// Ranked report rows
    pub rows: Vec<GapRow>,
}

impl JsonOutput {
    pub fn new(report: &GapReport) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            total1: report.total1,
            total2: report.total2,
            unique_ngrams: report.unique_ngrams,
            truncated: report.truncated,
            rows: report.rows.clone(),
        }
    }

    /// Stream pretty-printed JSON to `writer`
    pub fn write_to<W: Write>(&self, mut writer: W) -> crate::error::Result<()> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}
