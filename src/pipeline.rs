//! End-to-end gap report run
//!
//! Both corpora are read and counted concurrently; merging waits for both.
//! A failure in either corpus fails the run, and every requested output must
//! be written for the run to succeed.

use crate::config::GapConfig;
use crate::csv_output::CsvOutput;
use crate::error::GapError;
use crate::gap::GapReport;
use crate::json_output::JsonOutput;
use crate::ngram::{aggregate_reader, DataNgrams, NgramBounds};
use crate::tabular::open_text_column;
use crate::xlsx_output::XlsxOutput;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A data source and the column holding its text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusSource {
    pub path: PathBuf,
    pub text_column: String,
}

impl CorpusSource {
    pub fn new(path: impl Into<PathBuf>, text_column: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text_column: text_column.into(),
        }
    }
}

/// Everything needed for one report run
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub data1: CorpusSource,
    pub data2: CorpusSource,
    pub gap: GapConfig,
    /// CSV report destination
    pub csv: Option<PathBuf>,
    /// JSON report destination
    pub json: Option<PathBuf>,
    /// XLSX report destination
    pub xlsx: Option<PathBuf>,
}

impl RunConfig {
    pub fn validate(&self) -> crate::error::Result<()> {
        self.gap.validate()?;
        if self.csv.is_none() && self.json.is_none() && self.xlsx.is_none() {
            return Err(GapError::Config(
                "At least one output (CSV, JSON or XLSX) must be requested".to_string(),
            ));
        }
        Ok(())
    }
}

/// Size of one aggregated corpus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CorpusSummary {
    /// Rows read, blank rows included
    pub rows: u64,
    /// Total n-gram occurrences
    pub occurrences: u64,
    /// Distinct n-grams
    pub unique: usize,
}

impl From<&DataNgrams> for CorpusSummary {
    fn from(data: &DataNgrams) -> Self {
        Self {
            rows: data.total(),
            occurrences: data.occurrences(),
            unique: data.unique(),
        }
    }
}

/// Outcome of a completed run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub corpus1: CorpusSummary,
    pub corpus2: CorpusSummary,
    /// Unique n-grams across both corpora before truncation
    pub unique_ngrams: usize,
    pub rows_written: usize,
    pub truncated: bool,
}

/// Read and count one corpus
pub fn read_corpus(source: &CorpusSource, bounds: NgramBounds) -> Result<DataNgrams> {
    let column = open_text_column(&source.path, &source.text_column)
        .with_context(|| format!("Failed to open {}", source.path.display()))?;

    match column.index {
        Some(index) => info!(
            "Reading text from column {} at index {} of {}",
            source.text_column,
            index,
            source.path.display()
        ),
        None => info!(
            "Reading text from field {} of {}",
            source.text_column,
            source.path.display()
        ),
    }

    aggregate_reader(column.rows, bounds)
        .with_context(|| format!("Failed to stream data rows from {}", source.path.display()))
}

fn log_corpus(label: &str, data: &DataNgrams) {
    let summary = CorpusSummary::from(data);
    info!(
        "Read {} rows from {}, which produced {} occurrences of {} unique ngrams.",
        summary.rows, label, summary.occurrences, summary.unique
    );
}

/// Aggregate both corpora concurrently and build the ranked report
pub fn analyze(config: &RunConfig) -> Result<(GapReport, CorpusSummary, CorpusSummary)> {
    config.validate()?;
    let bounds = config.gap.bounds()?;
    debug!(
        "Extracting ngrams of length {} to {}",
        bounds.min(),
        bounds.max()
    );

    let (data1, data2) = rayon::join(
        || read_corpus(&config.data1, bounds),
        || read_corpus(&config.data2, bounds),
    );
    let data1 = data1?;
    log_corpus("Data1", &data1);
    let data2 = data2?;
    log_corpus("Data2", &data2);

    let report = GapReport::build(&data1, &data2, config.gap.max_unique_ngrams)?;
    debug!(
        "Merged {} unique ngrams (total1 = {}, total2 = {})",
        report.unique_ngrams, report.total1, report.total2
    );

    Ok((
        report,
        CorpusSummary::from(&data1),
        CorpusSummary::from(&data2),
    ))
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    Ok(BufWriter::new(file))
}

/// Write every requested report format
pub fn write_reports(report: &GapReport, config: &RunConfig) -> Result<()> {
    if let Some(path) = &config.csv {
        info!("Outputting csv report to {}...", path.display());
        CsvOutput::new(report)
            .write_to(create(path)?)
            .with_context(|| format!("Failed to write CSV report {}", path.display()))?;
    }

    if let Some(path) = &config.json {
        info!("Outputting json report to {}...", path.display());
        JsonOutput::new(report)
            .write_to(create(path)?)
            .with_context(|| format!("Failed to write JSON report {}", path.display()))?;
    }

    if let Some(path) = &config.xlsx {
        info!("Outputting xlsx report to {}...", path.display());
        XlsxOutput::new(report)
            .write_to(create(path)?)
            .with_context(|| format!("Failed to write XLSX report {}", path.display()))?;
    }

    Ok(())
}

/// Run the whole pipeline: read, count, merge, score, rank, truncate, write
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    let (report, corpus1, corpus2) = analyze(config)?;
    write_reports(&report, config)?;

    Ok(RunSummary {
        corpus1,
        corpus2,
        unique_ngrams: report.unique_ngrams,
        rows_written: report.rows.len(),
        truncated: report.truncated,
    })
}
