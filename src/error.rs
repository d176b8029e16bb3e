//! Error types for n-gram gap analysis

use thiserror::Error;

/// Errors that can occur while building a gap report
#[derive(Error, Debug)]
pub enum GapError {
    /// Invalid run configuration (n-gram bounds, ceiling, formats, outputs)
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The requested text column does not exist in a data source
    #[error("No text column with name {column} in {source_name}")]
    ColumnNotFound { column: String, source_name: String },

    /// A value violated a construction invariant (count < 1, empty n-gram, ...)
    #[error("Invariant violation: {0}")]
    Invariant(String),

    /// Malformed tabular input
    #[error("Failed to parse {source_name} at line {line}: {message}")]
    Parse {
        source_name: String,
        line: usize,
        message: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Unreadable XLSX workbook
    #[error("Spreadsheet read error: {0}")]
    XlsxRead(#[from] calamine::XlsxError),

    #[error("Spreadsheet write error: {0}")]
    XlsxWrite(#[from] rust_xlsxwriter::XlsxError),
}

/// Result type for gap analysis operations
pub type Result<T> = std::result::Result<T, GapError>;
