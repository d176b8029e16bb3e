//! Run configuration for n-gram gap reports
//!
//! Values come from built-in defaults, optionally overridden by a TOML file,
//! then by command-line flags.

use crate::error::{GapError, Result};
use crate::gap::DEFAULT_MAX_UNIQUE_NGRAMS;
use crate::ngram::NgramBounds;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tunable parameters of the gap analysis
///
/// # Example
/// ```
/// use ngram_gap::config::GapConfig;
///
/// let config = GapConfig::from_toml_str("max_ngram_length = 2").unwrap();
/// assert_eq!(config.min_ngram_length, 1);
/// assert_eq!(config.max_ngram_length, 2);
/// assert_eq!(config.max_unique_ngrams, 1_000_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GapConfig {
    /// Shortest n-gram to extract, in tokens
    pub min_ngram_length: usize,

    /// Longest n-gram to extract, in tokens
    pub max_ngram_length: usize,

    /// Ceiling on unique n-grams kept in the report
    ///
    /// When the merged vocabulary is larger, only the most frequent n-grams
    /// (by combined count) are written.
    pub max_unique_ngrams: usize,
}

impl Default for GapConfig {
    fn default() -> Self {
        Self {
            min_ngram_length: 1,
            max_ngram_length: 3,
            max_unique_ngrams: DEFAULT_MAX_UNIQUE_NGRAMS,
        }
    }
}

impl GapConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text; omitted keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Validated n-gram length range
    pub fn bounds(&self) -> Result<NgramBounds> {
        NgramBounds::new(self.min_ngram_length, self.max_ngram_length)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.bounds()?;

        if self.max_unique_ngrams == 0 {
            return Err(GapError::Config(
                "MaxUniqueNgrams must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
