use crate::error::{GapError, Result};
use std::cmp::Ordering;

/// Inclusive range of n-gram lengths to extract
///
/// Construction rejects zero lengths and `max < min`, so generators never
/// have to handle a degenerate range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NgramBounds {
    min: usize,
    max: usize,
}

impl NgramBounds {
    pub fn new(min: usize, max: usize) -> Result<Self> {
        if min == 0 {
            return Err(GapError::Config(
                "MinNgramLength must be at least 1".to_string(),
            ));
        }
        if max < min {
            return Err(GapError::Config(
                "MaxNgramLength must be greater than or equal to MinNgramLength".to_string(),
            ));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }
}

/// Number of occurrences of one n-gram within a corpus
///
/// Ordered by count, then by n-gram text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NgramCount {
    ngram: String,
    count: u64,
}

impl NgramCount {
    pub fn new(ngram: impl Into<String>, count: u64) -> Result<Self> {
        let ngram = ngram.into();
        if ngram.is_empty() {
            return Err(GapError::Invariant("ngram must not be empty".to_string()));
        }
        if count < 1 {
            return Err(GapError::Invariant(format!(
                "count for ngram '{}' must be positive",
                ngram
            )));
        }
        Ok(Self { ngram, count })
    }

    pub fn ngram(&self) -> &str {
        &self.ngram
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}

impl Ord for NgramCount {
    fn cmp(&self, other: &Self) -> Ordering {
        self.count
            .cmp(&other.count)
            .then_with(|| self.ngram.cmp(&other.ngram))
    }
}

impl PartialOrd for NgramCount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Aggregated n-gram counts for one corpus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataNgrams {
    /// Number of rows read from the source, blank rows included
    total: u64,
    ngrams: Vec<NgramCount>,
}

impl DataNgrams {
    pub fn new(total: u64, ngrams: Vec<NgramCount>) -> Self {
        Self { total, ngrams }
    }

    /// Rows read from the source
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn ngrams(&self) -> &[NgramCount] {
        &self.ngrams
    }

    /// Sum of all n-gram counts
    pub fn occurrences(&self) -> u64 {
        self.ngrams.iter().map(NgramCount::count).sum()
    }

    /// Number of distinct n-grams
    pub fn unique(&self) -> usize {
        self.ngrams.len()
    }
}
