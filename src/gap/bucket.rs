use crate::error::{GapError, Result};
use std::cmp::Ordering;

/// Paired counts of one n-gram across both corpora
///
/// At least one of the counts is non-zero. Buckets order by `total()`
/// ascending, then by n-gram text; rankings use the reverse of this order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NgramBucket {
    ngram: String,
    count1: u64,
    count2: u64,
}

impl NgramBucket {
    pub fn new(ngram: impl Into<String>, count1: u64, count2: u64) -> Result<Self> {
        let ngram = ngram.into();
        if ngram.is_empty() {
            return Err(GapError::Invariant("ngram must not be empty".to_string()));
        }
        if count1 + count2 == 0 {
            return Err(GapError::Invariant(format!(
                "count1+count2 for ngram '{}' must be greater than zero",
                ngram
            )));
        }
        Ok(Self {
            ngram,
            count1,
            count2,
        })
    }

    pub fn ngram(&self) -> &str {
        &self.ngram
    }

    /// Occurrences in corpus 1
    pub fn count1(&self) -> u64 {
        self.count1
    }

    /// Occurrences in corpus 2
    pub fn count2(&self) -> u64 {
        self.count2
    }

    pub fn total(&self) -> u64 {
        self.count1 + self.count2
    }
}

impl Ord for NgramBucket {
    fn cmp(&self, other: &Self) -> Ordering {
        self.total()
            .cmp(&other.total())
            .then_with(|| self.ngram.cmp(&other.ngram))
    }
}

impl PartialOrd for NgramBucket {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
