use super::bucket::NgramBucket;
use super::merge::merge;
use super::score::{chi2, rank, truncate};
use crate::error::Result;
use crate::ngram::DataNgrams;
use serde::{Deserialize, Serialize};

/// Column names of a gap report, in output order
pub const REPORT_COLUMNS: [&str; 7] = [
    "ngram", "count1", "total1", "count2", "total2", "total", "chi2",
];

/// One output row of a gap report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapRow {
    pub ngram: String,
    pub count1: u64,
    pub total1: u64,
    pub count2: u64,
    pub total2: u64,
    pub total: u64,
    pub chi2: f64,
}

impl GapRow {
    fn from_bucket(bucket: &NgramBucket, total1: u64, total2: u64) -> Self {
        Self {
            ngram: bucket.ngram().to_string(),
            count1: bucket.count1(),
            total1,
            count2: bucket.count2(),
            total2,
            total: bucket.total(),
            chi2: chi2(bucket, total1, total2),
        }
    }
}

/// Ranked, scored comparison of two corpora
#[derive(Debug, Clone, PartialEq)]
pub struct GapReport {
    /// Grand total of corpus 1 occurrences
    pub total1: u64,
    /// Grand total of corpus 2 occurrences
    pub total2: u64,
    /// Unique n-grams across both corpora before truncation
    pub unique_ngrams: usize,
    /// Whether rows were dropped to honour the ceiling
    pub truncated: bool,
    pub rows: Vec<GapRow>,
}

impl GapReport {
    /// Merge, score, rank and truncate two corpora
    ///
    /// Grand totals are taken over all n-grams, so truncation does not
    /// change any row's score.
    pub fn build(data1: &DataNgrams, data2: &DataNgrams, max_unique: usize) -> Result<Self> {
        let mut ranked = rank(merge(data1.ngrams(), data2.ngrams())?);

        let total1: u64 = ranked.iter().map(NgramBucket::count1).sum();
        let total2: u64 = ranked.iter().map(NgramBucket::count2).sum();
        let unique_ngrams = ranked.len();

        let truncated = truncate(&mut ranked, max_unique);
        if truncated {
            tracing::warn!(
                "Truncating output to {} most common unique ngrams (of {})",
                max_unique,
                unique_ngrams
            );
        }

        let rows = ranked
            .iter()
            .map(|bucket| GapRow::from_bucket(bucket, total1, total2))
            .collect();

        Ok(Self {
            total1,
            total2,
            unique_ngrams,
            truncated,
            rows,
        })
    }
}
