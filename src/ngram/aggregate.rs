//! Corpus-wide n-gram counting
//!
//! Rows are fanned out across the rayon pool. Each worker folds its rows into
//! a private count map; the maps are then reduced by summing counts per key.
//! Counting is associative and commutative, so the result does not depend on
//! how rows were partitioned or scheduled.

use super::count::{DataNgrams, NgramBounds, NgramCount};
use super::generator::text_ngrams;
use crate::error::{GapError, Result};
use rayon::prelude::*;
use std::collections::HashMap;

/// Per-worker partial result
#[derive(Debug, Default)]
struct Tally {
    rows: u64,
    counts: HashMap<String, u64>,
}

impl Tally {
    fn add_row(mut self, text: Option<&str>, bounds: NgramBounds) -> Self {
        self.rows += 1;
        if let Some(text) = text.filter(|t| !t.trim().is_empty()) {
            for ngram in text_ngrams(text, bounds) {
                *self.counts.entry(ngram).or_insert(0) += 1;
            }
        }
        self
    }

    fn merge(mut self, other: Self) -> Self {
        let (mut into, from) = if self.counts.len() >= other.counts.len() {
            (self.counts, other.counts)
        } else {
            (other.counts, self.counts)
        };
        for (ngram, count) in from {
            *into.entry(ngram).or_insert(0) += count;
        }
        self.rows += other.rows;
        self.counts = into;
        self
    }

    fn into_data(self) -> Result<DataNgrams> {
        let ngrams = self
            .counts
            .into_iter()
            .map(|(ngram, count)| NgramCount::new(ngram, count))
            .collect::<Result<Vec<_>>>()?;
        Ok(DataNgrams::new(self.rows, ngrams))
    }
}

/// Counts n-grams over a parallel stream of row values
///
/// Every row counts toward `DataNgrams::total`; null and blank values
/// contribute no n-grams. The first row error aborts the whole aggregation.
pub fn aggregate_rows<P>(rows: P, bounds: NgramBounds) -> Result<DataNgrams>
where
    P: ParallelIterator<Item = Result<Option<String>>>,
{
    rows.try_fold(Tally::default, |tally, row| -> Result<Tally> {
        let text = row?;
        Ok(tally.add_row(text.as_deref(), bounds))
    })
    .try_reduce(Tally::default, |a, b| Ok(a.merge(b)))?
    .into_data()
}

/// Counts n-grams over a sequential row reader, distributing rows across workers
pub fn aggregate_reader<I>(rows: I, bounds: NgramBounds) -> Result<DataNgrams>
where
    I: Iterator<Item = Result<Option<String>>> + Send,
{
    aggregate_rows(rows.par_bridge(), bounds)
}

/// Counts n-grams over in-memory texts
///
/// # Example
/// ```
/// use ngram_gap::ngram::{aggregate_texts, NgramBounds};
///
/// let data = aggregate_texts(&["Hello, world!", "Hello, Dolly!"], NgramBounds::new(1, 1).unwrap())
///     .unwrap();
///
/// assert_eq!(data.total(), 2);
/// assert_eq!(data.occurrences(), 4);
/// assert_eq!(data.unique(), 3);
/// ```
pub fn aggregate_texts<S>(texts: &[S], bounds: NgramBounds) -> Result<DataNgrams>
where
    S: AsRef<str> + Sync,
{
    aggregate_rows(
        texts
            .par_iter()
            .map(|text| Ok::<_, GapError>(Some(text.as_ref().to_string()))),
        bounds,
    )
}
