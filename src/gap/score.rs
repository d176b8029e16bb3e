use super::bucket::NgramBucket;

/// Default ceiling on unique n-grams kept in a report
pub const DEFAULT_MAX_UNIQUE_NGRAMS: usize = 1_000_000;

/// Signed chi-square-like divergence of corpus 1 from corpus 2
///
/// `total1` and `total2` are grand totals (summed occurrence counts), not
/// row counts. Zero counts and totals are clamped to 1 before scoring:
///
/// ```text
/// observed = max(count1, 1)
/// expected = max(count2, 1) / max(total2, 1) * max(total1, 1)
/// chi2     = sign(observed - expected) * (observed - expected)^2 / expected
/// ```
///
/// Positive scores mark n-grams over-represented in corpus 1, negative
/// scores those over-represented in corpus 2.
///
/// # Example
/// ```
/// use ngram_gap::gap::{chi2, NgramBucket};
///
/// let hello = NgramBucket::new("hello", 2, 2).unwrap();
/// let score = chi2(&hello, 4, 11);
/// assert!((score - 2.2272727272727275).abs() < 1e-12);
/// ```
pub fn chi2(bucket: &NgramBucket, total1: u64, total2: u64) -> f64 {
    let observed = bucket.count1().max(1) as f64;
    let expected = (bucket.count2().max(1) as f64 / total2.max(1) as f64) * total1.max(1) as f64;
    let delta = observed - expected;
    if delta == 0.0 {
        return 0.0;
    }
    delta.signum() * delta.powi(2) / expected
}

/// Sorts buckets largest `total` first, ties in reverse n-gram order
pub fn rank(mut buckets: Vec<NgramBucket>) -> Vec<NgramBucket> {
    buckets.sort_unstable_by(|a, b| b.cmp(a));
    buckets
}

/// Keeps the first `max_unique` ranked buckets
///
/// Returns whether anything was dropped. The kept prefix is never reordered.
pub fn truncate(ranked: &mut Vec<NgramBucket>, max_unique: usize) -> bool {
    if ranked.len() > max_unique {
        ranked.truncate(max_unique);
        true
    } else {
        false
    }
}
