// Cross-corpus n-gram gap scoring
//
// Two corpora's n-gram counts are outer-joined into buckets, each bucket is
// scored with a signed chi-square-like statistic, and the buckets are ranked
// by combined frequency and capped at a configurable ceiling.
//
// The statistic clamps zero counts to 1 and keeps the direction of the
// difference, so it is a ranking heuristic rather than a significance test.

mod bucket;
mod merge;
mod report;
mod score;

pub use bucket::NgramBucket;
pub use merge::merge;
pub use report::{GapReport, GapRow, REPORT_COLUMNS};
pub use score::{chi2, rank, truncate, DEFAULT_MAX_UNIQUE_NGRAMS};
