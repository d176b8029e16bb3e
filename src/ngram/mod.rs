// N-gram extraction and per-corpus counting
//
// Text rows are tokenized, expanded into every n-gram within a configured
// length range, and counted across the whole corpus. Counting runs on the
// rayon pool with per-worker maps reduced at the end.

mod aggregate;
mod count;
mod generator;

pub use aggregate::{aggregate_reader, aggregate_rows, aggregate_texts};
pub use count::{DataNgrams, NgramBounds, NgramCount};
pub use generator::{expected_ngram_count, extract_ngrams, text_ngrams};
