//! ngram-gap - lexical gap analysis between two text corpora
//!
//! This library tokenizes the text column of two tabular datasets, counts
//! word n-grams in each, joins the counts, and ranks every n-gram with a
//! signed chi-square-like score of how over- or under-represented it is in
//! the first corpus relative to the second.

pub mod cli;
pub mod config;
pub mod csv_output;
pub mod error;
pub mod gap;
pub mod json_output;
pub mod ngram;
pub mod pipeline;
pub mod tabular;
pub mod tokenizer;
pub mod xlsx_output;
