use super::count::NgramBounds;
use crate::tokenizer::tokenize;

/// Extracts every n-gram whose length lies within `bounds`
///
/// Each n-gram is a contiguous token span joined with single spaces.
/// For L tokens this yields `Σ max(0, L - len + 1)` strings over all lengths.
///
/// # Example
/// ```
/// use ngram_gap::ngram::{extract_ngrams, NgramBounds};
///
/// let tokens = vec!["say".to_string(), "hello".to_string(), "to".to_string()];
/// let ngrams = extract_ngrams(&tokens, NgramBounds::new(2, 3).unwrap());
///
/// assert_eq!(ngrams, vec!["say hello", "say hello to", "hello to"]);
/// ```
pub fn extract_ngrams(tokens: &[String], bounds: NgramBounds) -> Vec<String> {
    let mut ngrams = Vec::with_capacity(expected_ngram_count(tokens.len(), bounds));

    for start in 0..tokens.len() {
        for len in bounds.min()..=bounds.max() {
            let end = start + len;
            if end > tokens.len() {
                break;
            }
            ngrams.push(tokens[start..end].join(" "));
        }
    }

    ngrams
}

/// Tokenizes `text` and extracts its n-grams
pub fn text_ngrams(text: &str, bounds: NgramBounds) -> Vec<String> {
    extract_ngrams(&tokenize(text), bounds)
}

/// Number of n-grams `extract_ngrams` produces for `token_count` tokens
pub fn expected_ngram_count(token_count: usize, bounds: NgramBounds) -> usize {
    (bounds.min()..=bounds.max())
        .map(|len| (token_count + 1).saturating_sub(len))
        .sum()
}
