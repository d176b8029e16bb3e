#![no_main]

use libfuzzer_sys::fuzz_target;
use ngram_gap::ngram::{text_ngrams, NgramBounds};
use ngram_gap::tokenizer::tokenize;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let tokens = tokenize(input);
        assert!(tokens.iter().all(|t| !t.is_empty()));

        if let Ok(bounds) = NgramBounds::new(1, 3) {
            let _ = text_ngrams(input, bounds);
        }
    }
});
