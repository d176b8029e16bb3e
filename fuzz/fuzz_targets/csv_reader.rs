#![no_main]

use libfuzzer_sys::fuzz_target;
use ngram_gap::tabular::{read_text_column, TabularFormat};
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    // Any input must resolve or reject the column, then stream or stop with an error
    if let Ok(column) = read_text_column(
        Cursor::new(data.to_vec()),
        TabularFormat::Csv,
        "fuzz.csv",
        "text",
    ) {
        for cell in column.rows {
            if cell.is_err() {
                break;
            }
        }
    }
});
