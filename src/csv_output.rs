//! CSV output format for gap reports
//!
//! One row per n-gram, columns `ngram,count1,total1,count2,total2,total,chi2`.

use crate::gap::{GapReport, GapRow, REPORT_COLUMNS};
use std::io::{self, Write};

/// CSV output formatter
#[derive(Debug)]
pub struct CsvOutput<'a> {
    report: &'a GapReport,
}

impl<'a> CsvOutput<'a> {
    /// Create a new CSV output formatter
    pub fn new(report: &'a GapReport) -> Self {
        Self { report }
    }

    /// Generate CSV header row
    fn header() -> String {
        REPORT_COLUMNS.join(",")
    }

    /// Escape CSV field (handle commas, quotes, newlines)
    fn escape_field(field: &str) -> String {
        // If field contains comma, quote, or line break, wrap in quotes and escape quotes
        if field.contains([',', '"', '\n', '\r']) {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    /// Format a report row as CSV
    fn format_row(row: &GapRow) -> String {
        [
            Self::escape_field(&row.ngram),
            row.count1.to_string(),
            row.total1.to_string(),
            row.count2.to_string(),
            row.total2.to_string(),
            row.total.to_string(),
            row.chi2.to_string(),
        ]
        .join(",")
    }

    /// Stream the CSV document to `writer`
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writeln!(writer, "{}", Self::header())?;
        for row in &self.report.rows {
            writeln!(writer, "{}", Self::format_row(row))?;
        }
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(ngram: &str, count1: u64, count2: u64, chi2: f64) -> GapRow {
        GapRow {
            ngram: ngram.to_string(),
            count1,
            total1: 4,
            count2,
            total2: 11,
            total: count1 + count2,
            chi2,
        }
    }

    fn report(rows: Vec<GapRow>) -> GapReport {
        GapReport {
            total1: 4,
            total2: 11,
            unique_ngrams: rows.len(),
            truncated: false,
            rows,
        }
    }

    #[test]
    fn test_csv_header() {
        assert_eq!(
            CsvOutput::header(),
            "ngram,count1,total1,count2,total2,total,chi2"
        );
    }

    #[test]
    fn test_csv_escape_field_simple() {
        assert_eq!(CsvOutput::escape_field("hello"), "hello");
    }

    #[test]
    fn test_csv_escape_field_with_comma() {
        assert_eq!(CsvOutput::escape_field("hello,world"), "\"hello,world\"");
    }

    #[test]
    fn test_csv_escape_field_with_quote() {
        assert_eq!(CsvOutput::escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_csv_format_row() {
        let line = CsvOutput::format_row(&row("hello", 2, 2, 2.25));
        assert_eq!(line, "hello,2,4,2,11,4,2.25");
    }

    #[test]
    fn test_csv_format_negative_score() {
        let line = CsvOutput::format_row(&row("to my", 0, 3, -0.5));
        assert_eq!(line, "to my,0,4,3,11,3,-0.5");
    }

    fn written(report: &GapReport) -> String {
        let mut buf = Vec::new();
        CsvOutput::new(report).write_to(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_csv_write_to_output() {
        let report = report(vec![row("hello", 2, 2, 2.25), row("world", 1, 0, 1.0)]);

        assert_eq!(
            written(&report),
            "ngram,count1,total1,count2,total2,total,chi2\n\
             hello,2,4,2,11,4,2.25\n\
             world,1,4,0,11,1,1\n"
        );
    }

    #[test]
    fn test_csv_write_to_escapes_ngram() {
        let report = report(vec![row("a, b", 1, 1, 0.0)]);
        assert_eq!(
            written(&report).lines().nth(1),
            Some("\"a, b\",1,4,1,11,2,0")
        );
    }

    #[test]
    fn test_csv_empty_report_is_header_only() {
        assert_eq!(
            written(&report(vec![])),
            "ngram,count1,total1,count2,total2,total,chi2\n"
        );
    }
}
