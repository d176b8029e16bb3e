//! XLSX output format for gap reports
//!
//! One worksheet with a bold header row followed by one row per n-gram.
//! Counts and scores are written as numeric cells.

use crate::error::{GapError, Result};
use crate::gap::{GapReport, REPORT_COLUMNS};
use rust_xlsxwriter::{Format, Workbook};
use std::io::Write;

/// Worksheet rows available below the header
pub const XLSX_MAX_REPORT_ROWS: usize = 1_048_575;

const SHEET_NAME: &str = "ngram gap";

/// XLSX output formatter
#[derive(Debug)]
pub struct XlsxOutput<'a> {
    report: &'a GapReport,
}

impl<'a> XlsxOutput<'a> {
    /// Create a new XLSX output formatter
    pub fn new(report: &'a GapReport) -> Self {
        Self { report }
    }

    fn check_row_limit(rows: usize) -> Result<()> {
        if rows > XLSX_MAX_REPORT_ROWS {
            return Err(GapError::Config(format!(
                "Report has {} rows; a worksheet holds at most {}",
                rows, XLSX_MAX_REPORT_ROWS
            )));
        }
        Ok(())
    }

    /// Build the workbook in memory
    fn workbook(&self) -> Result<Workbook> {
        let rows = &self.report.rows;
        Self::check_row_limit(rows.len())?;

        let mut workbook = Workbook::new();
        let bold = Format::new().set_bold();
        let sheet = workbook.add_worksheet();
        sheet.set_name(SHEET_NAME)?;

        for (col, name) in REPORT_COLUMNS.iter().enumerate() {
            sheet.write_string_with_format(0, col as u16, *name, &bold)?;
        }

        for (i, row) in rows.iter().enumerate() {
            let r = (i + 1) as u32;
            sheet.write_string(r, 0, row.ngram.as_str())?;
            sheet.write_number(r, 1, row.count1 as f64)?;
            sheet.write_number(r, 2, row.total1 as f64)?;
            sheet.write_number(r, 3, row.count2 as f64)?;
            sheet.write_number(r, 4, row.total2 as f64)?;
            sheet.write_number(r, 5, row.total as f64)?;
            sheet.write_number(r, 6, row.chi2)?;
        }

        Ok(workbook)
    }

    /// Write the workbook bytes to `writer`
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        let bytes = self.workbook()?.save_to_buffer()?;
        writer.write_all(&bytes)?;
        writer.flush()?;
        Ok(())
    }
}
