//! Tabular text input
//!
//! Reads one named text column from a CSV file (header row required), an
//! XLSX workbook (first worksheet, header row required) or a JSON Lines file
//! (one object per line, column = key). CSV and JSON Lines rows are produced
//! lazily so large corpora stream through aggregation.

use crate::error::{GapError, Result};
use calamine::{Data, Reader, Xlsx};
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader, Read, Seek};
use std::path::Path;

/// Lazily read text cells; `None` marks a null or empty cell
pub type TextRows = Box<dyn Iterator<Item = Result<Option<String>>> + Send>;

/// Supported input file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabularFormat {
    Csv,
    Xlsx,
    JsonLines,
}

impl TabularFormat {
    /// Detect format from file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("xlsx") => Ok(Self::Xlsx),
            Some("jsonl") | Some("ndjson") => Ok(Self::JsonLines),
            _ => Err(GapError::Config(format!(
                "Unsupported input format for {} (expected .csv, .xlsx, .jsonl or .ndjson)",
                path.display()
            ))),
        }
    }
}

/// A resolved text column ready to be streamed
pub struct TextColumn {
    /// Zero-based column index for headed formats
    pub index: Option<usize>,
    pub rows: TextRows,
}

impl std::fmt::Debug for TextColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextColumn")
            .field("index", &self.index)
            .field("rows", &"<TextRows>")
            .finish()
    }
}

/// Open `path` and resolve its `column`
pub fn open_text_column(path: &Path, column: &str) -> Result<TextColumn> {
    let format = TabularFormat::from_path(path)?;
    let file = File::open(path)?;
    read_text_column(
        BufReader::new(file),
        format,
        &path.display().to_string(),
        column,
    )
}

/// Resolve `column` from an already opened reader
pub fn read_text_column<R>(
    reader: R,
    format: TabularFormat,
    source_name: &str,
    column: &str,
) -> Result<TextColumn>
where
    R: Read + Seek + Send + 'static,
{
    match format {
        TabularFormat::Csv => read_csv_column(reader, source_name, column),
        TabularFormat::Xlsx => read_xlsx_column(reader, source_name, column),
        TabularFormat::JsonLines => Ok(TextColumn {
            index: None,
            rows: Box::new(JsonLinesColumn {
                reader: BufReader::new(reader),
                source_name: source_name.to_string(),
                column: column.to_string(),
                line: 0,
                done: false,
            }),
        }),
    }
}

fn column_not_found(column: &str, source_name: &str) -> GapError {
    GapError::ColumnNotFound {
        column: column.to_string(),
        source_name: source_name.to_string(),
    }
}

fn csv_error(err: csv::Error, source_name: &str) -> GapError {
    let line = err.position().map_or(0, |pos| pos.line() as usize);
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(io) => GapError::Io(io),
        _ => GapError::Parse {
            source_name: source_name.to_string(),
            line,
            message,
        },
    }
}

/// CSV column: RFC 4180 quoting, ragged rows allowed
fn read_csv_column<R>(reader: R, source_name: &str, column: &str) -> Result<TextColumn>
where
    R: Read + Send + 'static,
{
    let mut csv = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let index = csv
        .headers()
        .map_err(|e| csv_error(e, source_name))?
        .iter()
        .map(|name| name.trim_start_matches('\u{feff}'))
        .position(|name| name == column)
        .ok_or_else(|| column_not_found(column, source_name))?;

    let source_name = source_name.to_string();
    let rows = csv.into_records().map(move |record| {
        record
            .map(|fields| fields.get(index).filter(|f| !f.is_empty()).map(str::to_string))
            .map_err(|e| csv_error(e, &source_name))
    });

    Ok(TextColumn {
        index: Some(index),
        rows: Box::new(rows),
    })
}

fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(text) => Some(text.clone()).filter(|t| !t.is_empty()),
        other => Some(other.to_string()),
    }
}

/// XLSX column from the first worksheet; fully empty rows are skipped
fn read_xlsx_column<R>(reader: R, source_name: &str, column: &str) -> Result<TextColumn>
where
    R: Read + Seek,
{
    let mut workbook = Xlsx::new(reader)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| GapError::Parse {
            source_name: source_name.to_string(),
            line: 0,
            message: "workbook has no worksheets".to_string(),
        })??;

    let mut rows = range.rows();
    let index = rows
        .next()
        .and_then(|header| {
            header
                .iter()
                .position(|cell| cell_text(cell).as_deref() == Some(column))
        })
        .ok_or_else(|| column_not_found(column, source_name))?;

    let cells: Vec<Result<Option<String>>> = rows
        .filter(|row| row.iter().any(|cell| !matches!(cell, Data::Empty)))
        .map(|row| Ok(row.get(index).and_then(cell_text)))
        .collect();

    Ok(TextColumn {
        index: Some(index),
        rows: Box::new(cells.into_iter()),
    })
}

/// Text column of a JSON Lines source
struct JsonLinesColumn<R> {
    reader: R,
    source_name: String,
    column: String,
    line: usize,
    done: bool,
}

impl<R: BufRead> JsonLinesColumn<R> {
    fn read_cell(&mut self) -> Result<Option<Option<String>>> {
        let mut buf = String::new();
        loop {
            buf.clear();
            if self.reader.read_line(&mut buf)? == 0 {
                return Ok(None);
            }
            self.line += 1;
            if !buf.trim().is_empty() {
                break;
            }
        }

        let value: Value = serde_json::from_str(&buf).map_err(|e| GapError::Parse {
            source_name: self.source_name.clone(),
            line: self.line,
            message: e.to_string(),
        })?;

        let Value::Object(mut object) = value else {
            return Err(GapError::Parse {
                source_name: self.source_name.clone(),
                line: self.line,
                message: "expected a JSON object".to_string(),
            });
        };

        let cell = match object.remove(&self.column) {
            None | Some(Value::Null) => None,
            Some(Value::String(text)) => Some(text).filter(|t| !t.is_empty()),
            Some(other) => Some(other.to_string()),
        };
        Ok(Some(cell))
    }
}

impl<R: BufRead> Iterator for JsonLinesColumn<R> {
    type Item = Result<Option<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let cell = self.read_cell().transpose();
        if !matches!(cell, Some(Ok(_))) {
            self.done = true;
        }
        cell
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;
    use std::io::Cursor;

    fn column(input: &str, format: TabularFormat, name: &str) -> Result<Vec<Option<String>>> {
        let column = read_text_column(Cursor::new(input.to_string()), format, "test", name)?;
        column.rows.collect()
    }

    fn cells(values: &[&str]) -> Vec<Option<String>> {
        values
            .iter()
            .map(|v| Some(v.to_string()).filter(|v| !v.is_empty()))
            .collect()
    }

    /// Workbook bytes with one string cell per non-empty value
    fn workbook(rows: &[&[&str]]) -> Vec<u8> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                if !value.is_empty() {
                    sheet.write_string(r as u32, c as u16, *value).unwrap();
                }
            }
        }
        workbook.save_to_buffer().unwrap()
    }

    fn xlsx_column(bytes: Vec<u8>, name: &str) -> Result<TextColumn> {
        read_text_column(Cursor::new(bytes), TabularFormat::Xlsx, "test.xlsx", name)
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            TabularFormat::from_path(Path::new("a/tickets.CSV")).unwrap(),
            TabularFormat::Csv
        );
        assert_eq!(
            TabularFormat::from_path(Path::new("docs.jsonl")).unwrap(),
            TabularFormat::JsonLines
        );
        assert_eq!(
            TabularFormat::from_path(Path::new("docs.xlsx")).unwrap(),
            TabularFormat::Xlsx
        );
        assert!(matches!(
            TabularFormat::from_path(Path::new("docs.parquet")),
            Err(GapError::Config(_))
        ));
    }

    #[test]
    fn test_csv_simple_records() {
        let cells_read = column("id,text\n1,hello\n2,world\n", TabularFormat::Csv, "text");
        assert_eq!(cells_read.unwrap(), cells(&["hello", "world"]));
    }

    #[test]
    fn test_csv_quoted_fields() {
        let cells_read = column(
            "text\n\"Hello, world!\"\n\"say \"\"hi\"\"\"\n",
            TabularFormat::Csv,
            "text",
        );
        assert_eq!(cells_read.unwrap(), cells(&["Hello, world!", "say \"hi\""]));
    }

    #[test]
    fn test_csv_multiline_quoted_field() {
        let cells_read = column(
            "id,text\n1,\"line one\nline two\"\n2,next\n",
            TabularFormat::Csv,
            "text",
        );
        assert_eq!(cells_read.unwrap(), cells(&["line one\nline two", "next"]));
    }

    #[test]
    fn test_csv_crlf_and_missing_final_newline() {
        let cells_read = column("a,text\r\n1,2\r\n3,4", TabularFormat::Csv, "text");
        assert_eq!(cells_read.unwrap(), cells(&["2", "4"]));
    }

    #[test]
    fn test_csv_skips_blank_lines() {
        let cells_read = column("text\n\nhello\n\n", TabularFormat::Csv, "text");
        assert_eq!(cells_read.unwrap(), cells(&["hello"]));
    }

    #[test]
    fn test_csv_invalid_utf8_is_parse_error() {
        let result = read_text_column(
            Cursor::new(b"text\nhello\n\xff\xfe\n".to_vec()),
            TabularFormat::Csv,
            "test.csv",
            "text",
        )
        .and_then(|column| column.rows.collect::<Result<Vec<_>>>());
        assert!(matches!(result, Err(GapError::Parse { .. })));
    }

    #[test]
    fn test_csv_column_lookup() {
        let cells_read = column("id,text\n1,hello\n2,\n3\n", TabularFormat::Csv, "text").unwrap();
        assert_eq!(cells_read, vec![Some("hello".to_string()), None, None]);
    }

    #[test]
    fn test_csv_column_lookup_strips_bom() {
        let cells_read = column("\u{feff}text\nhello\n", TabularFormat::Csv, "text").unwrap();
        assert_eq!(cells_read, cells(&["hello"]));
    }

    #[test]
    fn test_csv_missing_column() {
        let result = read_text_column(
            Cursor::new("id,body\n1,hello\n".to_string()),
            TabularFormat::Csv,
            "tickets.csv",
            "text",
        );
        assert!(matches!(
            result,
            Err(GapError::ColumnNotFound { ref column, .. }) if column == "text"
        ));
    }

    #[test]
    fn test_csv_empty_input_has_no_column() {
        let result = read_text_column(
            Cursor::new(String::new()),
            TabularFormat::Csv,
            "empty.csv",
            "text",
        );
        assert!(matches!(result, Err(GapError::ColumnNotFound { .. })));
    }

    #[test]
    fn test_csv_column_index_reported() {
        let column = read_text_column(
            Cursor::new("id,lang,text\n".to_string()),
            TabularFormat::Csv,
            "test",
            "text",
        )
        .unwrap();
        assert_eq!(column.index, Some(2));
    }

    #[test]
    fn test_xlsx_column() {
        let bytes = workbook(&[
            &["id", "text"],
            &["1", "Hello, world!"],
            &["", ""],
            &["2", ""],
            &["3", "Hello, Dolly!"],
        ]);

        let column = xlsx_column(bytes, "text").unwrap();
        assert_eq!(column.index, Some(1));

        let rows: Vec<_> = column.rows.collect::<Result<_>>().unwrap();
        assert_eq!(
            rows,
            vec![
                Some("Hello, world!".to_string()),
                None,
                Some("Hello, Dolly!".to_string())
            ]
        );
    }

    #[test]
    fn test_xlsx_numeric_cell_rendered_as_text() {
        let mut book = Workbook::new();
        let sheet = book.add_worksheet();
        sheet.write_string(0, 0, "text").unwrap();
        sheet.write_number(1, 0, 42.0).unwrap();
        let bytes = book.save_to_buffer().unwrap();

        let rows: Vec<_> = xlsx_column(bytes, "text")
            .unwrap()
            .rows
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(rows, cells(&["42"]));
    }

    #[test]
    fn test_xlsx_missing_column() {
        let bytes = workbook(&[&["id", "body"], &["1", "hello"]]);
        assert!(matches!(
            xlsx_column(bytes, "text"),
            Err(GapError::ColumnNotFound { ref column, .. }) if column == "text"
        ));
    }

    #[test]
    fn test_xlsx_not_a_workbook() {
        let result = xlsx_column(b"id,text\n1,hello\n".to_vec(), "text");
        assert!(matches!(result, Err(GapError::XlsxRead(_))));
    }

    #[test]
    fn test_jsonl_column() {
        let input = concat!(
            "{\"text\": \"Hello, world!\"}\n",
            "\n",
            "{\"text\": null}\n",
            "{\"other\": 1}\n",
            "{\"text\": 42}\n",
        );
        let cells = column(input, TabularFormat::JsonLines, "text").unwrap();
        assert_eq!(
            cells,
            vec![
                Some("Hello, world!".to_string()),
                None,
                None,
                Some("42".to_string())
            ]
        );
    }

    #[test]
    fn test_jsonl_malformed_line() {
        let result = column(
            "{\"text\": \"ok\"}\nnot json\n",
            TabularFormat::JsonLines,
            "text",
        );
        assert!(matches!(result, Err(GapError::Parse { line: 2, .. })));
    }

    #[test]
    fn test_jsonl_non_object_line() {
        let result = column("[1, 2]\n", TabularFormat::JsonLines, "text");
        assert!(matches!(result, Err(GapError::Parse { line: 1, .. })));
    }
}
