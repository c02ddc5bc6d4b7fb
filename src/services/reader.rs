//! Tabular input readers
//!
//! Reads the first worksheet of a spreadsheet workbook (xlsx, xlsm, xlsb, xls,
//! ods) or a CSV file into a `RawTable`. Failing to read the input as a table
//! at all is a fatal `Load` error.

use std::io::Cursor;
use std::path::Path;

use calamine::{Data, Reader};
use csv::ReaderBuilder;

use crate::error::{DashboardError, DashboardResult};
use crate::models::{Cell, RawTable};

/// Supported input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Spreadsheet,
    Csv,
}

impl InputFormat {
    /// Detect the format from a file name's extension
    pub fn from_name(name: &str) -> DashboardResult<Self> {
        let extension = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(Self::Spreadsheet),
            "csv" | "txt" => Ok(Self::Csv),
            "" => Err(DashboardError::Load(format!(
                "Cannot determine file type of '{}'",
                name
            ))),
            other => Err(DashboardError::Load(format!(
                "Unsupported file type '.{}' for '{}'",
                other, name
            ))),
        }
    }
}

/// Read raw input bytes into a table
pub fn read_table(name: &str, bytes: &[u8]) -> DashboardResult<RawTable> {
    match InputFormat::from_name(name)? {
        InputFormat::Spreadsheet => read_spreadsheet(bytes),
        InputFormat::Csv => read_csv(bytes),
    }
}

/// Read the first worksheet of a workbook
///
/// Cells are placed at their absolute column, so a sheet whose data starts at
/// column B still has its first column empty.
pub fn read_spreadsheet(bytes: &[u8]) -> DashboardResult<RawTable> {
    let mut workbook = calamine::open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| DashboardError::Load("Workbook has no worksheets".into()))??;

    let column_offset = range.start().map(|(_, col)| col as usize).unwrap_or(0);
    let mut rows = range.rows().map(|row| {
        std::iter::repeat(Cell::Empty)
            .take(column_offset)
            .chain(row.iter().map(cell_from_data))
            .collect::<Vec<_>>()
    });

    let header = rows
        .next()
        .ok_or_else(|| DashboardError::Load("Worksheet is empty".into()))?
        .iter()
        .map(Cell::as_text)
        .collect();

    Ok(RawTable::new(header, rows.collect()))
}

/// Read a CSV file whose first line is the header
///
/// The delimiter is `;` when the header uses it more than `,` (common for
/// exports that write decimal commas), otherwise `,`. Fields that are not
/// valid UTF-8 are decoded as Latin-1, so one legacy-encoded cell never
/// fails the whole file.
pub fn read_csv(bytes: &[u8]) -> DashboardResult<RawTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(sniff_delimiter(bytes))
        .from_reader(bytes);

    let header = reader
        .byte_headers()?
        .iter()
        .map(|h| decode_field(h).trim().to_string())
        .collect();

    let rows = reader
        .byte_records()
        .map(|record| record.map(|r| r.iter().map(|f| Cell::text(decode_field(f))).collect()))
        .collect::<Result<Vec<Vec<Cell>>, csv::Error>>()?;

    Ok(RawTable::new(header, rows))
}

fn decode_field(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}

fn sniff_delimiter(bytes: &[u8]) -> u8 {
    let first_line = bytes.split(|b| *b == b'\n').next().unwrap_or_default();
    let semicolons = first_line.iter().filter(|b| **b == b';').count();
    let commas = first_line.iter().filter(|b| **b == b',').count();
    if semicolons > commas {
        b';'
    } else {
        b','
    }
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::String(s) => Cell::text(s.as_str()),
        Data::Bool(b) => Cell::Bool(*b),
        // Honors the workbook's 1900/1904 date system
        Data::DateTime(dt) => dt.as_datetime().map(Cell::DateTime).unwrap_or(Cell::Empty),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::text(s.as_str()),
        _ => Cell::Empty,
    }
}
