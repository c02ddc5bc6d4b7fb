//! Raw tabular input
//!
//! Spreadsheet and CSV readers both produce a `RawTable`; the loader turns it
//! into transactions without caring where it came from.

use chrono::NaiveDateTime;

/// A single cell as read from the input
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Number(f64),
    Text(String),
    Bool(bool),
    DateTime(NaiveDateTime),
}

impl Cell {
    /// Build a text cell, mapping blank strings to `Empty`
    pub fn text(s: impl Into<String>) -> Self {
        let s = s.into();
        if s.trim().is_empty() {
            Self::Empty
        } else {
            Self::Text(s)
        }
    }

    /// True for empty cells and whitespace-only text
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Cell rendered as plain text, for free-text columns
    pub fn as_text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.trim().to_string(),
            Self::Bool(b) => b.to_string(),
            Self::DateTime(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// A header row followed by data rows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl RawTable {
    pub fn new(header: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self { header, rows }
    }

    /// Cell at `(row, column)`, treating short rows as padded with `Empty`
    pub fn cell(&self, row: usize, column: usize) -> &Cell {
        const EMPTY: &Cell = &Cell::Empty;
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .unwrap_or(EMPTY)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
