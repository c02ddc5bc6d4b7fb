//! Date parsing with day-first ordering
//!
//! Ambiguous numeric dates such as `05/01/2025` are read as 5 January.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::models::Cell;

/// Date-only formats, tried in order
///
/// Two-digit-year variants come before their four-digit counterparts, and all
/// day-first variants come before ISO, so that `05-01-25` is never read as
/// the year 5.
const DATE_FORMATS: [&str; 10] = [
    "%d/%m/%y", "%d/%m/%Y", "%d-%m-%y", "%d-%m-%Y", "%d.%m.%y", "%d.%m.%Y", "%Y-%m-%d",
    "%Y/%m/%d", "%Y.%m.%d", "%Y%m%d",
];

/// Date-time formats, tried after the date-only ones
const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d-%m-%Y %H:%M:%S",
];

/// Largest serial Excel can represent (31 December 9999)
const MAX_EXCEL_SERIAL: f64 = 2_958_465.0;

/// Parse a date cell, returning `None` for blank or unparseable values
pub fn parse_date(cell: &Cell) -> Option<NaiveDate> {
    match cell {
        Cell::DateTime(dt) => Some(dt.date()),
        Cell::Number(serial) => excel_serial_to_datetime(*serial).map(|dt| dt.date()),
        Cell::Text(s) => parse_date_str(s),
        Cell::Empty | Cell::Bool(_) => None,
    }
}

/// Parse a textual date
pub fn parse_date_str(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
                .map(|dt| dt.date())
        })
}

/// Convert an Excel serial date (days since 1899-12-30) to a date-time
pub fn excel_serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || serial < 1.0 || serial > MAX_EXCEL_SERIAL {
        return None;
    }

    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let days = serial.trunc() as i64;
    let seconds = ((serial - serial.trunc()) * 86_400.0).round() as i64;

    epoch
        .checked_add_signed(Duration::days(days))?
        .checked_add_signed(Duration::seconds(seconds))
}
