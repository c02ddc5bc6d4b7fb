//! Cell-level parsing
//!
//! Converts raw spreadsheet cells into amounts, canonical labels and dates.
//! Every function here is total: bad input yields a default (or `None` for
//! dates), never an error.

pub mod amount;
pub mod date;
pub mod text;

pub use amount::{parse_amount, parse_amount_str, try_parse_amount_str};
pub use date::{excel_serial_to_datetime, parse_date, parse_date_str};
pub use text::normalize;
