//! Display formatting for terminal output
//!
//! The boundary layer: everything locale-specific about amounts lives here,
//! away from the numeric outputs of the reports.

pub mod format;
pub mod report;

pub use format::{format_brl, format_currency, progress_bar};
pub use report::{format_report, RenderOptions};
