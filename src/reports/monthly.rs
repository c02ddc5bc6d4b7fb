//! Monthly income/expense series
//!
//! A long-form series over the whole collection: one row per month and kind,
//! from the earliest to the latest month with data. Months without a given
//! kind get an explicit zero so plotted lines stay continuous.

use serde::Serialize;
use std::collections::HashMap;
use std::io::Write;

use crate::error::{DashboardError, DashboardResult};
use crate::models::{Period, Transaction, TransactionKind};

/// One (month, kind) total
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyPoint {
    pub period: Period,
    /// Month/year token, e.g. "Jan/2025"
    pub label: String,
    pub kind: TransactionKind,
    pub total: f64,
}

/// Build the zero-filled monthly series, ascending
pub fn monthly_series(all: &[Transaction]) -> Vec<MonthlyPoint> {
    let (Some(first), Some(last)) = (
        all.iter().map(Transaction::period).min(),
        all.iter().map(Transaction::period).max(),
    ) else {
        return Vec::new();
    };

    let mut totals: HashMap<(Period, TransactionKind), f64> = HashMap::new();
    for txn in all {
        *totals.entry((txn.period(), txn.kind)).or_insert(0.0) += txn.amount;
    }

    first
        .through(last)
        .flat_map(|period| {
            let label = period.label();
            let totals = &totals;
            TransactionKind::ALL.into_iter().map(move |kind| MonthlyPoint {
                period,
                label: label.clone(),
                kind,
                total: totals.get(&(period, kind)).copied().unwrap_or(0.0),
            })
        })
        .collect()
}

/// Write the series as CSV: `period,label,kind,total`
pub fn export_csv<W: Write>(series: &[MonthlyPoint], writer: W) -> DashboardResult<()> {
    let export_err = |e: csv::Error| DashboardError::Io(format!("Failed to write series: {}", e));
    let mut csv = csv::Writer::from_writer(writer);

    csv.write_record(["period", "label", "kind", "total"])
        .map_err(export_err)?;
    for point in series {
        csv.write_record([
            point.period.to_string(),
            point.label.clone(),
            point.kind.to_string(),
            format!("{:.2}", point.total),
        ])
        .map_err(export_err)?;
    }

    csv.flush()
        .map_err(|e| DashboardError::Io(format!("Failed to write series: {}", e)))
}
