//! Transaction loader
//!
//! Turns a raw table into the canonical transaction set. The first five
//! columns are, in order: date, category, type label, amount, description.
//!
//! Per-cell problems never fail a load: bad amounts become zero and labels
//! matching neither known token are classified as expenses. Rows without a
//! usable date are dropped. Only a structurally unusable table is an error.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use super::cache::{Clock, ExpiringCache, SystemClock};
use super::reader::read_table;
use crate::config::Settings;
use crate::error::{DashboardError, DashboardResult};
use crate::models::{RawTable, Transaction, TransactionKind};
use crate::parsing::{normalize, parse_amount, parse_date};

/// Column positions in the input table
pub const DATE_COLUMN: usize = 0;
pub const CATEGORY_COLUMN: usize = 1;
pub const TYPE_COLUMN: usize = 2;
pub const AMOUNT_COLUMN: usize = 3;
pub const DESCRIPTION_COLUMN: usize = 4;

/// Number of columns the input must provide
pub const EXPECTED_COLUMNS: usize = 5;

/// Kind assigned to rows whose type label matches neither known token
pub const FALLBACK_KIND: TransactionKind = TransactionKind::Expense;

/// Identity of an input file for caching purposes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InputIdentity {
    pub name: String,
    pub len: usize,
    pub content_hash: u64,
}

impl InputIdentity {
    pub fn new(name: &str, bytes: &[u8]) -> Self {
        let mut hasher = DefaultHasher::new();
        bytes.hash(&mut hasher);
        Self {
            name: name.to_string(),
            len: bytes.len(),
            content_hash: hasher.finish(),
        }
    }
}

/// Transactions produced by a load, plus what was skipped along the way
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOutcome {
    pub transactions: Vec<Transaction>,
    /// Rows dropped for a missing or unparseable date
    pub dropped_rows: usize,
    /// Rows whose type label matched neither known token
    pub unrecognized_labels: usize,
}

/// Loads spreadsheets into transactions, memoizing results per input
pub struct TransactionLoader<C: Clock = SystemClock> {
    income_label: String,
    expense_label: String,
    cache: ExpiringCache<InputIdentity, Arc<[Transaction]>, C>,
}

impl TransactionLoader<SystemClock> {
    /// Create a loader using the labels and cache lifetime from settings
    pub fn new(settings: &Settings) -> Self {
        Self::with_clock(settings, SystemClock)
    }
}

impl<C: Clock> TransactionLoader<C> {
    pub fn with_clock(settings: &Settings, clock: C) -> Self {
        Self {
            income_label: normalize(&settings.income_label),
            expense_label: normalize(&settings.expense_label),
            cache: ExpiringCache::with_clock(
                Duration::from_secs(settings.cache_ttl_secs),
                clock,
            ),
        }
    }

    /// Load a file from disk
    ///
    /// The file is read on every call; parsing is skipped while a cached
    /// result for identical content is still fresh.
    pub fn load_file(&self, path: impl AsRef<Path>) -> DashboardResult<Arc<[Transaction]>> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            DashboardError::Load(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        self.load_bytes(&name, &bytes)
    }

    /// Load an uploaded file given its name (for format detection) and content
    pub fn load_bytes(&self, name: &str, bytes: &[u8]) -> DashboardResult<Arc<[Transaction]>> {
        let identity = InputIdentity::new(name, bytes);

        self.cache.get_or_try_insert_with(identity, || {
            let table = read_table(name, bytes)?;
            let outcome = self.parse_table(&table)?;
            info!(
                file = name,
                transactions = outcome.transactions.len(),
                dropped_rows = outcome.dropped_rows,
                unrecognized_labels = outcome.unrecognized_labels,
                "Loaded spreadsheet"
            );
            Ok(Arc::from(outcome.transactions))
        })
    }

    /// Convert a raw table into transactions
    pub fn load_table(&self, table: &RawTable) -> DashboardResult<Vec<Transaction>> {
        self.parse_table(table).map(|outcome| outcome.transactions)
    }

    /// Convert a raw table into transactions, reporting skipped rows
    pub fn parse_table(&self, table: &RawTable) -> DashboardResult<LoadOutcome> {
        if table.header.len() < EXPECTED_COLUMNS {
            return Err(DashboardError::Load(format!(
                "Expected at least {} columns (date, category, type, amount, description), found {}",
                EXPECTED_COLUMNS,
                table.header.len()
            )));
        }

        let mut outcome = LoadOutcome {
            transactions: Vec::with_capacity(table.row_count()),
            dropped_rows: 0,
            unrecognized_labels: 0,
        };

        for (idx, row) in table.rows.iter().enumerate() {
            // Spreadsheet row number: 1-based, after the header
            let line = idx + 2;

            if row.iter().take(EXPECTED_COLUMNS).all(|c| c.is_blank()) {
                continue;
            }

            let Some(date) = parse_date(table.cell(idx, DATE_COLUMN)) else {
                debug!(row = line, "Dropping row without a valid date");
                outcome.dropped_rows += 1;
                continue;
            };

            let label = normalize(&table.cell(idx, TYPE_COLUMN).as_text());
            let kind = match TransactionKind::classify(&label, &self.income_label, &self.expense_label)
            {
                Some(kind) => kind,
                None => {
                    debug!(row = line, label = %label, "Unrecognized type label");
                    outcome.unrecognized_labels += 1;
                    FALLBACK_KIND
                }
            };

            outcome.transactions.push(Transaction::new(
                date,
                table.cell(idx, CATEGORY_COLUMN).as_text(),
                kind,
                parse_amount(table.cell(idx, AMOUNT_COLUMN)),
                table.cell(idx, DESCRIPTION_COLUMN).as_text(),
            ));
        }

        if outcome.unrecognized_labels > 0 {
            warn!(
                count = outcome.unrecognized_labels,
                income = %self.income_label,
                expense = %self.expense_label,
                "Rows with unrecognized type labels were counted as expenses"
            );
        }

        Ok(outcome)
    }
}
