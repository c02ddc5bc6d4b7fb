//! Transaction direction

use serde::Serialize;
use std::fmt;

/// Canonical direction of a transaction
///
/// Amounts are always non-negative; whether money came in or went out is
/// carried only by the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Both kinds, in the order reports list them
    pub const ALL: [TransactionKind; 2] = [TransactionKind::Income, TransactionKind::Expense];

    /// Classify an already-normalized type label against the two known tokens
    ///
    /// Returns `None` when the label matches neither token; the caller decides
    /// the fallback.
    pub fn classify(normalized: &str, income_label: &str, expense_label: &str) -> Option<Self> {
        if normalized == income_label {
            Some(Self::Income)
        } else if normalized == expense_label {
            Some(Self::Expense)
        } else {
            None
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }

    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense)
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}
