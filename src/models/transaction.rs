//! Transaction model
//!
//! One transaction per spreadsheet row. Built once by the loader and never
//! mutated afterwards.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use super::kind::TransactionKind;
use super::period::Period;

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    /// Transaction date
    pub date: NaiveDate,

    /// Free-text category, kept exactly as written in the sheet
    pub category: String,

    /// Income or expense
    pub kind: TransactionKind,

    /// Amount in currency units, never negative
    pub amount: f64,

    /// Free-text description
    pub description: String,
}

impl Transaction {
    /// Create a new transaction
    ///
    /// The amount is stored as its absolute value; direction lives in `kind`.
    pub fn new(
        date: NaiveDate,
        category: impl Into<String>,
        kind: TransactionKind,
        amount: f64,
        description: impl Into<String>,
    ) -> Self {
        let amount = if amount.is_finite() { amount.abs() } else { 0.0 };
        Self {
            date,
            category: category.into(),
            kind,
            amount,
            description: description.into(),
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind.is_income()
    }

    pub fn is_expense(&self) -> bool {
        self.kind.is_expense()
    }

    /// The period this transaction belongs to
    pub fn period(&self) -> Period {
        Period::of(self.date)
    }

    /// Amount with direction applied: positive for income, negative for expense
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {:.2}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.kind,
            self.amount
        )?;
        if !self.description.is_empty() {
            write!(f, " ({})", self.description)?;
        }
        Ok(())
    }
}
