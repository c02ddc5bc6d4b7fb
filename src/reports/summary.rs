//! Balance and period totals

use serde::Serialize;
use std::collections::BTreeSet;

use crate::models::{Period, Transaction, TransactionKind};

/// Income, expense and balance for one period
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PeriodMetrics {
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
}

impl PeriodMetrics {
    fn from_transactions<'a>(txns: impl Iterator<Item = &'a Transaction>) -> Self {
        let (income, expense) = txns.fold((0.0, 0.0), |(income, expense), txn| match txn.kind {
            TransactionKind::Income => (income + txn.amount, expense),
            TransactionKind::Expense => (income, expense + txn.amount),
        });

        Self {
            income,
            expense,
            balance: income - expense,
        }
    }
}

/// All-time income minus expense, ignoring any period selection
pub fn total_balance(all: &[Transaction]) -> f64 {
    all.iter().map(Transaction::signed_amount).sum()
}

/// Income, expense and balance for transactions dated within `period`
pub fn period_metrics(all: &[Transaction], period: Period) -> PeriodMetrics {
    PeriodMetrics::from_transactions(all.iter().filter(|t| period.contains(t.date)))
}

/// The period's transactions, sorted by date
///
/// The sort is stable, so same-day rows keep their spreadsheet order.
pub fn period_transactions(all: &[Transaction], period: Period) -> Vec<&Transaction> {
    let mut txns: Vec<_> = all.iter().filter(|t| period.contains(t.date)).collect();
    txns.sort_by_key(|t| t.date);
    txns
}

/// Distinct years present in the data, ascending
pub fn available_years(all: &[Transaction]) -> Vec<i32> {
    all.iter()
        .map(|t| t.period().year())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// The most recent month that has data
pub fn default_period(all: &[Transaction]) -> Option<Period> {
    all.iter().map(Transaction::period).max()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn txn(y: i32, m: u32, d: u32, kind: TransactionKind, amount: f64) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            "Lazer",
            kind,
            amount,
            "",
        )
    }

    fn sample() -> Vec<Transaction> {
        vec![
            txn(2024, 12, 20, TransactionKind::Income, 1000.0),
            txn(2025, 1, 10, TransactionKind::Expense, 50.0),
            txn(2025, 1, 5, TransactionKind::Income, 100.0),
            txn(2025, 3, 1, TransactionKind::Expense, 300.0),
        ]
    }

    #[test]
    fn test_total_balance_covers_everything() {
        assert_eq!(total_balance(&sample()), 750.0);
        assert_eq!(total_balance(&[]), 0.0);
    }

    #[test]
    fn test_period_metrics() {
        let metrics = period_metrics(&sample(), Period::new(2025, 1).unwrap());
        assert_eq!(
            metrics,
            PeriodMetrics {
                income: 100.0,
                expense: 50.0,
                balance: 50.0
            }
        );

        let empty = period_metrics(&sample(), Period::new(2025, 2).unwrap());
        assert_eq!(empty, PeriodMetrics::default());
    }

    #[test]
    fn test_sum_of_periods_equals_total() {
        let all = sample();
        let sum: f64 = Period::new(2024, 12)
            .unwrap()
            .through(Period::new(2025, 3).unwrap())
            .map(|p| period_metrics(&all, p).balance)
            .sum();
        assert_eq!(sum, total_balance(&all));
    }

    #[test]
    fn test_period_transactions_sorted() {
        let all = sample();
        let txns = period_transactions(&all, Period::new(2025, 1).unwrap());
        assert_eq!(txns.len(), 2);
        assert!(txns[0].date < txns[1].date);
    }

    #[test]
    fn test_years_and_default_period() {
        let all = sample();
        assert_eq!(available_years(&all), vec![2024, 2025]);
        assert_eq!(default_period(&all), Some(Period::new(2025, 3).unwrap()));
        assert_eq!(default_period(&[]), None);
    }
}
