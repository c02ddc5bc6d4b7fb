//! Spending by category

use std::collections::BTreeMap;

use crate::models::{Period, Transaction};

/// Expense totals per category within `period`
///
/// Sparse: categories without expense in the period are absent.
pub fn category_spend(all: &[Transaction], period: Period) -> BTreeMap<String, f64> {
    let mut spend: BTreeMap<String, f64> = BTreeMap::new();

    for txn in all
        .iter()
        .filter(|t| t.is_expense() && period.contains(t.date))
    {
        *spend.entry(txn.category.clone()).or_insert(0.0) += txn.amount;
    }

    spend.retain(|_, total| *total > 0.0);
    spend
}

/// Expense total for one category within `period`
pub fn spent_in_category(all: &[Transaction], period: Period, category: &str) -> f64 {
    all.iter()
        .filter(|t| t.is_expense() && t.category == category && period.contains(t.date))
        .map(|t| t.amount)
        .sum()
}

/// Categories ordered by spending, largest first
pub fn top_categories(spend: &BTreeMap<String, f64>, limit: usize) -> Vec<(&str, f64)> {
    let mut ranked: Vec<_> = spend.iter().map(|(c, total)| (c.as_str(), *total)).collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(limit);
    ranked
}
