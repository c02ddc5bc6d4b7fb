//! Aggregation over the loaded transactions
//!
//! Every report is a pure function of the transaction slice and its
//! parameters. `AggregationEngine` bundles them with the configured goal
//! categories so callers do not have to thread that list through.

pub mod goals;
pub mod monthly;
pub mod spending;
pub mod summary;

pub use goals::GoalProgress;
pub use monthly::MonthlyPoint;
pub use summary::PeriodMetrics;

use serde::Serialize;
use std::collections::BTreeMap;

use crate::config::Settings;
use crate::models::{GoalMap, Period, Transaction};

/// Computes dashboard metrics for a fixed set of goal categories
#[derive(Debug, Clone)]
pub struct AggregationEngine {
    goal_categories: Vec<String>,
}

impl AggregationEngine {
    pub fn new(goal_categories: Vec<String>) -> Self {
        Self { goal_categories }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.goal_categories.clone())
    }

    pub fn goal_categories(&self) -> &[String] {
        &self.goal_categories
    }

    /// All-time balance, regardless of period
    pub fn total_balance(&self, all: &[Transaction]) -> f64 {
        summary::total_balance(all)
    }

    pub fn period_metrics(&self, all: &[Transaction], period: Period) -> PeriodMetrics {
        summary::period_metrics(all, period)
    }

    pub fn category_spend(&self, all: &[Transaction], period: Period) -> BTreeMap<String, f64> {
        spending::category_spend(all, period)
    }

    pub fn goal_progress(
        &self,
        all: &[Transaction],
        period: Period,
        goals: &GoalMap,
    ) -> Vec<GoalProgress> {
        goals::goal_progress(all, period, &self.goal_categories, goals)
    }

    /// Monthly totals over the whole collection, regardless of period
    pub fn monthly_series(&self, all: &[Transaction]) -> Vec<MonthlyPoint> {
        monthly::monthly_series(all)
    }

    /// Compute every metric for one period
    pub fn build(&self, all: &[Transaction], period: Period, goals: &GoalMap) -> DashboardReport {
        DashboardReport {
            period,
            total_balance: self.total_balance(all),
            metrics: self.period_metrics(all, period),
            category_spend: self.category_spend(all, period),
            goal_progress: self.goal_progress(all, period, goals),
            monthly: self.monthly_series(all),
            transactions: summary::period_transactions(all, period)
                .into_iter()
                .cloned()
                .collect(),
        }
    }
}

/// Every metric the dashboard shows for one period
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    pub period: Period,
    pub total_balance: f64,
    pub metrics: PeriodMetrics,
    pub category_spend: BTreeMap<String, f64>,
    pub goal_progress: Vec<GoalProgress>,
    pub monthly: Vec<MonthlyPoint>,
    /// The period's transactions, sorted by date
    pub transactions: Vec<Transaction>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;
    use chrono::NaiveDate;

    fn engine() -> AggregationEngine {
        AggregationEngine::new(vec!["Lazer".into(), "Nubank".into()])
    }

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction::new(
                NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
                "Lazer",
                TransactionKind::Income,
                100.0,
                "x",
            ),
            Transaction::new(
                NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
                "Lazer",
                TransactionKind::Expense,
                50.0,
                "y",
            ),
        ]
    }

    #[test]
    fn test_end_to_end_metrics() {
        let engine = engine();
        let all = sample();
        let jan = Period::new(2025, 1).unwrap();

        assert_eq!(
            engine.period_metrics(&all, jan),
            PeriodMetrics {
                income: 100.0,
                expense: 50.0,
                balance: 50.0
            }
        );

        let spend = engine.category_spend(&all, jan);
        assert_eq!(spend.len(), 1);
        assert_eq!(spend["Lazer"], 50.0);
    }

    #[test]
    fn test_goal_progress_uses_configured_categories() {
        let engine = engine();
        let mut goals = GoalMap::new(engine.goal_categories());
        goals.set("Lazer", 200.0).unwrap();

        let progress = engine.goal_progress(&sample(), Period::new(2025, 1).unwrap(), &goals);
        let categories: Vec<_> = progress.iter().map(|p| p.category.as_str()).collect();
        assert_eq!(categories, vec!["Lazer", "Nubank"]);
        assert_eq!(progress[0].ratio, 0.25);
    }

    #[test]
    fn test_build_report() {
        let engine = engine();
        let goals = GoalMap::new(engine.goal_categories());
        let report = engine.build(&sample(), Period::new(2025, 1).unwrap(), &goals);

        assert_eq!(report.total_balance, 50.0);
        assert_eq!(report.metrics.balance, 50.0);
        assert_eq!(report.goal_progress.len(), 2);
        assert_eq!(report.monthly.len(), 2);
        assert_eq!(report.transactions.len(), 2);
    }

    #[test]
    fn test_period_outside_data_is_empty_but_totals_remain() {
        let engine = engine();
        let goals = GoalMap::new(engine.goal_categories());
        let report = engine.build(&sample(), Period::new(2030, 6).unwrap(), &goals);

        assert_eq!(report.metrics, PeriodMetrics::default());
        assert!(report.category_spend.is_empty());
        assert!(report.transactions.is_empty());
        assert_eq!(report.total_balance, 50.0);
        assert_eq!(report.monthly.len(), 2);
    }
}
