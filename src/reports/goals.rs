//! Progress of monthly goals

use serde::Serialize;

use super::spending::spent_in_category;
use crate::models::{GoalMap, Period, Transaction};

/// How much of a category's monthly goal has been spent
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalProgress {
    pub category: String,
    pub spent: f64,
    pub goal: f64,
    /// `spent / goal`, uncapped; zero when no goal is set
    pub ratio: f64,
    pub exceeded: bool,
}

impl GoalProgress {
    pub fn new(category: impl Into<String>, spent: f64, goal: f64) -> Self {
        // A zero goal means "no goal set", not "always exceeded"
        let ratio = if goal > 0.0 { spent / goal } else { 0.0 };
        Self {
            category: category.into(),
            spent,
            goal,
            ratio,
            exceeded: ratio >= 1.0,
        }
    }

    /// Ratio clamped to `0.0..=1.0`, for progress bars
    pub fn capped_ratio(&self) -> f64 {
        self.ratio.clamp(0.0, 1.0)
    }

    /// Goal left to spend, never negative
    pub fn remaining(&self) -> f64 {
        (self.goal - self.spent).max(0.0)
    }
}

/// Goal progress for each category, in the given order
pub fn goal_progress<S: AsRef<str>>(
    all: &[Transaction],
    period: Period,
    categories: &[S],
    goals: &GoalMap,
) -> Vec<GoalProgress> {
    categories
        .iter()
        .map(|category| {
            let category = category.as_ref();
            GoalProgress::new(
                category,
                spent_in_category(all, period, category),
                goals.goal_for(category),
            )
        })
        .collect()
}
