//! Monthly spending goals per category
//!
//! The map is bound to a fixed, ordered list of categories. Every category in
//! the list always has an entry, and categories outside the list are never
//! stored.

use serde::ser::{Serialize, Serializer};
use std::collections::HashMap;

use crate::error::DashboardError;

/// Monthly goal amount per configured category
#[derive(Debug, Clone, PartialEq)]
pub struct GoalMap {
    entries: Vec<(String, f64)>,
}

impl GoalMap {
    /// Create a map with every category set to zero
    pub fn new<S: AsRef<str>>(categories: &[S]) -> Self {
        Self::from_values(categories, &HashMap::new())
    }

    /// Create a map from stored values
    ///
    /// Missing categories default to zero; unknown keys are ignored, as are
    /// negative or non-finite values.
    pub fn from_values<S: AsRef<str>>(categories: &[S], values: &HashMap<String, f64>) -> Self {
        let mut entries: Vec<(String, f64)> = Vec::with_capacity(categories.len());
        for category in categories {
            let category = category.as_ref();
            if entries.iter().any(|(c, _)| c == category) {
                continue;
            }
            let amount = values
                .get(category)
                .copied()
                .filter(|v| v.is_finite() && *v >= 0.0)
                .unwrap_or(0.0);
            entries.push((category.to_string(), amount));
        }
        Self { entries }
    }

    /// Goal for a category, or `None` if the category is not configured
    pub fn get(&self, category: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, amount)| *amount)
    }

    /// Goal for a category, zero when none is set
    pub fn goal_for(&self, category: &str) -> f64 {
        self.get(category).unwrap_or(0.0)
    }

    /// Set the goal for a configured category
    ///
    /// # Errors
    ///
    /// Fails for categories outside the configured list and for negative or
    /// non-finite amounts. The map is left untouched on error.
    pub fn set(&mut self, category: &str, amount: f64) -> Result<(), DashboardError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(DashboardError::Validation(format!(
                "Goal for '{}' must be a non-negative number, got {}",
                category, amount
            )));
        }

        let entry = self
            .entries
            .iter_mut()
            .find(|(c, _)| c == category)
            .ok_or_else(|| DashboardError::category_not_found(category))?;
        entry.1 = amount;
        Ok(())
    }

    /// Iterate categories and goals in configured order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(c, amount)| (c.as_str(), *amount))
    }

    /// Configured categories, in order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(c, _)| c.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for GoalMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(c, amount)| (c, amount)))
    }
}
