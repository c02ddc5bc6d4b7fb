//! User settings for the finance dashboard
//!
//! Holds the configuration the core consumes explicitly: the fixed list of goal
//! categories, the canonical type labels, the loader cache lifetime and the
//! currency symbol used for display.

use serde::{Deserialize, Serialize};

use super::paths::DashboardPaths;
use crate::error::DashboardError;
use crate::parsing::normalize;

/// User settings for the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Categories that always appear in the goals report, in display order
    #[serde(default = "default_goal_categories")]
    pub goal_categories: Vec<String>,

    /// How long a parsed spreadsheet stays cached, in seconds
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// Currency symbol shown before formatted amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Type label (canonical form) that marks a row as income
    #[serde(default = "default_income_label")]
    pub income_label: String,

    /// Type label (canonical form) that marks a row as an expense
    #[serde(default = "default_expense_label")]
    pub expense_label: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_goal_categories() -> Vec<String> {
    [
        "Alimentação",
        "Nubank",
        "Transporte",
        "Lazer",
        "Clash of Clans",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_cache_ttl_secs() -> u64 {
    10
}

fn default_currency() -> String {
    "R$".to_string()
}

fn default_income_label() -> String {
    "entrada".to_string()
}

fn default_expense_label() -> String {
    "saida".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            goal_categories: default_goal_categories(),
            cache_ttl_secs: default_cache_ttl_secs(),
            currency_symbol: default_currency(),
            income_label: default_income_label(),
            expense_label: default_expense_label(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &DashboardPaths) -> Result<Self, DashboardError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| DashboardError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            DashboardError::Config(format!("Failed to parse settings file: {}", e))
        })?;

        settings.validated()
    }

    /// Save settings to disk
    pub fn save(&self, paths: &DashboardPaths) -> Result<(), DashboardError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            DashboardError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| DashboardError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Normalize the type labels and reject settings the core cannot work with
    fn validated(mut self) -> Result<Self, DashboardError> {
        self.income_label = normalize(&self.income_label);
        self.expense_label = normalize(&self.expense_label);

        if self.income_label.is_empty() || self.expense_label.is_empty() {
            return Err(DashboardError::Config(
                "income_label and expense_label must not be empty".into(),
            ));
        }
        if self.income_label == self.expense_label {
            return Err(DashboardError::Config(format!(
                "income_label and expense_label are both '{}'",
                self.income_label
            )));
        }

        let mut seen = std::collections::HashSet::new();
        self.goal_categories.retain(|c| seen.insert(c.clone()));

        Ok(self)
    }
}
