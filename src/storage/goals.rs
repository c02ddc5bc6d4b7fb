//! Goal repository for JSON storage
//!
//! The goals file is a single JSON object mapping category name to monthly
//! goal. Loading never fails: a missing or corrupt file yields zero goals for
//! every configured category. Saving always reports failures.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::DashboardError;
use crate::models::GoalMap;

use super::file_io::{read_json_lenient, write_json_atomic};

pub struct GoalsStore {
    path: PathBuf,
    categories: Vec<String>,
}

impl GoalsStore {
    /// Create a store for the given file and fixed category list
    pub fn new(path: PathBuf, categories: Vec<String>) -> Self {
        Self { path, categories }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Load goals, filling every configured category
    pub fn load(&self) -> GoalMap {
        let raw: Value = read_json_lenient(&self.path);

        let values = match raw {
            Value::Object(map) => map
                .into_iter()
                .filter_map(|(category, value)| goal_value(&value).map(|v| (category, v)))
                .collect::<HashMap<_, _>>(),
            Value::Null => HashMap::new(),
            other => {
                warn!(
                    path = %self.path.display(),
                    found = json_type(&other),
                    "Goals file is not a JSON object, using defaults"
                );
                HashMap::new()
            }
        };

        let goals = GoalMap::from_values(&self.categories, &values);
        debug!(path = %self.path.display(), categories = goals.len(), "Loaded goals");
        goals
    }

    /// Write the full map back to disk, replacing previous content
    pub fn save(&self, goals: &GoalMap) -> Result<(), DashboardError> {
        write_json_atomic(&self.path, goals)?;
        info!(path = %self.path.display(), "Saved goals");
        Ok(())
    }

    /// Update one goal and persist immediately
    ///
    /// The in-memory map keeps the new value even if the save fails, so the
    /// caller can retry; the error is always returned.
    pub fn set_goal(
        &self,
        goals: &mut GoalMap,
        category: &str,
        amount: f64,
    ) -> Result<(), DashboardError> {
        goals.set(category, amount)?;
        self.save(goals)
    }
}

fn goal_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
