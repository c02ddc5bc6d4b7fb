//! Storage layer for the finance dashboard
//!
//! JSON file storage with atomic writes. The only durable state is the goals
//! map; transactions are always rebuilt from the input spreadsheet.

pub mod file_io;
pub mod goals;

pub use file_io::{read_json, read_json_lenient, write_json_atomic};
pub use goals::GoalsStore;

use crate::config::{DashboardPaths, Settings};

/// Build the goals store at its well-known location
pub fn goals_store(paths: &DashboardPaths, settings: &Settings) -> GoalsStore {
    GoalsStore::new(paths.goals_file(), settings.goal_categories.clone())
}
