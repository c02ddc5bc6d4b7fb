//! CLI command handlers
//!
//! Bridges clap argument parsing with the loader, the aggregation engine and
//! the goals store.

pub mod goal;
pub mod report;

pub use goal::{handle_goal_command, GoalCommands};
pub use report::{handle_report_command, ReportArgs};
