//! Finance dashboard - personal finance reports from a spreadsheet export
//!
//! Loads a transaction spreadsheet, normalizes it into typed transactions and
//! computes the dashboard metrics: all-time balance, per-period income and
//! expense, spending by category, progress against monthly goals and a
//! monthly income/expense series.
//!
//! # Architecture
//!
//! - `config`: Paths and user settings
//! - `error`: Custom error types
//! - `models`: Transactions, periods, goals and raw tables
//! - `parsing`: Amount, date and label normalization
//! - `services`: Spreadsheet reading and the cached transaction loader
//! - `storage`: JSON persistence of monthly goals
//! - `reports`: Pure aggregations over the transaction set
//! - `display`: Terminal rendering
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_dashboard::config::Settings;
//! use finance_dashboard::models::{GoalMap, Period};
//! use finance_dashboard::reports::AggregationEngine;
//! use finance_dashboard::services::TransactionLoader;
//!
//! let settings = Settings::default();
//! let transactions = TransactionLoader::new(&settings).load_file("extrato.xlsx")?;
//! let engine = AggregationEngine::from_settings(&settings);
//! let goals = GoalMap::new(engine.goal_categories());
//! let report = engine.build(&transactions, Period::new(2025, 1)?, &goals);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod parsing;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{DashboardError, DashboardResult};
