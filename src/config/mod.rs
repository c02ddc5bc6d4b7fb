//! Configuration module for the finance dashboard
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence (goal categories, labels, cache lifetime)

pub mod paths;
pub mod settings;

pub use paths::DashboardPaths;
pub use settings::Settings;
