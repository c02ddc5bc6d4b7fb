//! Path management for the finance dashboard
//!
//! ## Path Resolution Order
//!
//! 1. `FINANCE_DASHBOARD_DIR` environment variable (if set)
//! 2. The platform configuration directory reported by `directories`
//!    (e.g. `~/.config/finance-dashboard` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::DashboardError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "FINANCE_DASHBOARD_DIR";

/// Manages all paths used by the dashboard
#[derive(Debug, Clone)]
pub struct DashboardPaths {
    base_dir: PathBuf,
}

impl DashboardPaths {
    /// Create a new DashboardPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no override
    /// is set.
    pub fn new() -> Result<Self, DashboardError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create DashboardPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the goals file
    pub fn goals_file(&self) -> PathBuf {
        self.base_dir.join("goals.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), DashboardError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| DashboardError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if the dashboard has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, DashboardError> {
    ProjectDirs::from("", "", "finance-dashboard")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| DashboardError::Config("Could not determine home directory".into()))
}
