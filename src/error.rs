//! Custom error types for the finance dashboard
//!
//! Per-cell and per-row problems in the input never become errors; they are
//! absorbed by the loader. Only structural load failures, persistence failures
//! and invalid user edits surface through this type.

use thiserror::Error;

/// The main error type for dashboard operations
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid user input (goal edits, period strings)
    #[error("Validation error: {0}")]
    Validation(String),

    /// The input table could not be read as tabular data
    #[error("Failed to load spreadsheet: {0}")]
    Load(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },
}

impl DashboardError {
    /// Create a "not found" error for goal categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a fatal load error
    pub fn is_load(&self) -> bool {
        matches!(self, Self::Load(_))
    }
}

impl From<std::io::Error> for DashboardError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for DashboardError {
    fn from(err: csv::Error) -> Self {
        Self::Load(err.to_string())
    }
}

impl From<calamine::Error> for DashboardError {
    fn from(err: calamine::Error) -> Self {
        Self::Load(err.to_string())
    }
}

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;
