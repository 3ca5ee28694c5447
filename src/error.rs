//! Custom error types for finance-reports
//!
//! This module defines the error hierarchy for the library using thiserror
//! for ergonomic error definitions. Report computation itself never fails;
//! these errors come from loading snapshots, settings and writing exports.

use thiserror::Error;

/// The main error type for finance-reports operations
#[derive(Error, Debug)]
pub enum ReportError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid user input (dates, periods, amounts)
    #[error("Validation error: {0}")]
    Validation(String),

    /// The snapshot provider could not produce a snapshot
    #[error("Snapshot provider error: {0}")]
    Provider(String),

    /// Export serialization errors
    #[error("Export error: {0}")]
    Export(String),
}

impl ReportError {
    /// Create an export error from any displayable cause
    pub fn export(cause: impl std::fmt::Display) -> Self {
        Self::Export(cause.to_string())
    }

    /// Check if this is an export error
    pub fn is_export(&self) -> bool {
        matches!(self, Self::Export(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for finance-reports operations
pub type ReportResult<T> = Result<T, ReportError>;
