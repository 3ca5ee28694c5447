//! Configuration module for finance-reports
//!
//! This module provides configuration management including:
//! - Base directory resolution
//! - User settings persistence
//! - Presentation preferences

pub mod paths;
pub mod settings;

pub use paths::ReportPaths;
pub use settings::Settings;
