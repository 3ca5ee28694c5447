//! Path management for finance-reports
//!
//! ## Path Resolution Order
//!
//! 1. `FINREPORT_HOME` environment variable (if set)
//! 2. The platform configuration directory reported by `directories`
//!    (`~/.config/finance-reports` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::ReportError;

/// Environment variable overriding the base directory
pub const HOME_ENV_VAR: &str = "FINREPORT_HOME";

/// Manages all paths used by finance-reports
#[derive(Debug, Clone)]
pub struct ReportPaths {
    /// Base directory for settings and default exports
    base_dir: PathBuf,
}

impl ReportPaths {
    /// Create a new ReportPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, ReportError> {
        let base_dir = if let Ok(custom) = std::env::var(HOME_ENV_VAR) {
            PathBuf::from(custom)
        } else {
            ProjectDirs::from("", "", "finance-reports")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    ReportError::Config("Could not determine a configuration directory".into())
                })?
        };

        Ok(Self { base_dir })
    }

    /// Create ReportPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("settings.json")
    }

    /// Get the default directory export artifacts are written to
    pub fn exports_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Ensure the base and exports directories exist
    pub fn ensure_directories(&self) -> Result<(), ReportError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ReportError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.exports_dir())
            .map_err(|e| ReportError::Io(format!("Failed to create exports directory: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReportPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("settings.json"));
        assert_eq!(paths.exports_dir(), temp_dir.path().join("exports"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReportPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.exports_dir().exists());
    }
}
