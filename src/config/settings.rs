//! User settings for finance-reports
//!
//! Presentation preferences only: currency rendering, document pagination
//! and where exports land. Nothing here changes how reports are computed.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::paths::ReportPaths;
use crate::display::CurrencyFormat;
use crate::error::ReportError;

/// User settings for finance-reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Whether the symbol follows the amount (`12,00 €`) or precedes it (`$12.00`)
    #[serde(default = "default_symbol_after")]
    pub symbol_after: bool,

    /// Decimal separator
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: String,

    /// Thousands separator
    #[serde(default = "default_group_separator")]
    pub group_separator: String,

    /// Lines per page in the tabular document
    #[serde(default = "default_page_lines")]
    pub page_lines: usize,

    /// Directory exports are written to; the paths' exports dir when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "€".to_string()
}

fn default_symbol_after() -> bool {
    true
}

fn default_decimal_separator() -> String {
    ",".to_string()
}

fn default_group_separator() -> String {
    "\u{202f}".to_string() // narrow no-break space, as fr-FR
}

fn default_page_lines() -> usize {
    60
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            symbol_after: default_symbol_after(),
            decimal_separator: default_decimal_separator(),
            group_separator: default_group_separator(),
            page_lines: default_page_lines(),
            output_dir: None,
        }
    }
}

impl Settings {
    /// Currency format described by these settings
    pub fn currency_format(&self) -> CurrencyFormat {
        CurrencyFormat {
            symbol: self.currency_symbol.clone(),
            symbol_after: self.symbol_after,
            decimal_separator: self.decimal_separator.clone(),
            group_separator: self.group_separator.clone(),
        }
    }

    /// Directory exports should be written to
    pub fn export_dir(&self, paths: &ReportPaths) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| paths.exports_dir())
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &ReportPaths) -> Result<Self, ReportError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| ReportError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ReportError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            if settings.page_lines < 10 {
                return Err(ReportError::Config(format!(
                    "page_lines must be at least 10, got {}",
                    settings.page_lines
                )));
            }

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ReportPaths) -> Result<(), ReportError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ReportError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ReportError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "€");
        assert!(settings.symbol_after);
        assert_eq!(settings.page_lines, 60);
        assert!(settings.output_dir.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReportPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "$".into();
        settings.symbol_after = false;
        settings.page_lines = 40;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReportPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"page_lines": 30}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.page_lines, 30);
        assert_eq!(loaded.currency_symbol, "€");
    }

    #[test]
    fn test_rejects_tiny_pages() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReportPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"page_lines": 2}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ReportError::Config(_)));
    }

    #[test]
    fn test_export_dir_fallback() {
        let paths = ReportPaths::with_base_dir(PathBuf::from("/tmp/finreport"));
        let mut settings = Settings::default();
        assert_eq!(settings.export_dir(&paths), paths.exports_dir());

        settings.output_dir = Some(PathBuf::from("/tmp/elsewhere"));
        assert_eq!(settings.export_dir(&paths), PathBuf::from("/tmp/elsewhere"));
    }
}
