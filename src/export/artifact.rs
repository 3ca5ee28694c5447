//! Export artifacts
//!
//! Every exporter returns its output fully in memory as an `ExportArtifact`.
//! Writing to disk is a separate, atomic step, so a failed export never
//! leaves a partial file behind and a failed write can be retried without
//! recomputing anything.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::info;

use crate::error::{ReportError, ReportResult};
use crate::models::PeriodKind;

/// Prefix shared by all export file names
pub const FILE_NAME_PREFIX: &str = "rapport_financier";

/// Output format of an artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Paginated plain-text document with tables
    Document,
    /// XLSX workbook
    Spreadsheet,
    /// CSV transaction ledger
    Csv,
}

impl ExportFormat {
    /// File extension, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Document => "txt",
            Self::Spreadsheet => "xlsx",
            Self::Csv => "csv",
        }
    }
}

/// A generated, downloadable file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    /// Suggested file name
    pub file_name: String,
    /// Output format
    pub format: ExportFormat,
    /// File contents
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    /// Create an artifact
    pub fn new(file_name: impl Into<String>, format: ExportFormat, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            format,
            bytes,
        }
    }

    /// Write the artifact into `dir` under its file name
    ///
    /// The contents go to a temporary sibling first and are renamed into
    /// place, so the destination either holds the complete file or is left
    /// untouched.
    pub fn write_to(&self, dir: &Path) -> ReportResult<PathBuf> {
        fs::create_dir_all(dir).map_err(|e| {
            ReportError::Export(format!("Failed to create directory {}: {}", dir.display(), e))
        })?;

        let path = dir.join(&self.file_name);
        let temp_path = dir.join(format!(".{}.tmp", self.file_name));

        if let Err(err) = write_synced(&temp_path, &self.bytes) {
            let _ = fs::remove_file(&temp_path);
            return Err(err);
        }

        if let Err(e) = fs::rename(&temp_path, &path) {
            let _ = fs::remove_file(&temp_path);
            return Err(ReportError::Export(format!(
                "Failed to move export into place at {}: {}",
                path.display(),
                e
            )));
        }

        info!(path = %path.display(), bytes = self.bytes.len(), "export written");
        Ok(path)
    }
}

fn write_synced(path: &Path, bytes: &[u8]) -> ReportResult<()> {
    let mut file = File::create(path)
        .map_err(|e| ReportError::Export(format!("Failed to create temp file: {}", e)))?;
    file.write_all(bytes)
        .map_err(|e| ReportError::Export(format!("Failed to write export: {}", e)))?;
    file.sync_all()
        .map_err(|e| ReportError::Export(format!("Failed to sync export: {}", e)))?;
    Ok(())
}

/// File name for an export produced on `date`
///
/// `rapport_financier_<period>_<date>.<ext>` when the export is period
/// scoped, `rapport_financier_<date>.<ext>` otherwise.
pub fn artifact_file_name(period: Option<PeriodKind>, date: NaiveDate, format: ExportFormat) -> String {
    match period {
        Some(kind) => format!(
            "{}_{}_{}.{}",
            FILE_NAME_PREFIX,
            kind.as_str(),
            date.format("%Y-%m-%d"),
            format.extension()
        ),
        None => format!(
            "{}_{}.{}",
            FILE_NAME_PREFIX,
            date.format("%Y-%m-%d"),
            format.extension()
        ),
    }
}
