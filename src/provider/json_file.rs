//! Snapshot provider backed by a JSON file
//!
//! Accepts both this crate's field names and the dashboard's
//! (`recentTransactions`, `financialGoals`).

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::SnapshotProvider;
use crate::error::{ReportError, ReportResult};
use crate::models::FinancialSnapshot;

/// Reads a snapshot from a JSON file on every call
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    /// Create a provider reading from `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path the snapshot is read from
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotProvider for JsonFileProvider {
    fn snapshot(&self) -> ReportResult<FinancialSnapshot> {
        let path = &self.path;

        if !path.exists() {
            return Err(ReportError::Provider(format!(
                "Snapshot file not found: {}",
                path.display()
            )));
        }

        let file = File::open(path).map_err(|e| {
            ReportError::Provider(format!("Failed to open {}: {}", path.display(), e))
        })?;

        let snapshot: FinancialSnapshot = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| {
                ReportError::Provider(format!("Failed to parse {}: {}", path.display(), e))
            })?;

        debug!(
            path = %path.display(),
            transactions = snapshot.transactions.len(),
            goals = snapshot.goals.len(),
            "loaded snapshot"
        );

        Ok(snapshot)
    }

    fn describe(&self) -> String {
        format!("JSON file {}", self.path.display())
    }
}
