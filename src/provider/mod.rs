//! Snapshot providers
//!
//! The report engine never reaches into a global store. Callers obtain a
//! `FinancialSnapshot` from a provider and pass it in explicitly.

pub mod demo;
pub mod json_file;

pub use demo::DemoProvider;
pub use json_file::JsonFileProvider;

use crate::error::ReportResult;
use crate::models::FinancialSnapshot;

/// Synchronous source of the current dashboard snapshot
pub trait SnapshotProvider {
    /// Produce the current snapshot
    fn snapshot(&self) -> ReportResult<FinancialSnapshot>;

    /// Human-readable description of where snapshots come from
    fn describe(&self) -> String;
}
