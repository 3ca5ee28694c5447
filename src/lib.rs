//! finance-reports - Period reports and exports for a personal-finance dashboard
//!
//! This library turns a snapshot of the dashboard's data (balances,
//! transactions and savings goals) into weekly and monthly reports, and
//! serializes the snapshot into downloadable artifacts.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, goals, periods, snapshot)
//! - `provider`: Sources of snapshots (JSON file, built-in demo data)
//! - `reports`: Weekly and monthly aggregation
//! - `display`: Currency formatting and terminal rendering
//! - `export`: Tabular document, XLSX workbook and CSV artifacts
//! - `cli`: Command handlers for the `finreport` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_reports::provider::{DemoProvider, SnapshotProvider};
//! use finance_reports::reports::compute_monthly_report;
//!
//! let snapshot = DemoProvider.snapshot()?;
//! let report = compute_monthly_report(&snapshot, Some(1), Some(2024));
//! assert_eq!(report.month, "février");
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod provider;
pub mod reports;

pub use error::{ReportError, ReportResult};
