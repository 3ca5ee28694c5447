//! Export module for finance-reports
//!
//! Turns a snapshot (and the period report computed from it) into
//! downloadable artifacts:
//! - Document: paginated text report with tables
//! - Spreadsheet: XLSX workbook with transactions, goals and a summary
//! - CSV: the transaction ledger
//!
//! Exporters build the whole artifact in memory and may fail; computing the
//! report itself cannot, so a failed export can simply be retried.

pub mod artifact;
pub mod csv;
pub mod document;
pub mod spreadsheet;

pub use artifact::{artifact_file_name, ExportArtifact, ExportFormat};
pub use csv::{export_transactions_csv, transactions_csv_artifact};
pub use document::export_tabular_document;
pub use spreadsheet::{export_spreadsheet, SHEET_NAMES};
