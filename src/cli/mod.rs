//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the report engine and exporters.

pub mod export;
pub mod report;

pub use export::{handle_export_command, ExportCommands, EXPORT_FAILED_MESSAGE};
pub use report::{handle_report_command, render_report, OutputFormat, ReportCommands};
