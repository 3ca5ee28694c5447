//! CLI commands for data export
//!
//! Builds the tabular document, the workbook or the CSV ledger and writes
//! it to disk. Any failure while building or writing is reported with one
//! generic message; the details go to the log.

use std::path::{Path, PathBuf};

use clap::Subcommand;
use tracing::error;

use crate::config::{ReportPaths, Settings};
use crate::error::{ReportError, ReportResult};
use crate::export;
use crate::models::{FinancialSnapshot, PeriodKind};
use crate::reports::today;

/// Message shown for any failed export
pub const EXPORT_FAILED_MESSAGE: &str = "L'export a échoué. Veuillez réessayer.";

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export the paginated tabular document for the current period
    Document {
        /// Period the headline figures cover
        #[arg(short, long, value_enum, default_value = "monthly")]
        period: PeriodKind,

        /// Output directory (defaults to the configured export directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the XLSX workbook (transactions, goals, summary)
    Spreadsheet {
        /// Output directory (defaults to the configured export directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export transactions to a CSV file
    Csv {
        /// Output file path
        output: PathBuf,
    },
}

/// Handle export commands
pub fn handle_export_command(
    snapshot: &FinancialSnapshot,
    paths: &ReportPaths,
    settings: &Settings,
    cmd: ExportCommands,
) -> ReportResult<()> {
    let today = today();

    let result = match cmd {
        ExportCommands::Document { period, output } => {
            let dir = output.unwrap_or_else(|| settings.export_dir(paths));
            export::export_tabular_document(snapshot, period, settings, today)
                .and_then(|artifact| artifact.write_to(&dir))
        }
        ExportCommands::Spreadsheet { output } => {
            let dir = output.unwrap_or_else(|| settings.export_dir(paths));
            export::export_spreadsheet(snapshot, today)
                .and_then(|artifact| artifact.write_to(&dir))
        }
        ExportCommands::Csv { output } => export_csv_file(snapshot, &output),
    };

    match result {
        Ok(path) => {
            println!("Export enregistré : {}", path.display());
            Ok(())
        }
        Err(err) => {
            error!(error = %err, "export failed");
            Err(ReportError::Export(EXPORT_FAILED_MESSAGE.to_string()))
        }
    }
}

/// Write the CSV ledger to an explicit file path
fn export_csv_file(snapshot: &FinancialSnapshot, output: &Path) -> ReportResult<PathBuf> {
    let file_name = output
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| {
            ReportError::Validation(format!("Not a file path: {}", output.display()))
        })?;
    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut artifact = export::transactions_csv_artifact(snapshot, today())?;
    artifact.file_name = file_name;
    artifact.write_to(&dir)
}
