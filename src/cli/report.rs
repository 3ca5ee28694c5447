//! CLI commands for reports
//!
//! Computes weekly and monthly period reports from the loaded snapshot and
//! prints them as text, JSON or YAML.

use clap::{Subcommand, ValueEnum};
use tracing::debug;

use crate::config::Settings;
use crate::error::{ReportError, ReportResult};
use crate::models::FinancialSnapshot;
use crate::reports::{compute_monthly_report, compute_weekly_report, Report};

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal output
    #[default]
    Text,
    /// JSON, with the report's field names
    Json,
    /// YAML, with the report's field names
    Yaml,
}

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Weekly report (defaults to the current week)
    Weekly {
        /// Week of the year (1-53); 0 or absent means the current week
        #[arg(short, long)]
        week: Option<u32>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Monthly report (defaults to the current month)
    Monthly {
        /// 0-based month index (0 = January); values past 11 roll over
        #[arg(short, long)]
        month: Option<u32>,

        /// Year
        #[arg(short, long)]
        year: Option<i32>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

/// Handle report commands
pub fn handle_report_command(
    snapshot: &FinancialSnapshot,
    settings: &Settings,
    cmd: ReportCommands,
) -> ReportResult<()> {
    let (report, format) = match cmd {
        ReportCommands::Weekly { week, format } => (
            Report::Weekly(compute_weekly_report(snapshot, week)),
            format,
        ),
        ReportCommands::Monthly {
            month,
            year,
            format,
        } => (
            Report::Monthly(compute_monthly_report(snapshot, month, year)),
            format,
        ),
    };

    debug!(period = %report.kind(), headline = %report.headline(), "computed report");
    print!("{}", render_report(&report, format, settings)?);

    Ok(())
}

/// Render a report in the requested output format
pub fn render_report(report: &Report, format: OutputFormat, settings: &Settings) -> ReportResult<String> {
    match format {
        OutputFormat::Text => Ok(report.format_terminal(&settings.currency_format())),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(report)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Yaml => serde_yaml::to_string(report)
            .map_err(|e| ReportError::Export(format!("YAML serialization failed: {}", e))),
    }
}
