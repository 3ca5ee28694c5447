use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use finance_reports::cli::{handle_export_command, handle_report_command, ExportCommands, ReportCommands};
use finance_reports::config::{ReportPaths, Settings};
use finance_reports::display::format_coach_context;
use finance_reports::provider::{DemoProvider, JsonFileProvider, SnapshotProvider};

#[derive(Parser)]
#[command(
    name = "finreport",
    version,
    about = "Weekly and monthly reports for a personal-finance dashboard",
    long_about = "finreport computes weekly and monthly reports from a snapshot of \
                  dashboard data (balances, transactions and savings goals) and \
                  exports it as a paginated document, an XLSX workbook or CSV."
)]
struct Cli {
    /// Snapshot JSON file (defaults to the built-in demo data)
    #[arg(long, global = true, env = "FINREPORT_DATA")]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Weekly and monthly reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export the snapshot to a file
    #[command(subcommand)]
    Export(ExportCommands),

    /// Print the text digest handed to the AI coach
    CoachContext,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "finance_reports=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = ReportPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let provider: Box<dyn SnapshotProvider> = match &cli.data {
        Some(path) => Box::new(JsonFileProvider::new(path)),
        None => Box::new(DemoProvider),
    };

    match cli.command {
        Some(Commands::Report(cmd)) => {
            let snapshot = provider.snapshot()?;
            debug!(source = %provider.describe(), "loaded snapshot");
            handle_report_command(&snapshot, &settings, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            let snapshot = provider.snapshot()?;
            debug!(source = %provider.describe(), "loaded snapshot");
            handle_export_command(&snapshot, &paths, &settings, cmd)?;
        }
        Some(Commands::CoachContext) => {
            let snapshot = provider.snapshot()?;
            print!("{}", format_coach_context(&snapshot, &settings.currency_format()));
        }
        Some(Commands::Config) => {
            // First run: write the defaults out so they can be edited
            if !paths.settings_file().exists() {
                settings.save(&paths)?;
            }

            println!("finreport Configuration");
            println!("=======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Export directory: {}", settings.export_dir(&paths).display());
            println!("Snapshot source:  {}", provider.describe());
            println!();
            println!("Settings:");
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Symbol after:      {}", settings.symbol_after);
            println!("  Decimal separator: {:?}", settings.decimal_separator);
            println!("  Group separator:   {:?}", settings.group_separator);
            println!("  Page lines:        {}", settings.page_lines);
        }
        None => {
            println!("finreport - Period reports for a personal-finance dashboard");
            println!();
            println!("Run 'finreport --help' for usage information.");
            println!("Run 'finreport report monthly' for this month's report.");
        }
    }

    Ok(())
}
