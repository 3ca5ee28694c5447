//! XLSX workbook export
//!
//! Always three sheets, in order: `Transactions`, `Objectifs`, `Résumé`.
//! The workbook reflects the whole snapshot; it is never period filtered.
//! Each sheet starts with a header row, so an empty snapshot still yields
//! three sheets with zero data rows.

use chrono::NaiveDate;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use tracing::debug;

use super::artifact::{artifact_file_name, ExportArtifact, ExportFormat};
use crate::error::{ReportError, ReportResult};
use crate::models::FinancialSnapshot;

/// Sheet names, in workbook order
pub const SHEET_NAMES: [&str; 3] = ["Transactions", "Objectifs", "Résumé"];

/// Transaction columns, in the field order of the transaction record
pub const TRANSACTION_COLUMNS: [&str; 5] = ["id", "description", "amount", "date", "category"];

/// Goal columns, in the field order of the goal record
pub const GOAL_COLUMNS: [&str; 4] = ["name", "target", "current", "progress"];

/// Header of the summary sheet
pub const SUMMARY_COLUMNS: [&str; 2] = ["Métrique", "Valeur"];

/// Data rows a worksheet can hold below its header row
const MAX_DATA_ROWS: usize = 1_048_575;

/// Export the snapshot as an XLSX workbook
pub fn export_spreadsheet(snapshot: &FinancialSnapshot, today: NaiveDate) -> ReportResult<ExportArtifact> {
    let largest = snapshot.transactions.len().max(snapshot.goals.len());
    if largest > MAX_DATA_ROWS {
        return Err(ReportError::Export(format!(
            "{} rows exceed the worksheet limit of {}",
            largest, MAX_DATA_ROWS
        )));
    }

    let bytes = build_workbook(snapshot).map_err(ReportError::export)?;

    debug!(
        transactions = snapshot.transactions.len(),
        goals = snapshot.goals.len(),
        bytes = bytes.len(),
        "built workbook"
    );

    Ok(ExportArtifact::new(
        artifact_file_name(None, today, ExportFormat::Spreadsheet),
        ExportFormat::Spreadsheet,
        bytes,
    ))
}

fn build_workbook(snapshot: &FinancialSnapshot) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAMES[0])?;
    write_header(sheet, &TRANSACTION_COLUMNS, &bold)?;
    for (index, txn) in snapshot.transactions.iter().enumerate() {
        let row = index as u32 + 1;
        sheet.write_number(row, 0, txn.id as f64)?;
        sheet.write_string(row, 1, txn.description.as_str())?;
        sheet.write_number(row, 2, txn.amount.to_units())?;
        sheet.write_string(row, 3, txn.date.to_string().as_str())?;
        sheet.write_string(row, 4, txn.category.as_str())?;
    }

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAMES[1])?;
    write_header(sheet, &GOAL_COLUMNS, &bold)?;
    for (index, goal) in snapshot.goals.iter().enumerate() {
        let row = index as u32 + 1;
        sheet.write_string(row, 0, goal.name.as_str())?;
        sheet.write_number(row, 1, goal.target.to_units())?;
        sheet.write_number(row, 2, goal.current.to_units())?;
        sheet.write_number(row, 3, goal.rounded_progress() as f64)?;
    }

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAMES[2])?;
    write_header(sheet, &SUMMARY_COLUMNS, &bold)?;
    let summary = [
        ("Solde total", snapshot.total_balance),
        ("Dépenses mensuelles", snapshot.monthly_expenses),
        ("Épargne", snapshot.savings),
        ("Investissements", snapshot.investments),
    ];
    for (index, (metric, value)) in summary.iter().enumerate() {
        let row = index as u32 + 1;
        sheet.write_string(row, 0, *metric)?;
        sheet.write_number(row, 1, value.to_units())?;
    }

    workbook.save_to_buffer()
}

fn write_header(sheet: &mut Worksheet, columns: &[&str], format: &Format) -> Result<(), XlsxError> {
    for (col, name) in columns.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *name, format)?;
    }
    Ok(())
}
