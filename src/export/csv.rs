//! CSV Export functionality
//!
//! Exports the snapshot's transaction ledger to CSV, with the same columns
//! as the workbook's `Transactions` sheet.

use chrono::NaiveDate;
use std::io::Write;

use super::artifact::{ExportArtifact, ExportFormat, FILE_NAME_PREFIX};
use super::spreadsheet::TRANSACTION_COLUMNS;
use crate::error::{ReportError, ReportResult};
use crate::models::FinancialSnapshot;

/// Export all transactions to CSV
pub fn export_transactions_csv<W: Write>(snapshot: &FinancialSnapshot, writer: W) -> ReportResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(TRANSACTION_COLUMNS)
        .map_err(ReportError::export)?;

    for txn in &snapshot.transactions {
        csv_writer
            .write_record([
                txn.id.to_string(),
                txn.description.clone(),
                txn.amount.to_string(),
                txn.date.to_string(),
                txn.category.clone(),
            ])
            .map_err(ReportError::export)?;
    }

    csv_writer.flush().map_err(ReportError::export)?;
    Ok(())
}

/// The CSV ledger as a downloadable artifact
pub fn transactions_csv_artifact(snapshot: &FinancialSnapshot, today: NaiveDate) -> ReportResult<ExportArtifact> {
    let mut bytes = Vec::new();
    export_transactions_csv(snapshot, &mut bytes)?;

    Ok(ExportArtifact::new(
        format!(
            "{}_transactions_{}.{}",
            FILE_NAME_PREFIX,
            today.format("%Y-%m-%d"),
            ExportFormat::Csv.extension()
        ),
        ExportFormat::Csv,
        bytes,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Transaction};
    use crate::provider::{DemoProvider, SnapshotProvider};

    #[test]
    fn test_export_transactions_csv() {
        let snapshot = DemoProvider.snapshot().unwrap();

        let mut output = Vec::new();
        export_transactions_csv(&snapshot, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("id,description,amount,date,category"));
        assert_eq!(lines.next(), Some("1,Supermarché,-82.50,2024-02-20,Alimentation"));
        assert_eq!(text.lines().count(), snapshot.transactions.len() + 1);
    }

    #[test]
    fn test_quotes_fields_with_commas() {
        let snapshot = FinancialSnapshot::default().with_transactions(vec![Transaction::new(
            9,
            "Restaurant, dîner",
            Money::from_cents(-4500),
            NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
            "Loisirs",
        )]);

        let mut output = Vec::new();
        export_transactions_csv(&snapshot, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.contains("\"Restaurant, dîner\""));
    }

    #[test]
    fn test_artifact_name() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 20).unwrap();
        let artifact = transactions_csv_artifact(&FinancialSnapshot::default(), today).unwrap();

        assert_eq!(artifact.file_name, "rapport_financier_transactions_2024-02-20.csv");
        assert_eq!(
            String::from_utf8(artifact.bytes).unwrap(),
            "id,description,amount,date,category\n"
        );
    }
}
