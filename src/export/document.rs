//! Paginated tabular document
//!
//! A printable text report: a headline for the selected period followed by
//! three tables (balances, transactions, goals). The transaction table
//! always lists the whole snapshot, not just the reported period.

use chrono::NaiveDate;
use tabled::{builder::Builder, settings::Style};
use tracing::debug;

use super::artifact::{artifact_file_name, ExportArtifact, ExportFormat};
use crate::config::Settings;
use crate::display::CurrencyFormat;
use crate::error::{ReportError, ReportResult};
use crate::models::{FinancialSnapshot, PeriodKind};
use crate::reports::Report;

/// Page break marker between pages
pub const PAGE_BREAK: char = '\u{c}';

/// Lines each page spends on its own header
const PAGE_HEADER_LINES: usize = 2;

/// Export the tabular document for the current `period_kind` period
pub fn export_tabular_document(
    snapshot: &FinancialSnapshot,
    period_kind: PeriodKind,
    settings: &Settings,
    today: NaiveDate,
) -> ReportResult<ExportArtifact> {
    let report = Report::generate(snapshot, period_kind, today);
    let fmt = settings.currency_format();

    let title = format!("Rapport {} - {}", period_kind.label_fr(), report.headline());
    let body = render_body(snapshot, &report, &fmt, today);
    let document = paginate(&title, &body, settings.page_lines)?;

    debug!(
        period = %period_kind,
        pages = document.matches(PAGE_BREAK).count() + 1,
        "rendered tabular document"
    );

    Ok(ExportArtifact::new(
        artifact_file_name(Some(period_kind), today, ExportFormat::Document),
        ExportFormat::Document,
        document.into_bytes(),
    ))
}

/// Render the unpaginated document body
fn render_body(
    snapshot: &FinancialSnapshot,
    report: &Report,
    fmt: &CurrencyFormat,
    today: NaiveDate,
) -> String {
    let (income, expenses, balance) = report.totals();
    let mut out = String::new();

    out.push_str(&format!("Généré le {}\n\n", today.format("%Y-%m-%d")));
    out.push_str(&format!("Revenus de la période : {}\n", fmt.format(income)));
    out.push_str(&format!("Dépenses de la période : {}\n", fmt.format(expenses)));
    out.push_str(&format!("Balance de la période : {}\n\n", fmt.format(balance)));

    out.push_str("Informations générales\n");
    out.push_str(&table(
        ["Métrique", "Valeur"],
        vec![
            vec!["Solde total".to_string(), fmt.format(snapshot.total_balance)],
            vec!["Épargne".to_string(), fmt.format(snapshot.savings)],
            vec!["Investissements".to_string(), fmt.format(snapshot.investments)],
        ],
    ));
    out.push_str("\n\n");

    out.push_str("Transactions\n");
    out.push_str(&table(
        ["Date", "Description", "Catégorie", "Montant"],
        snapshot
            .transactions
            .iter()
            .map(|txn| {
                vec![
                    txn.date.to_string(),
                    txn.description.clone(),
                    txn.category.clone(),
                    fmt.format(txn.amount),
                ]
            })
            .collect(),
    ));
    out.push_str("\n\n");

    out.push_str("Objectifs financiers\n");
    out.push_str(&table(
        ["Objectif", "Actuel", "Cible", "Progression"],
        snapshot
            .goals
            .iter()
            .map(|goal| {
                vec![
                    goal.name.clone(),
                    fmt.format(goal.current),
                    fmt.format(goal.target),
                    format!("{}%", goal.rounded_progress()),
                ]
            })
            .collect(),
    ));
    out.push('\n');

    out
}

fn table<const N: usize>(head: [&str; N], rows: Vec<Vec<String>>) -> String {
    let mut builder = Builder::default();
    builder.push_record(head.iter().map(|h| h.to_string()));
    for row in rows {
        builder.push_record(row);
    }

    let mut table = builder.build();
    table.with(Style::modern());
    table.to_string()
}

/// Split `body` into pages of `page_lines` lines, each headed with the
/// title and its page number, separated by form feeds
fn paginate(title: &str, body: &str, page_lines: usize) -> ReportResult<String> {
    if page_lines <= PAGE_HEADER_LINES {
        return Err(ReportError::Validation(format!(
            "page_lines must exceed {}, got {}",
            PAGE_HEADER_LINES, page_lines
        )));
    }

    let per_page = page_lines - PAGE_HEADER_LINES;
    let lines: Vec<&str> = body.lines().collect();
    let chunks: Vec<&[&str]> = if lines.is_empty() {
        vec![&[]]
    } else {
        lines.chunks(per_page).collect()
    };
    let total = chunks.len();

    let mut out = String::new();
    for (index, chunk) in chunks.iter().enumerate() {
        if index > 0 {
            out.push(PAGE_BREAK);
        }
        out.push_str(&format!("{}    Page {}/{}\n\n", title, index + 1, total));
        for line in chunk.iter() {
            out.push_str(line);
            out.push('\n');
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Transaction};
    use crate::provider::{DemoProvider, SnapshotProvider};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn render(snapshot: &FinancialSnapshot, kind: PeriodKind, settings: &Settings) -> String {
        let artifact = export_tabular_document(snapshot, kind, settings, date(2024, 2, 20)).unwrap();
        String::from_utf8(artifact.bytes).unwrap()
    }

    #[test]
    fn test_sections_in_order() {
        let snapshot = DemoProvider.snapshot().unwrap();
        let text = render(&snapshot, PeriodKind::Monthly, &Settings::default());

        let general = text.find("Informations générales").unwrap();
        let transactions = text.find("Transactions\n").unwrap();
        let goals = text.find("Objectifs financiers").unwrap();
        assert!(general < transactions && transactions < goals);

        assert!(text.starts_with("Rapport mensuel - février 2024    Page 1/1"));
        assert!(text.contains("Solde total"));
        assert!(text.contains("25\u{202f}430,00\u{a0}€"));
        assert!(text.contains("75%"));
    }

    #[test]
    fn test_transaction_table_is_not_period_filtered() {
        let mut snapshot = DemoProvider.snapshot().unwrap();
        snapshot.transactions.push(Transaction::new(
            5,
            "Vieux loyer",
            Money::from_cents(-90_000),
            date(2019, 5, 1),
            "Logement",
        ));

        let text = render(&snapshot, PeriodKind::Weekly, &Settings::default());

        assert!(text.starts_with("Rapport hebdomadaire - semaine 8"));
        for txn in &snapshot.transactions {
            assert!(text.contains(&txn.description), "missing {}", txn.description);
        }
        // Headline stays period scoped: only the 2024-02-20 expense is in week 8
        assert!(text.contains("Dépenses de la période : 82,50\u{a0}€"));
    }

    #[test]
    fn test_file_name() {
        let artifact = export_tabular_document(
            &FinancialSnapshot::default(),
            PeriodKind::Weekly,
            &Settings::default(),
            date(2024, 2, 20),
        )
        .unwrap();
        assert_eq!(artifact.file_name, "rapport_financier_weekly_2024-02-20.txt");
        assert_eq!(artifact.format, ExportFormat::Document);
    }

    #[test]
    fn test_pagination() {
        let transactions = (0..80)
            .map(|i| Transaction::new(i, format!("Achat {}", i), Money::from_cents(-100), date(2024, 2, 1), "Divers"))
            .collect();
        let snapshot = FinancialSnapshot::default().with_transactions(transactions);
        let settings = Settings {
            page_lines: 30,
            ..Settings::default()
        };

        let text = render(&snapshot, PeriodKind::Monthly, &settings);
        let pages: Vec<&str> = text.split(PAGE_BREAK).collect();

        assert!(pages.len() > 1);
        let total = pages.len();
        for (i, page) in pages.iter().enumerate() {
            assert!(page.lines().count() <= 30);
            assert!(page.starts_with("Rapport mensuel"));
            assert!(page.contains(&format!("Page {}/{}", i + 1, total)));
        }
    }

    #[test]
    fn test_rejects_degenerate_page_size() {
        let settings = Settings {
            page_lines: 2,
            ..Settings::default()
        };
        let err = export_tabular_document(
            &FinancialSnapshot::default(),
            PeriodKind::Monthly,
            &settings,
            date(2024, 2, 20),
        )
        .unwrap_err();
        assert!(err.is_validation());
    }
}
