//! Built-in demo snapshot
//!
//! The sample data the dashboard ships with before any bank account is
//! linked. Used when no snapshot file is given.

use chrono::NaiveDate;

use super::SnapshotProvider;
use crate::error::{ReportError, ReportResult};
use crate::models::{FinancialSnapshot, Goal, Money, Transaction};

/// Provider returning the dashboard's sample data
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoProvider;

impl SnapshotProvider for DemoProvider {
    fn snapshot(&self) -> ReportResult<FinancialSnapshot> {
        let date = |y: i32, m: u32, d: u32| {
            NaiveDate::from_ymd_opt(y, m, d)
                .ok_or_else(|| ReportError::Provider(format!("invalid demo date {}-{}-{}", y, m, d)))
        };

        let transactions = vec![
            Transaction::new(1, "Supermarché", Money::from_cents(-8250), date(2024, 2, 20)?, "Alimentation"),
            Transaction::new(2, "Salaire", Money::from_cents(280_000), date(2024, 2, 15)?, "Revenus"),
            Transaction::new(3, "Netflix", Money::from_cents(-1799), date(2024, 2, 14)?, "Loisirs"),
            Transaction::new(4, "EDF", Money::from_cents(-7530), date(2024, 2, 10)?, "Factures"),
        ];

        let goals = vec![
            Goal::new("Épargne vacances", Money::from_cents(300_000), Money::from_cents(225_000)),
            Goal::new("Fond d'urgence", Money::from_cents(1_000_000), Money::from_cents(450_000)),
        ];

        Ok(FinancialSnapshot::new(
            Money::from_cents(2_543_000),
            Money::from_cents(215_000),
            Money::from_cents(832_000),
            Money::from_cents(1_500_000),
        )
        .with_transactions(transactions)
        .with_goals(goals))
    }

    fn describe(&self) -> String {
        "built-in demo data".to_string()
    }
}
