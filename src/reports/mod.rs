//! Reports module for finance-reports
//!
//! The aggregation engine: pure functions from a `FinancialSnapshot` and a
//! period to a weekly or monthly report. Nothing here fails or touches
//! shared state; an empty snapshot simply yields zeroed reports.

pub mod monthly;
mod totals;
pub mod weekly;

use chrono::NaiveDate;
use serde::Serialize;

use crate::display::CurrencyFormat;
use crate::models::{FinancialSnapshot, Money, PeriodKind};

pub use monthly::MonthlyReport;
pub use totals::CategoryAmount;
pub use weekly::{WeeklyReport, TOP_CATEGORY_LIMIT};

/// Today's date in local time
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Weekly report for `week_number`, or the current week when `None`
pub fn compute_weekly_report(snapshot: &FinancialSnapshot, week_number: Option<u32>) -> WeeklyReport {
    compute_weekly_report_on(snapshot, week_number, today())
}

/// Weekly report with an explicit `today`
pub fn compute_weekly_report_on(
    snapshot: &FinancialSnapshot,
    week_number: Option<u32>,
    today: NaiveDate,
) -> WeeklyReport {
    WeeklyReport::generate(snapshot, week_number, today)
}

/// Monthly report for a 0-based `month` of `year`, defaulting to the current month
pub fn compute_monthly_report(
    snapshot: &FinancialSnapshot,
    month: Option<u32>,
    year: Option<i32>,
) -> MonthlyReport {
    compute_monthly_report_on(snapshot, month, year, today())
}

/// Monthly report with an explicit `today`
pub fn compute_monthly_report_on(
    snapshot: &FinancialSnapshot,
    month: Option<u32>,
    year: Option<i32>,
    today: NaiveDate,
) -> MonthlyReport {
    MonthlyReport::generate(snapshot, month, year, today)
}

/// Either kind of period report
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "period", rename_all = "lowercase")]
pub enum Report {
    Weekly(WeeklyReport),
    Monthly(MonthlyReport),
}

impl Report {
    /// Generate the report of `kind` for the period containing `today`
    pub fn generate(snapshot: &FinancialSnapshot, kind: PeriodKind, today: NaiveDate) -> Self {
        match kind {
            PeriodKind::Weekly => Self::Weekly(WeeklyReport::generate(snapshot, None, today)),
            PeriodKind::Monthly => {
                Self::Monthly(MonthlyReport::generate(snapshot, None, None, today))
            }
        }
    }

    /// Period kind of this report
    pub fn kind(&self) -> PeriodKind {
        match self {
            Self::Weekly(_) => PeriodKind::Weekly,
            Self::Monthly(_) => PeriodKind::Monthly,
        }
    }

    /// Short period label
    pub fn headline(&self) -> String {
        match self {
            Self::Weekly(r) => r.headline(),
            Self::Monthly(r) => r.headline(),
        }
    }

    /// Income, expenses and balance of the period
    pub fn totals(&self) -> (Money, Money, Money) {
        match self {
            Self::Weekly(r) => (r.total_income, r.total_expenses, r.balance),
            Self::Monthly(r) => (r.total_income, r.total_expenses, r.balance),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, fmt: &CurrencyFormat) -> String {
        match self {
            Self::Weekly(r) => r.format_terminal(fmt),
            Self::Monthly(r) => r.format_terminal(fmt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Goal, Transaction};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Snapshot with a spread of dates, amounts and categories
    fn varied_snapshot() -> FinancialSnapshot {
        let categories = ["Alimentation", "Loisirs", "Factures", "Transport", "Santé", "Maison", "Revenus"];
        let transactions = (0..60)
            .map(|i: i64| {
                let day = date(2024, 1, 1) + chrono::Duration::days(i * 3);
                let amount = if i % 7 == 0 { 150_000 } else { -(i * 137 % 9000) };
                Transaction::new(i, format!("op {}", i), Money::from_cents(amount), day, categories[(i % 7) as usize])
            })
            .collect();

        FinancialSnapshot::new(
            Money::from_cents(1_000_000),
            Money::from_cents(200_000),
            Money::from_cents(300_000),
            Money::zero(),
        )
        .with_transactions(transactions)
        .with_goals(vec![Goal::new("Voyage", Money::from_cents(50_000), Money::from_cents(12_500))])
    }

    #[test]
    fn test_balance_invariant_for_every_period() {
        let snapshot = varied_snapshot();

        for week in 1..=53 {
            let r = WeeklyReport::generate(&snapshot, Some(week), date(2024, 1, 1));
            assert_eq!(r.balance, r.total_income - r.total_expenses);
            assert!(r.top_expense_categories.len() <= TOP_CATEGORY_LIMIT);
            assert!(r
                .top_expense_categories
                .windows(2)
                .all(|w| w[0].amount >= w[1].amount));
        }

        for month in 0..12 {
            let r = MonthlyReport::generate(&snapshot, Some(month), Some(2024), date(2024, 1, 1));
            assert_eq!(r.balance, r.total_income - r.total_expenses);
            let breakdown_total: Money = r.category_breakdown.values().copied().sum();
            assert_eq!(breakdown_total, r.total_expenses);
        }
    }

    #[test]
    fn test_weeks_partition_the_year() {
        let snapshot = varied_snapshot();
        let weekly_expenses: Money = (1..=53)
            .map(|w| WeeklyReport::generate(&snapshot, Some(w), date(2024, 1, 1)).total_expenses)
            .sum();
        let monthly_expenses: Money = (0..12)
            .map(|m| MonthlyReport::generate(&snapshot, Some(m), Some(2024), date(2024, 1, 1)).total_expenses)
            .sum();

        assert_eq!(weekly_expenses, monthly_expenses);
    }

    #[test]
    fn test_extreme_snapshot_still_reports() {
        let day = date(2024, 2, 20);
        let transactions = vec![
            Transaction::new(1, "a", Money::from_cents(i64::MIN), day, "X"),
            Transaction::new(2, "b", Money::from_cents(i64::MIN), day, "X"),
            Transaction::new(3, "c", Money::from_cents(i64::MAX), day, "Revenus"),
        ];
        let snapshot = FinancialSnapshot::new(
            Money::from_cents(i64::MIN),
            Money::zero(),
            Money::from_cents(i64::MAX),
            Money::zero(),
        )
        .with_transactions(transactions)
        .with_goals(vec![Goal::new("G", Money::from_cents(i64::MIN), Money::from_cents(i64::MAX))]);

        let weekly = compute_weekly_report_on(&snapshot, Some(8), day);
        assert_eq!(weekly.total_expenses.cents(), i64::MAX);
        assert_eq!(weekly.top_expense_categories[0].amount.cents(), i64::MAX);

        let monthly = compute_monthly_report_on(&snapshot, Some(1), Some(2024), day);
        assert_eq!(monthly.total_income.cents(), i64::MAX);
        assert_eq!(monthly.balance.cents(), 0);
        assert!(monthly.savings_progress.is_finite());
    }

    #[test]
    fn test_report_dispatch() {
        let snapshot = varied_snapshot();
        let today = date(2024, 2, 14);

        let weekly = Report::generate(&snapshot, PeriodKind::Weekly, today);
        assert_eq!(weekly.kind(), PeriodKind::Weekly);
        assert_eq!(weekly.headline(), "semaine 7");

        let monthly = Report::generate(&snapshot, PeriodKind::Monthly, today);
        assert_eq!(monthly.kind(), PeriodKind::Monthly);
        assert_eq!(monthly.headline(), "février 2024");

        let (income, expenses, balance) = monthly.totals();
        assert_eq!(balance, income - expenses);
    }

    #[test]
    fn test_report_serializes_with_period_tag() {
        let report = Report::generate(&FinancialSnapshot::default(), PeriodKind::Monthly, date(2024, 2, 1));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["period"], "monthly");
        assert_eq!(json["month"], "février");
        assert_eq!(json["savingsProgress"], 0.0);
    }
}
