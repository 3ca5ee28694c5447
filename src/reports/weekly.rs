//! Weekly Report
//!
//! Income, expenses and the top spending categories for one dashboard week
//! (see `models::period` for the week numbering).

use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use tracing::debug;

use super::totals::{CategoryAmount, PeriodTotals};
use crate::display::{report, CurrencyFormat};
use crate::models::{week_of_year, FinancialSnapshot, Money};

/// Maximum number of categories listed in a weekly report
pub const TOP_CATEGORY_LIMIT: usize = 5;

/// Weekly Report
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyReport {
    /// Week number the report covers
    pub week_number: u32,
    /// Date of the first matching transaction in snapshot order
    #[serde(serialize_with = "date_or_empty")]
    pub start_date: Option<NaiveDate>,
    /// Date of the last matching transaction in snapshot order
    #[serde(serialize_with = "date_or_empty")]
    pub end_date: Option<NaiveDate>,
    /// Total income
    pub total_income: Money,
    /// Total expenses (positive)
    pub total_expenses: Money,
    /// Income minus expenses
    pub balance: Money,
    /// Highest-spending categories, descending, at most five
    pub top_expense_categories: Vec<CategoryAmount>,
}

impl WeeklyReport {
    /// Generate the report for `week_number`, or for the week of `today`
    /// when no week (or week 0) is given
    ///
    /// Only the week number is compared, so a week matches in every year
    /// present in the snapshot.
    pub fn generate(snapshot: &FinancialSnapshot, week_number: Option<u32>, today: NaiveDate) -> Self {
        let week_number = match week_number {
            Some(week) if week > 0 => week,
            _ => week_of_year(today),
        };

        let in_week: Vec<_> = snapshot
            .transactions
            .iter()
            .filter(|txn| week_of_year(txn.date) == week_number)
            .collect();

        let totals = PeriodTotals::accumulate(in_week.iter().copied());
        let balance = totals.balance();

        let mut top_expense_categories = totals.categories;
        // Stable sort: ties keep first-encountered order
        top_expense_categories.sort_by(|a, b| b.amount.cmp(&a.amount));
        top_expense_categories.truncate(TOP_CATEGORY_LIMIT);

        debug!(
            week_number,
            transactions = totals.transaction_count,
            "computed weekly report"
        );

        Self {
            week_number,
            start_date: in_week.first().map(|txn| txn.date),
            end_date: in_week.last().map(|txn| txn.date),
            total_income: totals.income,
            total_expenses: totals.expenses,
            balance,
            top_expense_categories,
        }
    }

    /// Short label, e.g. `semaine 7`
    pub fn headline(&self) -> String {
        format!("semaine {}", self.week_number)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, fmt: &CurrencyFormat) -> String {
        let mut output = String::new();

        output.push_str(&format!("Rapport hebdomadaire : {}\n", self.headline()));
        output.push_str(&report::double_separator(50));
        output.push('\n');

        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => {
                output.push_str(&format!("Du {} au {}\n\n", start, end));
            }
            _ => output.push_str("Aucune transaction cette semaine\n\n"),
        }

        output.push_str(&format!("{:<20} {:>20}\n", "Revenus", fmt.format(self.total_income)));
        output.push_str(&format!("{:<20} {:>20}\n", "Dépenses", fmt.format(self.total_expenses)));
        output.push_str(&format!("{:<20} {:>20}\n", "Balance", fmt.format(self.balance)));

        if !self.top_expense_categories.is_empty() {
            output.push_str("\nTop 5 des dépenses par catégorie\n");
            output.push_str(&report::separator(50));
            output.push('\n');
            for entry in &self.top_expense_categories {
                output.push_str(&format!(
                    "{:<29} {:>20}\n",
                    report::truncate(&entry.category, 29),
                    fmt.format(entry.amount)
                ));
            }
        }

        output
    }
}

fn date_or_empty<S: Serializer>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error> {
    match date {
        Some(date) => serializer.collect_str(date),
        None => serializer.serialize_str(""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Transaction;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn txn(id: i64, amount: i64, on: NaiveDate, category: &str) -> Transaction {
        Transaction::new(id, format!("txn {}", id), Money::from_cents(amount), on, category)
    }

    fn dashboard_snapshot() -> FinancialSnapshot {
        FinancialSnapshot::default().with_transactions(vec![
            txn(1, -8250, date(2024, 2, 20), "Alimentation"),
            txn(2, 280_000, date(2024, 2, 15), "Revenus"),
            txn(3, -1799, date(2024, 2, 14), "Loisirs"),
            txn(4, -7530, date(2024, 2, 10), "Factures"),
        ])
    }

    #[test]
    fn test_week_seven() {
        let report = WeeklyReport::generate(&dashboard_snapshot(), Some(7), date(2024, 3, 1));

        assert_eq!(report.week_number, 7);
        assert_eq!(report.total_income.cents(), 280_000);
        assert_eq!(report.total_expenses.cents(), 1799);
        assert_eq!(report.balance.cents(), 278_201);
        // List order, not chronological order
        assert_eq!(report.start_date, Some(date(2024, 2, 15)));
        assert_eq!(report.end_date, Some(date(2024, 2, 14)));
        assert_eq!(report.top_expense_categories.len(), 1);
        assert_eq!(report.top_expense_categories[0].category, "Loisirs");
    }

    #[test]
    fn test_defaults_to_week_of_today() {
        let snapshot = dashboard_snapshot();
        let today = date(2024, 2, 20);

        let implicit = WeeklyReport::generate(&snapshot, None, today);
        let zero = WeeklyReport::generate(&snapshot, Some(0), today);

        assert_eq!(implicit.week_number, 8);
        assert_eq!(implicit.total_expenses.cents(), 8250);
        assert_eq!(zero, implicit);
    }

    #[test]
    fn test_empty_snapshot_is_zeroed() {
        let report = WeeklyReport::generate(&FinancialSnapshot::default(), Some(3), date(2024, 1, 1));

        assert!(report.total_income.is_zero());
        assert!(report.total_expenses.is_zero());
        assert!(report.balance.is_zero());
        assert!(report.top_expense_categories.is_empty());
        assert_eq!(report.start_date, None);
        assert_eq!(report.end_date, None);
    }

    #[test]
    fn test_top_categories_capped_and_descending() {
        let day = date(2024, 2, 14);
        let transactions = (0..8)
            .map(|i| txn(i, -((i % 4) + 1) * 1000, day, &format!("Cat{}", i)))
            .collect();
        let snapshot = FinancialSnapshot::default().with_transactions(transactions);

        let report = WeeklyReport::generate(&snapshot, Some(7), day);
        let amounts: Vec<_> = report
            .top_expense_categories
            .iter()
            .map(|c| c.amount.cents())
            .collect();

        assert_eq!(amounts.len(), TOP_CATEGORY_LIMIT);
        assert!(amounts.windows(2).all(|w| w[0] >= w[1]));
        // Ties resolved by first appearance: Cat3 before Cat7, Cat2 before Cat6
        let names: Vec<_> = report
            .top_expense_categories
            .iter()
            .map(|c| c.category.as_str())
            .collect();
        assert_eq!(names, ["Cat3", "Cat7", "Cat2", "Cat6", "Cat1"]);
    }

    #[test]
    fn test_week_matches_across_years() {
        let snapshot = FinancialSnapshot::default().with_transactions(vec![
            txn(1, -1000, date(2023, 2, 14), "Loisirs"),
            txn(2, -2000, date(2024, 2, 14), "Loisirs"),
        ]);
        assert_eq!(week_of_year(date(2023, 2, 14)), 7);

        let report = WeeklyReport::generate(&snapshot, Some(7), date(2024, 2, 14));
        assert_eq!(report.total_expenses.cents(), 3000);
    }

    #[test]
    fn test_serializes_missing_dates_as_empty_strings() {
        let report = WeeklyReport::generate(&FinancialSnapshot::default(), Some(1), date(2024, 1, 1));
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["startDate"], "");
        assert_eq!(json["endDate"], "");
        assert_eq!(json["weekNumber"], 1);
        assert_eq!(json["topExpenseCategories"], serde_json::json!([]));
    }

    #[test]
    fn test_format_terminal() {
        let report = WeeklyReport::generate(&dashboard_snapshot(), Some(7), date(2024, 3, 1));
        let text = report.format_terminal(&CurrencyFormat::us_dollar());

        assert!(text.contains("Rapport hebdomadaire : semaine 7"));
        assert!(text.contains("Du 2024-02-15 au 2024-02-14"));
        assert!(text.contains("$2,800.00"));
        assert!(text.contains("Loisirs"));
    }
}
