//! Monthly Report
//!
//! Income, expenses and the full category breakdown for one calendar month.
//! Savings and goal progress are snapshot-wide figures: they are NOT
//! restricted to the month, matching what the dashboard shows beside the
//! monthly totals.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, warn};

use super::totals::PeriodTotals;
use crate::display::{report, CurrencyFormat};
use crate::models::{FinancialSnapshot, Money, MonthPeriod};

/// Monthly Report
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReport {
    /// French month name (`février`)
    pub month: String,
    /// 0-based month index
    pub month_index: u32,
    /// Year
    pub year: i32,
    /// Total income in the month
    pub total_income: Money,
    /// Total expenses in the month (positive)
    pub total_expenses: Money,
    /// Income minus expenses
    pub balance: Money,
    /// Savings as a percentage of the total balance (whole snapshot).
    /// 0 when the total balance is zero.
    pub savings_progress: f64,
    /// Completion percentage per goal name (whole snapshot)
    pub goal_progress: BTreeMap<String, f64>,
    /// Summed expenses per category in the month
    pub category_breakdown: BTreeMap<String, Money>,
}

impl MonthlyReport {
    /// Generate the report for a 0-based `month` of `year`
    ///
    /// Missing values fall back to the month and year of `today`. Month
    /// indices past 11 roll over into following years.
    pub fn generate(
        snapshot: &FinancialSnapshot,
        month: Option<u32>,
        year: Option<i32>,
        today: NaiveDate,
    ) -> Self {
        let period = MonthPeriod::new(
            month.unwrap_or_else(|| today.month0()),
            year.unwrap_or_else(|| today.year()),
        );

        let totals = PeriodTotals::accumulate(
            snapshot
                .transactions
                .iter()
                .filter(|txn| period.contains(txn.date)),
        );

        let savings_progress = snapshot
            .savings
            .percent_of(snapshot.total_balance)
            .unwrap_or_else(|| {
                warn!("total balance is zero, reporting savings progress as 0");
                0.0
            });

        // Later goals overwrite earlier ones sharing a name
        let goal_progress = snapshot
            .goals
            .iter()
            .map(|goal| (goal.name.clone(), goal.completion_percent()))
            .collect();

        debug!(
            month = %period,
            transactions = totals.transaction_count,
            "computed monthly report"
        );

        Self {
            month: period.name_fr().to_string(),
            month_index: period.month0(),
            year: period.year(),
            total_income: totals.income,
            total_expenses: totals.expenses,
            balance: totals.balance(),
            savings_progress,
            goal_progress,
            category_breakdown: totals
                .categories
                .into_iter()
                .map(|entry| (entry.category, entry.amount))
                .collect(),
        }
    }

    /// Short label, e.g. `février 2024`
    pub fn headline(&self) -> String {
        format!("{} {}", self.month, self.year)
    }

    /// Category breakdown sorted by amount, highest first
    pub fn categories_by_amount(&self) -> Vec<(&str, Money)> {
        let mut entries: Vec<_> = self
            .category_breakdown
            .iter()
            .map(|(name, amount)| (name.as_str(), *amount))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, fmt: &CurrencyFormat) -> String {
        let mut output = String::new();

        output.push_str(&format!("Rapport mensuel : {}\n", self.headline()));
        output.push_str(&report::double_separator(60));
        output.push('\n');
        output.push_str(&format!("{:<30} {:>20}\n", "Revenus du mois", fmt.format(self.total_income)));
        output.push_str(&format!("{:<30} {:>20}\n", "Dépenses du mois", fmt.format(self.total_expenses)));
        output.push_str(&format!("{:<30} {:>20}\n", "Balance", fmt.format(self.balance)));
        output.push_str(&format!(
            "{:<30} {:>20}\n",
            "Progression épargne",
            report::format_percentage(self.savings_progress)
        ));

        if !self.goal_progress.is_empty() {
            output.push_str("\nProgression des objectifs\n");
            output.push_str(&report::separator(60));
            output.push('\n');
            for (name, progress) in &self.goal_progress {
                output.push_str(&format!(
                    "{:<25} {} {:>7}\n",
                    report::truncate(name, 25),
                    report::format_bar(*progress, 100.0, 20),
                    report::format_percentage(*progress)
                ));
            }
        }

        if !self.category_breakdown.is_empty() {
            output.push_str("\nRépartition des dépenses\n");
            output.push_str(&report::separator(60));
            output.push('\n');
            for (name, amount) in self.categories_by_amount() {
                output.push_str(&format!(
                    "{:<39} {:>20}\n",
                    report::truncate(name, 39),
                    fmt.format(amount)
                ));
            }
        }

        output
    }
}
