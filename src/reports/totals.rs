//! Income/expense partition shared by the weekly and monthly reports

use serde::Serialize;

use crate::models::{Money, Transaction};

/// Summed expenses for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryAmount {
    /// Category name
    pub category: String,
    /// Sum of absolute expense amounts
    pub amount: Money,
}

/// Running totals over a set of transactions
#[derive(Debug, Clone, Default)]
pub(crate) struct PeriodTotals {
    pub income: Money,
    pub expenses: Money,
    /// Expense totals in first-encountered category order
    pub categories: Vec<CategoryAmount>,
    pub transaction_count: usize,
}

impl PeriodTotals {
    /// Partition transactions by sign
    ///
    /// Positive amounts are income. Everything else, zero included, is an
    /// expense whose absolute value also feeds the per-category totals.
    pub fn accumulate<'a, I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut totals = Self::default();

        for txn in transactions {
            totals.transaction_count += 1;

            if txn.is_income() {
                totals.income += txn.amount;
                continue;
            }

            let spent = txn.amount.abs();
            totals.expenses += spent;

            match totals
                .categories
                .iter_mut()
                .find(|c| c.category == txn.category)
            {
                Some(existing) => existing.amount += spent,
                None => totals.categories.push(CategoryAmount {
                    category: txn.category.clone(),
                    amount: spent,
                }),
            }
        }

        totals
    }

    /// Income minus expenses
    pub fn balance(&self) -> Money {
        self.income - self.expenses
    }
}
