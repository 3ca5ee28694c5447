//! Transaction model
//!
//! A single dated movement of money as delivered by the dashboard data
//! provider. Positive amounts are income; zero and negative amounts are
//! expenses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Identifier assigned by the data provider
    pub id: i64,

    /// Free-text description (merchant, payer)
    pub description: String,

    /// Signed amount: positive for income, negative for expense
    pub amount: Money,

    /// Booking date
    pub date: NaiveDate,

    /// Spending or income category
    pub category: String,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        id: i64,
        description: impl Into<String>,
        amount: Money,
        date: NaiveDate,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
            date,
            category: category.into(),
        }
    }

    /// Check if this transaction counts as income
    pub fn is_income(&self) -> bool {
        self.amount.is_positive()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date, self.description, self.amount, self.category
        )
    }
}
