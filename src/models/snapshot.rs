//! Financial snapshot
//!
//! The dashboard's current view of a user's finances. The engine only reads
//! it; producing and refreshing snapshots belongs to a `SnapshotProvider`.

use serde::{Deserialize, Serialize};

use super::goal::Goal;
use super::money::Money;
use super::transaction::Transaction;

/// Balances, transactions and goals as delivered by the data provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSnapshot {
    /// Total balance across accounts
    pub total_balance: Money,

    /// Typical monthly spending as reported by the provider
    pub monthly_expenses: Money,

    /// Amount held in savings
    pub savings: Money,

    /// Amount held in investments
    pub investments: Money,

    /// Transactions in the order the provider listed them
    #[serde(default, alias = "recentTransactions")]
    pub transactions: Vec<Transaction>,

    /// Savings goals
    #[serde(default, alias = "financialGoals")]
    pub goals: Vec<Goal>,
}

impl FinancialSnapshot {
    /// Create a snapshot with balances and no transactions or goals
    pub fn new(total_balance: Money, monthly_expenses: Money, savings: Money, investments: Money) -> Self {
        Self {
            total_balance,
            monthly_expenses,
            savings,
            investments,
            transactions: Vec::new(),
            goals: Vec::new(),
        }
    }

    /// Builder-style helper to attach transactions
    pub fn with_transactions(mut self, transactions: Vec<Transaction>) -> Self {
        self.transactions = transactions;
        self
    }

    /// Builder-style helper to attach goals
    pub fn with_goals(mut self, goals: Vec<Goal>) -> Self {
        self.goals = goals;
        self
    }
}
