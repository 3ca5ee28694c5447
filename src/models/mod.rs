//! Core data models for finance-reports
//!
//! This module contains the data structures the report engine consumes:
//! money amounts, transactions, savings goals, the dashboard snapshot that
//! bundles them, and the period types reports are computed over.

pub mod goal;
pub mod money;
pub mod period;
pub mod snapshot;
pub mod transaction;

pub use goal::Goal;
pub use money::Money;
pub use period::{week_of_year, MonthPeriod, PeriodKind};
pub use snapshot::FinancialSnapshot;
pub use transaction::Transaction;
