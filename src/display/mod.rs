//! Display formatting for terminal output and exports
//!
//! Provides locale-aware currency rendering and small text helpers. Report
//! values stay numeric until they pass through this module.

pub mod coach;
pub mod currency;
pub mod report;

pub use coach::format_coach_context;
pub use currency::CurrencyFormat;
pub use report::{format_bar, format_percentage};
