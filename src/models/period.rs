//! Report periods and the dashboard calendar conventions
//!
//! Weeks here are NOT ISO-8601 weeks. The dashboard numbers weeks with
//! `ceil((day_of_year + weekday_of_jan_1) / 7)`, where `day_of_year` is
//! 1-based and the weekday of January 1 counts from Sunday = 0. Week 1 is
//! therefore the (possibly partial) week containing January 1, and each
//! following week starts on a Sunday. Reports must keep this numbering so
//! that week numbers agree with the dashboard.

use chrono::{Datelike, NaiveDate};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// French month names, indexed by 0-based month
const MONTH_NAMES_FR: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// Kind of period a report covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    /// Dashboard week (see module docs)
    Weekly,
    /// Calendar month
    #[default]
    Monthly,
}

impl PeriodKind {
    /// Identifier used in export file names
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    /// French adjective used in document titles
    pub fn label_fr(&self) -> &'static str {
        match self {
            Self::Weekly => "hebdomadaire",
            Self::Monthly => "mensuel",
        }
    }
}

impl fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Week number of `date` under the dashboard convention
pub fn week_of_year(date: NaiveDate) -> u32 {
    let ordinal = date.ordinal();
    let weekday = date.weekday().num_days_from_sunday();
    // Weekday of January 1, walked back from the date's own weekday
    let jan1_weekday = (weekday + 7 - (ordinal - 1) % 7) % 7;
    (ordinal + jan1_weekday + 6) / 7
}

/// A calendar month addressed by a 0-based month index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthPeriod {
    year: i32,
    month0: u32,
}

impl MonthPeriod {
    /// Create a month period
    ///
    /// Indices past 11 roll over into following years, so index 12 of 2024
    /// is January 2025. The year saturates at `i32::MAX`.
    pub fn new(month0: u32, year: i32) -> Self {
        // u32::MAX / 12 fits in an i32
        let carry = (month0 / 12) as i32;
        Self {
            year: year.saturating_add(carry),
            month0: month0 % 12,
        }
    }

    /// Year of the period
    pub fn year(&self) -> i32 {
        self.year
    }

    /// 0-based month index (January = 0)
    pub fn month0(&self) -> u32 {
        self.month0
    }

    /// French month name
    pub fn name_fr(&self) -> &'static str {
        MONTH_NAMES_FR[self.month0 as usize]
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month0
    }
}

impl fmt::Display for MonthPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name_fr(), self.year)
    }
}
