//! Savings goal model

use serde::{Deserialize, Serialize};

use super::money::Money;

/// A savings goal tracked on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Display name, also the key in goal progress maps
    pub name: String,

    /// Amount to reach
    pub target: Money,

    /// Amount saved so far
    pub current: Money,

    /// Whole-number percentage supplied by the data provider.
    /// Derived from `current` and `target` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<i64>,
}

impl Goal {
    /// Create a goal, deriving the rounded progress percentage
    pub fn new(name: impl Into<String>, target: Money, current: Money) -> Self {
        let mut goal = Self {
            name: name.into(),
            target,
            current,
            progress: None,
        };
        goal.progress = Some(goal.completion_percent().round() as i64);
        goal
    }

    /// Exact completion percentage, `current / target * 100`
    ///
    /// A zero target yields 0.
    pub fn completion_percent(&self) -> f64 {
        self.current.percent_of(self.target).unwrap_or(0.0)
    }

    /// The provider's rounded percentage, or the derived one when missing
    pub fn rounded_progress(&self) -> i64 {
        self.progress
            .unwrap_or_else(|| self.completion_percent().round() as i64)
    }

    /// Amount still missing to reach the target (never negative)
    pub fn remaining(&self) -> Money {
        let remaining = self.target - self.current;
        if remaining.is_negative() {
            Money::zero()
        } else {
            remaining
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_percent() {
        let goal = Goal::new(
            "Épargne vacances",
            Money::from_cents(300_000),
            Money::from_cents(225_000),
        );
        assert_eq!(goal.completion_percent(), 75.0);
        assert_eq!(goal.rounded_progress(), 75);
    }

    #[test]
    fn test_zero_target() {
        let goal = Goal::new("Vide", Money::zero(), Money::from_cents(1000));
        assert_eq!(goal.completion_percent(), 0.0);
        assert_eq!(goal.rounded_progress(), 0);
    }

    #[test]
    fn test_progress_from_json_or_derived() {
        let with: Goal = serde_json::from_str(
            r#"{"name":"Fond d'urgence","target":10000,"current":4500,"progress":45}"#,
        )
        .unwrap();
        assert_eq!(with.progress, Some(45));

        let without: Goal =
            serde_json::from_str(r#"{"name":"Voiture","target":8000,"current":1000}"#).unwrap();
        assert_eq!(without.progress, None);
        assert_eq!(without.rounded_progress(), 13);
    }

    #[test]
    fn test_remaining() {
        let goal = Goal::new("Voiture", Money::from_cents(800_000), Money::from_cents(100_000));
        assert_eq!(goal.remaining().cents(), 700_000);

        let done = Goal::new("Fait", Money::from_cents(100), Money::from_cents(500));
        assert!(done.remaining().is_zero());
    }
}
