//! Savings goals and the math behind their progress readouts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::money::Cents;
use crate::time::{first_of_month, month_date, months_until};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SavingsGoal {
    pub id: String,
    pub name: String,
    /// Amount to save, in cents.
    pub target: Cents,
    #[serde(default)]
    pub saved: Cents,
    /// Optional deadline. Drives [`SavingsGoal::monthly_needed`].
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
}

impl SavingsGoal {
    pub fn new(id: impl Into<String>, name: impl Into<String>, target: Cents) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            target,
            saved: 0,
            target_date: None,
        }
    }

    pub fn with_saved(mut self, saved: Cents) -> Self {
        self.saved = saved;
        self
    }

    pub fn with_target_date(mut self, target_date: NaiveDate) -> Self {
        self.target_date = Some(target_date);
        self
    }

    pub fn remaining(&self) -> Cents {
        (self.target - self.saved).max(0)
    }

    pub fn is_reached(&self) -> bool {
        self.saved >= self.target
    }

    /// Progress toward the target, clamped to 0..=100. A goal with no
    /// target to speak of counts as done.
    pub fn progress_percent(&self) -> f64 {
        if self.target <= 0 {
            return 100.0;
        }
        ((self.saved as f64) / (self.target as f64) * 100.0).clamp(0.0, 100.0)
    }

    /// Cents per month to land the goal by its target date, rounding
    /// up so the final month never comes short. `None` without a date.
    /// A date in the past collapses to a single catch-up month.
    pub fn monthly_needed(&self, today: NaiveDate) -> Option<Cents> {
        let target_date = self.target_date?;
        let months = months_until(today, target_date).max(1);
        Some(ceil_div(self.remaining(), months))
    }

    /// First of the month the goal completes at the given contribution
    /// rate. `None` when nothing is being contributed.
    pub fn projected_completion(
        &self,
        today: NaiveDate,
        monthly_contribution: Cents,
    ) -> Option<NaiveDate> {
        if self.is_reached() {
            return Some(first_of_month(today));
        }
        if monthly_contribution <= 0 {
            return None;
        }
        let months = u32::try_from(ceil_div(self.remaining(), monthly_contribution)).ok()?;
        Some(month_date(today, months))
    }
}

fn ceil_div(amount: Cents, parts: i64) -> Cents {
    (amount + parts - 1) / parts
}
