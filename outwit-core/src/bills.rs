//! Recurring bill tracking.
//!
//! Bills carry their own cadence and next due date. Advancing a due
//! date is calendar-aware: monthly and longer cadences clamp to the end
//! of shorter months rather than spilling into the next one.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::money::Cents;
use crate::time::add_months;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillCadence {
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bill {
    pub id: String,
    pub name: String,
    /// Amount due each cycle, in cents.
    pub amount: Cents,
    pub cadence: BillCadence,
    pub next_due: NaiveDate,
    /// Autopay bills are tracked but never alerted on.
    #[serde(default)]
    pub autopay: bool,
}

impl Bill {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        amount: Cents,
        cadence: BillCadence,
        next_due: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            amount,
            cadence,
            next_due,
            autopay: false,
        }
    }

    pub fn with_autopay(mut self, autopay: bool) -> Self {
        self.autopay = autopay;
        self
    }

    /// The due date after this one, per the bill's cadence.
    pub fn advance_due(&self) -> NaiveDate {
        match self.cadence {
            BillCadence::Weekly => self
                .next_due
                .checked_add_days(Days::new(7))
                .unwrap_or(self.next_due),
            BillCadence::Monthly => add_months(self.next_due, 1),
            BillCadence::Quarterly => add_months(self.next_due, 3),
            BillCadence::Yearly => add_months(self.next_due, 12),
        }
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.next_due < today
    }

    /// What this bill costs per month, rounded to the nearest cent.
    pub fn monthly_equivalent(&self) -> Cents {
        match self.cadence {
            BillCadence::Weekly => ((self.amount as f64) * 52.0 / 12.0).round() as Cents,
            BillCadence::Monthly => self.amount,
            BillCadence::Quarterly => ((self.amount as f64) / 3.0).round() as Cents,
            BillCadence::Yearly => ((self.amount as f64) / 12.0).round() as Cents,
        }
    }
}

/// Bills due in the inclusive window `[today, today + days]`, soonest
/// first.
pub fn due_within(bills: &[Bill], today: NaiveDate, days: u64) -> Vec<&Bill> {
    let end = today
        .checked_add_days(Days::new(days))
        .unwrap_or(NaiveDate::MAX);
    let mut due: Vec<&Bill> = bills
        .iter()
        .filter(|b| b.next_due >= today && b.next_due <= end)
        .collect();
    due.sort_by_key(|b| b.next_due);
    due
}

/// Total monthly cost of every bill, with sub-monthly and super-monthly
/// cadences normalized to a monthly figure.
pub fn monthly_commitment(bills: &[Bill]) -> Cents {
    bills.iter().map(|b| b.monthly_equivalent()).sum()
}
