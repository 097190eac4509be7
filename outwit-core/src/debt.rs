//! Debt records as entered by the user.
//!
//! Balances and minimum payments are kept in integer cents so the payoff
//! engine never touches floating-point money. The only `f64` field is the
//! APR, which feeds the interest formula and nothing else.

use serde::{Deserialize, Serialize};

use crate::error::{OutwitError, Result};
use crate::money::Cents;

/// A single liability tracked by the payoff planner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Debt {
    /// Stable identifier, referenced by schedule entries.
    pub id: String,
    /// Display name ("Chase Visa", "Car loan").
    pub name: String,
    /// Current balance in cents.
    pub balance: Cents,
    /// Annual percentage rate, e.g. `19.99` for 19.99% APR.
    pub interest: f64,
    /// Contractual minimum monthly payment in cents.
    pub min_payment: Cents,
}

impl Debt {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        balance: Cents,
        interest: f64,
        min_payment: Cents,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            balance,
            interest,
            min_payment,
        }
    }

    /// A debt with nothing left to pay. Retired debts keep contributing
    /// their minimum payment to the shared monthly budget.
    pub fn is_retired(&self) -> bool {
        self.balance <= 0
    }

    /// Rejects records the simulation cannot price: negative balances,
    /// negative minimums, and negative or non-finite APRs.
    pub fn validate(&self) -> Result<()> {
        if self.balance < 0 {
            return Err(self.invalid("balance", self.balance.to_string()));
        }
        if self.min_payment < 0 {
            return Err(self.invalid("min_payment", self.min_payment.to_string()));
        }
        if self.interest < 0.0 || !self.interest.is_finite() {
            return Err(self.invalid("interest", self.interest.to_string()));
        }
        Ok(())
    }

    fn invalid(&self, field: &'static str, value: String) -> OutwitError {
        OutwitError::InvalidDebtInput {
            debt_id: self.id.clone(),
            field,
            value,
        }
    }
}
