//! Envelope budgeting.
//!
//! Implements the zero-based model: income sits unassigned until it is
//! given a job, envelopes track assigned money against activity, and
//! spending on a credit card shifts the budgeted amount into that
//! card's payment envelope so the card can always be paid in full.

use serde::{Deserialize, Serialize};

use crate::error::{OutwitError, Result};
use crate::money::Cents;

/// One budget category and the money sitting in it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Envelope {
    pub id: String,
    pub name: String,
    /// Cents assigned to this envelope for the month.
    #[serde(default)]
    pub assigned: Cents,
    /// Net transaction activity for the month, negative for spending.
    #[serde(default)]
    pub activity: Cents,
}

impl Envelope {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            assigned: 0,
            activity: 0,
        }
    }

    pub fn with_assigned(mut self, assigned: Cents) -> Self {
        self.assigned = assigned;
        self
    }

    pub fn with_activity(mut self, activity: Cents) -> Self {
        self.activity = activity;
        self
    }

    /// What is actually left to spend from this envelope.
    pub fn available(&self) -> Cents {
        self.assigned + self.activity
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountKind {
    #[serde(rename = "checking")]
    Checking,
    #[serde(rename = "savings")]
    Savings,
    #[serde(rename = "credit-card")]
    CreditCard,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub kind: AccountKind,
    /// Current balance in cents, negative for carried card debt.
    #[serde(default)]
    pub balance: Cents,
}

impl Account {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: AccountKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            balance: 0,
        }
    }

    pub fn with_balance(mut self, balance: Cents) -> Self {
        self.balance = balance;
        self
    }
}

/// One budgeted transaction. Outflows are negative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Spend {
    pub account_id: String,
    pub envelope_id: String,
    pub amount: Cents,
}

/// Cents to move into a credit card's payment envelope to cover
/// budgeted spending on that card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardFunding {
    pub account_id: String,
    pub amount: Cents,
}

/// Income not yet assigned to any envelope. Goes negative when the
/// budget promises more than it has.
pub fn ready_to_assign(income: Cents, envelopes: &[Envelope]) -> Cents {
    income - envelopes.iter().map(|e| e.assigned).sum::<Cents>()
}

/// Reassigns `amount` cents from one envelope to another. The source is
/// allowed to go negative; [`overspent`] will report it.
pub fn move_funds(envelopes: &mut [Envelope], from: &str, to: &str, amount: Cents) -> Result<()> {
    if amount <= 0 {
        return Err(OutwitError::InvalidAmount(amount));
    }
    if from == to {
        return Err(OutwitError::SelfTransfer(from.to_string()));
    }
    let from_idx = envelopes
        .iter()
        .position(|e| e.id == from)
        .ok_or_else(|| OutwitError::UnknownEnvelope(from.to_string()))?;
    let to_idx = envelopes
        .iter()
        .position(|e| e.id == to)
        .ok_or_else(|| OutwitError::UnknownEnvelope(to.to_string()))?;
    envelopes[from_idx].assigned -= amount;
    envelopes[to_idx].assigned += amount;
    Ok(())
}

/// Totals the card outflows in `spends` per credit-card account, in
/// first-appearance order. Inflows and spends against accounts that are
/// not credit cards contribute nothing.
pub fn fund_credit_card_envelopes(spends: &[Spend], accounts: &[Account]) -> Vec<CardFunding> {
    let mut fundings: Vec<CardFunding> = Vec::new();
    for spend in spends {
        if spend.amount >= 0 {
            continue;
        }
        let account = match accounts.iter().find(|a| a.id == spend.account_id) {
            Some(a) => a,
            None => continue,
        };
        if account.kind != AccountKind::CreditCard {
            continue;
        }
        let outflow = -spend.amount;
        match fundings.iter_mut().find(|f| f.account_id == spend.account_id) {
            Some(f) => f.amount += outflow,
            None => fundings.push(CardFunding {
                account_id: spend.account_id.clone(),
                amount: outflow,
            }),
        }
    }
    fundings
}

/// Envelopes whose activity has outrun their assignment.
pub fn overspent(envelopes: &[Envelope]) -> Vec<&Envelope> {
    envelopes.iter().filter(|e| e.available() < 0).collect()
}
