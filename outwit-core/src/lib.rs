//! outwit-core: Budgeting and debt payoff math for Outwit Budget
//!
//! Everything in here is deterministic: callers supply their own dates
//! and the same inputs always produce the same plans.

pub mod bills;
pub mod budget;
pub mod debt;
pub mod error;
pub mod goals;
pub mod money;
pub mod notifications;
pub mod payoff;
pub mod time;

pub use bills::{due_within, monthly_commitment, Bill, BillCadence};
pub use budget::{
    fund_credit_card_envelopes, move_funds, overspent, ready_to_assign, Account, AccountKind,
    CardFunding, Envelope, Spend,
};
pub use debt::Debt;
pub use error::{OutwitError, Result};
pub use goals::SavingsGoal;
pub use money::{format_cents, Cents};
pub use notifications::{
    generate_notifications, Notification, NotificationKind, NotifyPolicy,
};
pub use payoff::{
    compare_strategies, monthly_interest, simulate, PayoffStrategy, PayoffSummary, ScheduleEntry,
    StrategyComparison, StrategySavings, MAX_PAYOFF_MONTHS,
};
pub use time::{add_months, first_of_month, month_date, months_until};
