//! Debt payoff simulation.
//!
//! Runs a month-by-month amortization of a set of debts sharing one
//! monthly budget: each period every active debt accrues interest, each
//! receives its minimum payment, and whatever is left of the budget
//! attacks the highest-priority debt under the chosen strategy. Priority
//! is recomputed every period from the balances debts carried into it,
//! so retiring a debt never reshuffles payments mid-period.
//!
//! All money is in integer cents; interest is rounded to a whole cent at
//! the single point where it is computed.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::debt::Debt;
use crate::error::{OutwitError, Result};
use crate::money::Cents;
use crate::time::month_date;

/// Hard stop for the simulation loop. A plan that cannot retire its
/// debts inside 50 years is reported as capped rather than run forever.
pub const MAX_PAYOFF_MONTHS: u32 = 600;

/// Which debt gets the surplus each month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoffStrategy {
    /// Highest APR first. Minimizes total interest paid.
    Avalanche,
    /// Smallest balance first. Retires individual debts sooner.
    Snowball,
}

impl PayoffStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayoffStrategy::Avalanche => "avalanche",
            PayoffStrategy::Snowball => "snowball",
        }
    }
}

impl FromStr for PayoffStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "avalanche" => Ok(PayoffStrategy::Avalanche),
            "snowball" => Ok(PayoffStrategy::Snowball),
            other => Err(format!(
                "unknown payoff strategy `{other}`, expected `avalanche` or `snowball`"
            )),
        }
    }
}

/// One debt's activity in one month of the plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleEntry {
    /// 1-based month number within the plan.
    pub month: u32,
    /// Calendar month this entry lands in, as its first day.
    pub date: NaiveDate,
    pub debt_id: String,
    pub debt_name: String,
    /// Total paid to this debt this month, minimum plus any surplus.
    pub payment: Cents,
    /// Interest that accrued on this debt this month.
    pub interest: Cents,
    /// Portion of the payment that reduced the balance, floored at zero
    /// when the payment did not even cover the interest.
    pub principal: Cents,
    /// Balance at the start of the month, before interest.
    pub starting_balance: Cents,
    pub ending_balance: Cents,
}

/// Complete outcome of one simulation run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PayoffSummary {
    pub strategy: PayoffStrategy,
    /// Months until the last debt retired, or [`MAX_PAYOFF_MONTHS`] if
    /// the plan was cut off.
    pub total_months: u32,
    pub total_interest: Cents,
    pub total_payments: Cents,
    pub debt_free_date: NaiveDate,
    /// True when the simulation stopped at the month cap with balances
    /// still outstanding.
    #[serde(default)]
    pub hit_month_cap: bool,
    pub schedule: Vec<ScheduleEntry>,
}

impl PayoffSummary {
    /// The month (1-based) in which a debt reached zero, if it did
    /// within the plan.
    pub fn payoff_month(&self, debt_id: &str) -> Option<u32> {
        self.schedule
            .iter()
            .rev()
            .find(|e| e.debt_id == debt_id)
            .filter(|e| e.ending_balance == 0)
            .map(|e| e.month)
    }
}

/// What sticking with avalanche over snowball buys. Positive numbers
/// mean avalanche wins.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StrategySavings {
    pub months: i32,
    pub interest: Cents,
    pub payments: Cents,
}

/// Both strategies run over the same debts, side by side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StrategyComparison {
    pub avalanche: PayoffSummary,
    pub snowball: PayoffSummary,
    pub savings: StrategySavings,
}

/// One month of interest on `balance` at `apr` percent per year,
/// rounded to the nearest cent.
pub fn monthly_interest(balance: Cents, apr: f64) -> Cents {
    ((balance as f64) * (apr / 100.0) / 12.0).round() as Cents
}

/// Indices of the debts still carrying a balance, in payment order for
/// the strategy. Sorts are stable, so ties keep input order.
fn strategy_order(debts: &[Debt], strategy: PayoffStrategy) -> Vec<usize> {
    let mut order: Vec<usize> = (0..debts.len()).filter(|&i| debts[i].balance > 0).collect();
    match strategy {
        PayoffStrategy::Avalanche => {
            order.sort_by(|&a, &b| debts[b].interest.total_cmp(&debts[a].interest));
        }
        PayoffStrategy::Snowball => {
            order.sort_by_key(|&i| debts[i].balance);
        }
    }
    order
}

/// Folds a surplus payment into the month's schedule. If the debt
/// already has an entry for this month its figures are adjusted in
/// place; otherwise the interest-free entry is appended as is.
fn upsert_extra_payment(schedule: &mut Vec<ScheduleEntry>, extra: ScheduleEntry) {
    let existing = schedule
        .iter_mut()
        .rev()
        .take_while(|e| e.month == extra.month)
        .find(|e| e.debt_id == extra.debt_id);
    match existing {
        Some(entry) => {
            entry.payment += extra.payment;
            entry.principal += extra.principal;
            entry.ending_balance = (entry.ending_balance - extra.payment).max(0);
        }
        None => schedule.push(extra),
    }
}

/// Runs the payoff plan month by month until every debt retires or the
/// month cap is hit.
///
/// The monthly budget is the sum of every input debt's minimum payment
/// plus `extra_monthly`; minimums of already-retired debts keep feeding
/// the surplus. `start` anchors `debt_free_date` arithmetic, which works
/// in whole calendar months from the first of the start month.
pub fn simulate(
    debts: &[Debt],
    extra_monthly: Cents,
    strategy: PayoffStrategy,
    start: NaiveDate,
) -> Result<PayoffSummary> {
    for debt in debts {
        debt.validate()?;
    }
    if extra_monthly < 0 {
        return Err(OutwitError::NegativeExtraPayment(extra_monthly));
    }

    let mut working: Vec<Debt> = debts.to_vec();
    let monthly_budget: Cents =
        working.iter().map(|d| d.min_payment).sum::<Cents>() + extra_monthly;

    let mut schedule: Vec<ScheduleEntry> = Vec::new();
    let mut total_interest: Cents = 0;
    let mut total_payments: Cents = 0;
    let mut total_months: u32 = 0;

    while working.iter().any(|d| !d.is_retired()) && total_months < MAX_PAYOFF_MONTHS {
        total_months += 1;
        let month = total_months;
        let date = month_date(start, month);

        // Payment order and reported starting balances are both fixed
        // from the balances debts carried into the month.
        let order = strategy_order(&working, strategy);
        let start_balances: Vec<Cents> = working.iter().map(|d| d.balance).collect();

        let mut accrued: Vec<Cents> = vec![0; working.len()];
        for (i, debt) in working.iter_mut().enumerate() {
            if debt.balance <= 0 {
                continue;
            }
            let interest = monthly_interest(debt.balance, debt.interest);
            accrued[i] = interest;
            // Saturate rather than overflow on absurd APRs.
            debt.balance = debt.balance.saturating_add(interest);
        }

        let mut remaining = monthly_budget;

        for &i in &order {
            if remaining <= 0 {
                break;
            }
            let payment = working[i].min_payment.min(working[i].balance).min(remaining);
            if payment <= 0 {
                continue;
            }
            working[i].balance -= payment;
            remaining -= payment;

            let interest = accrued[i];
            let principal = (payment - interest).max(0);
            let starting_balance = start_balances[i];
            schedule.push(ScheduleEntry {
                month,
                date,
                debt_id: working[i].id.clone(),
                debt_name: working[i].name.clone(),
                payment,
                interest,
                principal,
                starting_balance,
                ending_balance: (starting_balance - principal).max(0),
            });
            total_interest = total_interest.saturating_add(interest);
            total_payments = total_payments.saturating_add(payment);
        }

        if remaining > 0 {
            if let Some(&i) = order.iter().find(|&&i| working[i].balance > 0) {
                let balance_before = working[i].balance;
                let payment = remaining.min(balance_before);
                working[i].balance -= payment;
                total_payments = total_payments.saturating_add(payment);
                upsert_extra_payment(
                    &mut schedule,
                    ScheduleEntry {
                        month,
                        date,
                        debt_id: working[i].id.clone(),
                        debt_name: working[i].name.clone(),
                        payment,
                        interest: 0,
                        principal: payment,
                        starting_balance: balance_before,
                        ending_balance: balance_before - payment,
                    },
                );
            }
        }
    }

    let hit_month_cap = working.iter().any(|d| !d.is_retired());

    Ok(PayoffSummary {
        strategy,
        total_months,
        total_interest,
        total_payments,
        debt_free_date: month_date(start, total_months),
        hit_month_cap,
        schedule,
    })
}

/// Runs both strategies over the same inputs and reports what avalanche
/// saves relative to snowball.
pub fn compare_strategies(
    debts: &[Debt],
    extra_monthly: Cents,
    start: NaiveDate,
) -> Result<StrategyComparison> {
    let avalanche = simulate(debts, extra_monthly, PayoffStrategy::Avalanche, start)?;
    let snowball = simulate(debts, extra_monthly, PayoffStrategy::Snowball, start)?;
    let savings = StrategySavings {
        months: snowball.total_months as i32 - avalanche.total_months as i32,
        interest: snowball.total_interest - avalanche.total_interest,
        payments: snowball.total_payments - avalanche.total_payments,
    };
    Ok(StrategyComparison {
        avalanche,
        snowball,
        savings,
    })
}
