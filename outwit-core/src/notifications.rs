//! In-app notification generation.
//!
//! Pure functions: callers pass today's date and get back the list of
//! messages a front end would surface. Nothing here sends anything
//! anywhere.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::bills::{due_within, Bill};
use crate::budget::{overspent, Envelope};
use crate::goals::SavingsGoal;
use crate::money::format_cents;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    BillDue,
    BillOverdue,
    GoalReached,
    Overspent,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    /// The date the notification is about, not when it was generated.
    pub date: NaiveDate,
}

/// Knobs for what gets surfaced.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NotifyPolicy {
    /// Days of warning before a bill's due date.
    pub bill_lead_days: u64,
    /// Also alert on bills that pay themselves.
    pub include_autopay: bool,
}

impl Default for NotifyPolicy {
    fn default() -> Self {
        Self {
            bill_lead_days: 3,
            include_autopay: false,
        }
    }
}

/// Everything worth telling the user about today: overdue bills first,
/// then bills coming due inside the lead window, reached goals, and
/// overspent envelopes.
pub fn generate_notifications(
    bills: &[Bill],
    goals: &[SavingsGoal],
    envelopes: &[Envelope],
    today: NaiveDate,
    policy: NotifyPolicy,
) -> Vec<Notification> {
    let mut out = Vec::new();
    let considered = |b: &Bill| policy.include_autopay || !b.autopay;

    let mut overdue: Vec<&Bill> = bills
        .iter()
        .filter(|b| considered(b) && b.is_overdue(today))
        .collect();
    overdue.sort_by_key(|b| b.next_due);
    for bill in overdue {
        out.push(Notification {
            kind: NotificationKind::BillOverdue,
            message: format!(
                "{} ({}) was due {}",
                bill.name,
                format_cents(bill.amount),
                bill.next_due
            ),
            date: bill.next_due,
        });
    }

    for bill in due_within(bills, today, policy.bill_lead_days) {
        if !considered(bill) {
            continue;
        }
        out.push(Notification {
            kind: NotificationKind::BillDue,
            message: format!(
                "{} ({}) is due {}",
                bill.name,
                format_cents(bill.amount),
                bill.next_due
            ),
            date: bill.next_due,
        });
    }

    for goal in goals.iter().filter(|g| g.is_reached()) {
        out.push(Notification {
            kind: NotificationKind::GoalReached,
            message: format!("{} is fully funded ({})", goal.name, format_cents(goal.target)),
            date: today,
        });
    }

    for envelope in overspent(envelopes) {
        out.push(Notification {
            kind: NotificationKind::Overspent,
            message: format!(
                "{} is overspent by {}",
                envelope.name,
                format_cents(-envelope.available())
            ),
            date: today,
        });
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bills::BillCadence;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn monthly_bill(id: &str, name: &str, amount: i64, due: NaiveDate) -> Bill {
        Bill::new(id, name, amount, BillCadence::Monthly, due)
    }

    #[test]
    fn default_policy_warns_three_days_out() {
        let policy = NotifyPolicy::default();
        assert_eq!(policy.bill_lead_days, 3);
        assert!(!policy.include_autopay);
    }

    #[test]
    fn sections_come_out_in_a_fixed_order() {
        let today = date(2026, 6, 10);
        let bills = vec![
            monthly_bill("net", "Internet", 7_000, date(2026, 6, 12)),
            monthly_bill("water", "Water", 9_000, date(2026, 6, 1)),
        ];
        let goals = vec![SavingsGoal::new("efund", "Emergency Fund", 10_000).with_saved(10_000)];
        let envelopes = vec![Envelope::new("dining", "Dining Out")
            .with_assigned(1_000)
            .with_activity(-2_200)];

        let out =
            generate_notifications(&bills, &goals, &envelopes, today, NotifyPolicy::default());
        let kinds: Vec<NotificationKind> = out.iter().map(|n| n.kind).collect();
        assert_eq!(
            kinds,
            [
                NotificationKind::BillOverdue,
                NotificationKind::BillDue,
                NotificationKind::GoalReached,
                NotificationKind::Overspent,
            ]
        );
        assert_eq!(out[0].message, "Water ($90.00) was due 2026-06-01");
        assert_eq!(out[0].date, date(2026, 6, 1));
        assert_eq!(out[1].message, "Internet ($70.00) is due 2026-06-12");
        assert_eq!(out[2].message, "Emergency Fund is fully funded ($100.00)");
        assert_eq!(out[3].message, "Dining Out is overspent by $12.00");
    }

    #[test]
    fn bills_outside_the_lead_window_stay_quiet() {
        let today = date(2026, 6, 10);
        let bills = vec![monthly_bill("net", "Internet", 7_000, date(2026, 6, 14))];
        let out = generate_notifications(&bills, &[], &[], today, NotifyPolicy::default());
        assert!(out.is_empty());
    }

    #[test]
    fn due_today_still_alerts() {
        let today = date(2026, 6, 10);
        let bills = vec![monthly_bill("net", "Internet", 7_000, today)];
        let out = generate_notifications(&bills, &[], &[], today, NotifyPolicy::default());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].kind, NotificationKind::BillDue);
    }

    #[test]
    fn autopay_bills_are_skipped_unless_asked_for() {
        let today = date(2026, 6, 10);
        let bills = vec![
            monthly_bill("rent", "Rent", 180_000, date(2026, 6, 11)).with_autopay(true),
        ];
        assert!(generate_notifications(&bills, &[], &[], today, NotifyPolicy::default()).is_empty());

        let include = NotifyPolicy {
            include_autopay: true,
            ..NotifyPolicy::default()
        };
        let out = generate_notifications(&bills, &[], &[], today, include);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].kind, NotificationKind::BillDue);
    }

    #[test]
    fn unreached_goals_and_healthy_envelopes_say_nothing() {
        let today = date(2026, 6, 10);
        let goals = vec![SavingsGoal::new("trip", "Trip", 50_000).with_saved(10_000)];
        let envelopes = vec![Envelope::new("rent", "Rent").with_assigned(1_000)];
        let out = generate_notifications(&[], &goals, &envelopes, today, NotifyPolicy::default());
        assert!(out.is_empty());
    }
}
