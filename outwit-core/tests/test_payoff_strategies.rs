use chrono::NaiveDate;
use outwit_core::{
    compare_strategies, month_date, simulate, Cents, Debt, PayoffStrategy,
};

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
}

/// A plausible household: card debt at a punishing rate, a car note, and
/// a student loan, with $400/month on top of the minimums.
fn portfolio() -> Vec<Debt> {
    vec![
        Debt::new("visa", "Rewards Visa", 650_000, 22.99, 13_000),
        Debt::new("car", "Car Note", 1_420_000, 5.49, 31_500),
        Debt::new("student", "Student Loan", 2_800_000, 6.8, 29_000),
    ]
}

/// Full-plan regression: every debt retires and the schedule's books
/// reconcile to the cent.
#[test]
fn test_avalanche_plan_reconciles() {
    let debts = portfolio();
    let plan = simulate(&debts, 40_000, PayoffStrategy::Avalanche, start()).unwrap();

    assert!(!plan.hit_month_cap, "household plan should finish");
    assert_eq!(plan.debt_free_date, month_date(start(), plan.total_months));

    // Each debt's first entry opens at its original balance, and the
    // principal across its entries adds back up to that balance.
    for debt in &debts {
        let first = plan
            .schedule
            .iter()
            .find(|e| e.debt_id == debt.id)
            .unwrap();
        assert_eq!(first.starting_balance, debt.balance);

        let principal: Cents = plan
            .schedule
            .iter()
            .filter(|e| e.debt_id == debt.id)
            .map(|e| e.principal)
            .sum();
        assert_eq!(principal, debt.balance, "principal drift on {}", debt.id);
        assert!(plan.payoff_month(&debt.id).is_some());
    }

    // Totals match the schedule they summarize.
    let payments: Cents = plan.schedule.iter().map(|e| e.payment).sum();
    let interest: Cents = plan.schedule.iter().map(|e| e.interest).sum();
    assert_eq!(payments, plan.total_payments);
    assert_eq!(interest, plan.total_interest);

    // Every cent paid went to either principal or interest.
    let total_balance: Cents = debts.iter().map(|d| d.balance).sum();
    assert_eq!(plan.total_payments, total_balance + plan.total_interest);
}

/// The strategies genuinely disagree on this portfolio (the student
/// loan outranks the car note by rate but not by size), and avalanche
/// comes out ahead on interest.
#[test]
fn test_avalanche_saves_interest_over_snowball() {
    let cmp = compare_strategies(&portfolio(), 40_000, start()).unwrap();

    assert!(!cmp.avalanche.hit_month_cap);
    assert!(!cmp.snowball.hit_month_cap);
    assert!(
        cmp.savings.interest > 0,
        "expected avalanche to save interest, saved {}",
        cmp.savings.interest
    );
    assert_eq!(
        cmp.savings.months,
        cmp.snowball.total_months as i32 - cmp.avalanche.total_months as i32
    );

    // The card is both highest-rate and smallest, so each strategy
    // clears it before the car note.
    for plan in [&cmp.avalanche, &cmp.snowball] {
        assert!(plan.payoff_month("visa").unwrap() < plan.payoff_month("car").unwrap());
    }
}

/// Same inputs, same plan: the comparison has no hidden state.
#[test]
fn test_comparison_is_reproducible() {
    let first = compare_strategies(&portfolio(), 40_000, start()).unwrap();
    let second = compare_strategies(&portfolio(), 40_000, start()).unwrap();
    assert_eq!(first, second);
}

/// Summaries survive a JSON round trip unchanged, with the field and
/// strategy spellings the app's export format expects.
#[test]
fn test_summary_json_round_trip() {
    let plan = simulate(&portfolio(), 40_000, PayoffStrategy::Avalanche, start()).unwrap();

    let json = serde_json::to_string(&plan).unwrap();
    let back: outwit_core::PayoffSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(back, plan);

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["strategy"], "avalanche");
    assert_eq!(value["hit_month_cap"], false);
    assert!(value.get("debt_free_date").is_some());
    assert!(value["schedule"][0].get("starting_balance").is_some());
}
