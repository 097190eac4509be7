use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use outwit_core::{
    compare_strategies, due_within, format_cents, fund_credit_card_envelopes,
    generate_notifications, monthly_commitment, move_funds, overspent, ready_to_assign, simulate,
    Account, AccountKind, Bill, Cents, Debt, Envelope, NotificationKind, PayoffStrategy,
    PayoffSummary, SavingsGoal, Spend, MAX_PAYOFF_MONTHS,
};

mod config;

#[derive(Parser, Debug)]
#[command(name = "outwit", version, about = "Outwit Budget command line")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write ~/.outwit/config.toml with defaults
    Init,

    /// Simulate one payoff strategy over a debts file
    Payoff {
        /// JSON file with the debt list
        #[arg(long)]
        debts: PathBuf,

        /// Extra cents per month on top of the minimums (default: config)
        #[arg(long)]
        extra: Option<Cents>,

        /// avalanche or snowball (default: config)
        #[arg(long)]
        strategy: Option<PayoffStrategy>,

        /// Plan start date, YYYY-MM-DD (default: today)
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Print the full month-by-month schedule
        #[arg(long)]
        schedule: bool,

        /// Emit the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run both strategies and show what avalanche saves
    Compare {
        /// JSON file with the debt list
        #[arg(long)]
        debts: PathBuf,

        /// Extra cents per month on top of the minimums (default: config)
        #[arg(long)]
        extra: Option<Cents>,

        /// Plan start date, YYYY-MM-DD (default: today)
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Emit the comparison as JSON
        #[arg(long)]
        json: bool,
    },

    /// Recurring bill lookups
    Bills {
        #[command(subcommand)]
        command: BillsCommand,
    },

    /// Envelope budget lookups and rebalancing
    Budget {
        #[command(subcommand)]
        command: BudgetCommand,
    },

    /// Everything worth knowing about today
    Alerts {
        /// JSON file with the bill list
        #[arg(long)]
        bills: PathBuf,

        /// JSON file with savings goals
        #[arg(long)]
        goals: Option<PathBuf>,

        /// JSON budget file (income + envelopes)
        #[arg(long)]
        budget: Option<PathBuf>,

        /// Evaluate as of this date, YYYY-MM-DD (default: today)
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Emit the notifications as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug)]
enum BillsCommand {
    /// Bills due inside a window
    Due {
        /// JSON file with the bill list
        #[arg(long)]
        bills: PathBuf,

        /// Window in days
        #[arg(long, default_value_t = 7)]
        within: u64,

        /// Evaluate as of this date (default: today)
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Emit the matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// Bills already past due
    Overdue {
        /// JSON file with the bill list
        #[arg(long)]
        bills: PathBuf,

        /// Evaluate as of this date (default: today)
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Emit the matches as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug)]
enum BudgetCommand {
    /// Ready-to-assign, envelope balances, card payment funding
    Summary {
        /// JSON budget file
        #[arg(long)]
        file: PathBuf,

        /// Emit the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Move assigned cents between envelopes and save the file
    Move {
        /// JSON budget file (updated in place)
        #[arg(long)]
        file: PathBuf,

        /// Source envelope id
        #[arg(long)]
        from: String,

        /// Target envelope id
        #[arg(long)]
        to: String,

        /// Cents to move
        #[arg(long)]
        amount: Cents,
    },
}

/// On-disk budget shape: `{ income, envelopes, accounts?, spends? }`.
#[derive(Debug, Serialize, Deserialize)]
struct BudgetFile {
    income: Cents,
    envelopes: Vec<Envelope>,
    #[serde(default)]
    accounts: Vec<Account>,
    #[serde(default)]
    spends: Vec<Spend>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Init => {
            config::init_config()?;
        }

        Command::Payoff {
            debts,
            extra,
            strategy,
            start,
            schedule,
            json,
        } => {
            run_payoff(&debts, extra, strategy, start, schedule, json)?;
        }

        Command::Compare {
            debts,
            extra,
            start,
            json,
        } => {
            run_compare(&debts, extra, start, json)?;
        }

        Command::Bills { command } => {
            run_bills(command)?;
        }

        Command::Budget { command } => {
            run_budget(command)?;
        }

        Command::Alerts {
            bills,
            goals,
            budget,
            today,
            json,
        } => {
            run_alerts(&bills, goals.as_deref(), budget.as_deref(), today, json)?;
        }
    }

    Ok(())
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        bail!("file not found: {}", path.display());
    }
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&s).with_context(|| format!("parse {}", path.display()))
}

fn today_or(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Utc::now().date_naive())
}

fn run_payoff(
    path: &Path,
    extra: Option<Cents>,
    strategy: Option<PayoffStrategy>,
    start: Option<NaiveDate>,
    show_schedule: bool,
    json: bool,
) -> Result<()> {
    let cfg = config::load_config()?;
    let debts: Vec<Debt> = load_json(path)?;
    let extra = extra.unwrap_or(cfg.payoff.default_extra);
    let strategy = strategy.unwrap_or(cfg.payoff.default_strategy);

    let summary = simulate(&debts, extra, strategy, today_or(start))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    print_summary(&summary, &debts);
    if show_schedule {
        print_schedule(&summary);
    }
    Ok(())
}

fn print_summary(summary: &PayoffSummary, debts: &[Debt]) {
    if summary.hit_month_cap {
        eprintln!(
            "warning: balances remain after {} months; showing the truncated plan",
            MAX_PAYOFF_MONTHS
        );
    }

    println!("# {} plan\n", summary.strategy.as_str());
    println!("Months:        {}", summary.total_months);
    println!("Debt-free:     {}", summary.debt_free_date);
    println!("Interest paid: {}", format_cents(summary.total_interest));
    println!("Total paid:    {}", format_cents(summary.total_payments));
    println!();
    for debt in debts {
        match summary.payoff_month(&debt.id) {
            Some(month) => println!("- {} retires in month {}", debt.name, month),
            None => println!("- {} is still open when the plan ends", debt.name),
        }
    }
}

fn print_schedule(summary: &PayoffSummary) {
    println!("\n## Schedule\n");
    for e in &summary.schedule {
        println!(
            "{:>3}  {}  {:<20}  payment {:>12}  interest {:>10}  balance {:>12}",
            e.month,
            e.date,
            e.debt_name,
            format_cents(e.payment),
            format_cents(e.interest),
            format_cents(e.ending_balance),
        );
    }
}

fn run_compare(
    path: &Path,
    extra: Option<Cents>,
    start: Option<NaiveDate>,
    json: bool,
) -> Result<()> {
    let cfg = config::load_config()?;
    let debts: Vec<Debt> = load_json(path)?;
    let extra = extra.unwrap_or(cfg.payoff.default_extra);

    let cmp = compare_strategies(&debts, extra, today_or(start))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&cmp)?);
        return Ok(());
    }

    println!("# Avalanche vs snowball\n");
    print_strategy_line(&cmp.avalanche);
    print_strategy_line(&cmp.snowball);
    println!();
    if cmp.savings.interest == 0 && cmp.savings.months == 0 {
        println!("The strategies tie on this debt list.");
    } else {
        println!(
            "Avalanche saves {} in interest and {} month(s).",
            format_cents(cmp.savings.interest),
            cmp.savings.months
        );
    }
    Ok(())
}

fn print_strategy_line(summary: &PayoffSummary) {
    println!(
        "{:<10} {:>3} months  {:>12} interest  debt-free {}",
        summary.strategy.as_str(),
        summary.total_months,
        format_cents(summary.total_interest),
        summary.debt_free_date,
    );
}

fn run_bills(command: BillsCommand) -> Result<()> {
    match command {
        BillsCommand::Due {
            bills,
            within,
            today,
            json,
        } => {
            let all: Vec<Bill> = load_json(&bills)?;
            let due = due_within(&all, today_or(today), within);

            if json {
                println!("{}", serde_json::to_string_pretty(&due)?);
                return Ok(());
            }
            if due.is_empty() {
                println!("Nothing due in the next {} days.", within);
                return Ok(());
            }
            println!("# Due in the next {} days\n", within);
            for bill in &due {
                println!(
                    "{}  {:<20} {:>10}{}",
                    bill.next_due,
                    bill.name,
                    format_cents(bill.amount),
                    if bill.autopay { "  (autopay)" } else { "" },
                );
            }
            println!(
                "\nMonthly commitment across all bills: {}",
                format_cents(monthly_commitment(&all))
            );
        }

        BillsCommand::Overdue { bills, today, json } => {
            let all: Vec<Bill> = load_json(&bills)?;
            let today = today_or(today);
            let mut late: Vec<&Bill> = all.iter().filter(|b| b.is_overdue(today)).collect();
            late.sort_by_key(|b| b.next_due);

            if json {
                println!("{}", serde_json::to_string_pretty(&late)?);
                return Ok(());
            }
            if late.is_empty() {
                println!("No overdue bills.");
                return Ok(());
            }
            println!("# Overdue\n");
            for bill in &late {
                println!(
                    "{}  {:<20} {:>10}",
                    bill.next_due,
                    bill.name,
                    format_cents(bill.amount),
                );
            }
        }
    }
    Ok(())
}

fn run_budget(command: BudgetCommand) -> Result<()> {
    match command {
        BudgetCommand::Summary { file, json } => {
            let budget: BudgetFile = load_json(&file)?;
            let rta = ready_to_assign(budget.income, &budget.envelopes);
            let fundings = fund_credit_card_envelopes(&budget.spends, &budget.accounts);
            let red = overspent(&budget.envelopes);

            if json {
                let value = serde_json::json!({
                    "ready_to_assign": rta,
                    "envelopes": budget.envelopes,
                    "accounts": budget.accounts,
                    "overspent": red,
                    "card_funding": fundings,
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
                return Ok(());
            }

            println!("# Budget summary\n");
            println!("Ready to assign: {}", format_cents(rta));
            println!("\n## Envelopes\n");
            for e in &budget.envelopes {
                println!(
                    "{:<20} assigned {:>10}  activity {:>10}  available {:>10}",
                    e.name,
                    format_cents(e.assigned),
                    format_cents(e.activity),
                    format_cents(e.available()),
                );
            }
            if !budget.accounts.is_empty() {
                println!("\n## Accounts\n");
                for a in &budget.accounts {
                    println!(
                        "{:<20} {:<11} {:>12}",
                        a.name,
                        account_kind_label(a.kind),
                        format_cents(a.balance),
                    );
                }
            }
            if !red.is_empty() {
                println!("\n## Overspent\n");
                for e in &red {
                    println!("- {} ({})", e.name, format_cents(e.available()));
                }
            }
            if !fundings.is_empty() {
                println!("\n## Card payment funding\n");
                for f in &fundings {
                    println!("- {}: {}", f.account_id, format_cents(f.amount));
                }
            }
        }

        BudgetCommand::Move {
            file,
            from,
            to,
            amount,
        } => {
            let mut budget: BudgetFile = load_json(&file)?;
            move_funds(&mut budget.envelopes, &from, &to, amount)?;
            let s = serde_json::to_string_pretty(&budget)?;
            fs::write(&file, s).with_context(|| format!("write {}", file.display()))?;
            println!("Moved {} from {} to {}.", format_cents(amount), from, to);
        }
    }
    Ok(())
}

fn run_alerts(
    bills_path: &Path,
    goals_path: Option<&Path>,
    budget_path: Option<&Path>,
    today: Option<NaiveDate>,
    json: bool,
) -> Result<()> {
    let cfg = config::load_config()?;
    let bills: Vec<Bill> = load_json(bills_path)?;
    let goals: Vec<SavingsGoal> = match goals_path {
        Some(p) => load_json(p)?,
        None => Vec::new(),
    };
    let envelopes: Vec<Envelope> = match budget_path {
        Some(p) => load_json::<BudgetFile>(p)?.envelopes,
        None => Vec::new(),
    };

    let notifications = generate_notifications(
        &bills,
        &goals,
        &envelopes,
        today_or(today),
        cfg.alerts.policy(),
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&notifications)?);
        return Ok(());
    }
    if notifications.is_empty() {
        println!("All quiet: nothing due, nothing overspent.");
        return Ok(());
    }
    for n in &notifications {
        println!("[{}] {}", kind_label(n.kind), n.message);
    }
    Ok(())
}

fn kind_label(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::BillDue => "due",
        NotificationKind::BillOverdue => "overdue",
        NotificationKind::GoalReached => "goal",
        NotificationKind::Overspent => "overspent",
    }
}

fn account_kind_label(kind: AccountKind) -> &'static str {
    match kind {
        AccountKind::Checking => "checking",
        AccountKind::Savings => "savings",
        AccountKind::CreditCard => "credit card",
    }
}
