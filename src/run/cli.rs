use anyhow::Result;
use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::ledger::Ledger;
use crate::models::{Category, TransactionDraft};
use crate::report::{self, insights};
use crate::ui::util::format_amount;

pub(crate) fn as_cli(args: &[String], ledger: &mut Ledger) -> Result<()> {
    let result = match args[1].as_str() {
        "add" => cli_add(&args[2..], ledger),
        "list" | "ls" => cli_list(ledger),
        "budgets" => cli_budgets(ledger),
        "budget" => cli_budget(&args[2..], ledger),
        "summary" | "s" => cli_summary(ledger),
        "insights" | "i" => cli_insights(ledger),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("findash {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    };

    if let Some(warning) = ledger.take_persist_warning() {
        eprintln!("Warning: {warning} (changes kept in memory)");
    }

    result
}

fn print_usage() {
    println!("FinDash - local-only personal finance dashboard");
    println!();
    println!("Usage: findash [command]");
    println!();
    println!("Commands:");
    println!("  (none)                                 Launch interactive TUI");
    println!("  add <date> <amount> <category|-> <description...>");
    println!("                                         Record an expense (date: YYYY-MM-DD)");
    println!("  list                                   List transactions, most recent first");
    println!("  budgets                                Budget vs. actual for the current month");
    println!("  budget <category> <amount>             Set one category's monthly limit");
    println!("  summary                                Monthly expense totals");
    println!("  insights                               Spending insights for the current month");
    println!("  --help, -h                             Show this help");
    println!("  --version, -V                          Show version");
    println!();
    println!("Category keys:");
    for category in Category::all() {
        println!("  {:<16} {}", category.key(), category.label());
    }
}

fn cli_add(args: &[String], ledger: &mut Ledger) -> Result<()> {
    if args.len() < 4 {
        anyhow::bail!("Usage: findash add <date> <amount> <category|-> <description...>");
    }

    let date = NaiveDate::parse_from_str(&args[0], "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid date '{}' (expected YYYY-MM-DD)", args[0]))?;
    let amount = Decimal::from_str(&args[1])
        .map_err(|_| anyhow::anyhow!("Invalid amount '{}'", args[1]))?;
    let category = match args[2].as_str() {
        "-" | "none" => None,
        raw => Some(
            Category::parse(raw)
                .ok_or_else(|| anyhow::anyhow!("Unknown category '{raw}' (see findash help)"))?,
        ),
    };
    let description = args[3..].join(" ");

    let id = ledger
        .add_transaction(TransactionDraft {
            date,
            description: description.clone(),
            amount,
            category,
        })
        .map_err(|e| anyhow::anyhow!("{e}"))?;
    println!("Added transaction {id}: {description}");
    Ok(())
}

fn cli_list(ledger: &mut Ledger) -> Result<()> {
    let txns = ledger.transactions();
    if txns.is_empty() {
        println!("No transactions recorded.");
        return Ok(());
    }

    println!(
        "{:<12}  {:<40}  {:<22}  {:>12}",
        "Date", "Description", "Category", "Amount"
    );
    for txn in report::recent_transactions(txns, txns.len()) {
        println!(
            "{:<12}  {:<40}  {:<22}  {:>12}",
            txn.date,
            txn.description,
            txn.category_label(),
            format_amount(txn.amount)
        );
    }
    println!();
    println!(
        "Total: {} across {} transactions",
        format_amount(report::total_expenses(txns)),
        txns.len()
    );
    Ok(())
}

fn cli_budgets(ledger: &mut Ledger) -> Result<()> {
    let today = Local::now().date_naive();
    let current = report::current_month_transactions(ledger.transactions(), today);
    let actuals = report::category_series(&current);
    let comparison = report::budget_comparison(ledger.budgets(), &actuals);

    println!("Budget vs. actual for {}:", today.format("%B %Y"));
    println!(
        "{:<24}  {:>12}  {:>12}  {:>12}",
        "Category", "Budget", "Actual", "Difference"
    );
    for line in &comparison {
        println!(
            "{:<24}  {:>12}  {:>12}  {:>12}",
            line.category.label(),
            format_amount(line.budget),
            format_amount(line.actual),
            format_amount(line.difference)
        );
    }
    Ok(())
}

fn cli_budget(args: &[String], ledger: &mut Ledger) -> Result<()> {
    if args.len() < 2 {
        anyhow::bail!("Usage: findash budget <category> <amount>");
    }
    // The amount is the last argument; the category name may contain spaces.
    let (raw_amount, raw_category) = (
        &args[args.len() - 1],
        args[..args.len() - 1].join(" "),
    );

    let category = Category::parse(&raw_category)
        .ok_or_else(|| anyhow::anyhow!("Unknown category '{raw_category}' (see findash help)"))?;
    let limit = Decimal::from_str(raw_amount)
        .map_err(|_| anyhow::anyhow!("Invalid amount '{raw_amount}'"))?;

    let mut budgets = ledger.budgets().clone();
    budgets.set(category, limit);
    ledger
        .save_budgets(budgets)
        .map_err(|e| anyhow::anyhow!("{e}"))?;
    println!(
        "Budget for {} set to {}",
        category.label(),
        format_amount(limit)
    );
    Ok(())
}

fn cli_summary(ledger: &mut Ledger) -> Result<()> {
    let txns = ledger.transactions();
    let series = report::monthly_series(txns);
    if series.is_empty() {
        println!("No transactions recorded.");
        return Ok(());
    }

    println!("Monthly expenses:");
    for month in &series {
        println!("  {:<8}  {:>12}", month.period, format_amount(month.total));
    }
    println!();
    println!("Total: {}", format_amount(report::total_expenses(txns)));
    Ok(())
}

fn cli_insights(ledger: &mut Ledger) -> Result<()> {
    let today = Local::now().date_naive();
    let current = report::current_month_transactions(ledger.transactions(), today);
    let actuals = report::category_series(&current);
    let comparison = report::budget_comparison(ledger.budgets(), &actuals);

    let total_budget = ledger.budgets().total();
    let total_actual: Decimal = actuals.iter().map(|a| a.total).sum();
    let findings = insights::generate(total_budget, total_actual, &comparison);

    if findings.is_empty() {
        println!("No insights. Set budgets and add transactions first.");
        return Ok(());
    }

    for insight in &findings {
        println!(
            "[{:<8}] {}: {}",
            insight.severity, insight.title, insight.message
        );
    }
    Ok(())
}
