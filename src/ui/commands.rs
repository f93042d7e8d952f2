use std::collections::HashMap;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::app::{App, InputMode, PendingAction, Screen};
use crate::ledger::Ledger;
use crate::models::{Category, Transaction, TransactionDraft};

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &mut Ledger) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit FinDash", cmd_quit, r);
    register_command!("quit", "Quit FinDash", cmd_quit, r);
    register_command!("d", "Go to Dashboard", cmd_dashboard, r);
    register_command!("dashboard", "Go to Dashboard", cmd_dashboard, r);
    register_command!("t", "Go to Transactions", cmd_transactions, r);
    register_command!("transactions", "Go to Transactions", cmd_transactions, r);
    register_command!("b", "Go to Budgets", cmd_budgets, r);
    register_command!("budgets", "Go to Budgets", cmd_budgets, r);
    register_command!("r", "Go to Reports", cmd_reports, r);
    register_command!("reports", "Go to Reports", cmd_reports, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!(
        "add",
        "Add transaction (e.g. :add 2024-01-15 45.50 food Grocery run)",
        cmd_add,
        r
    );
    register_command!(
        "a",
        "Add transaction (e.g. :a 2024-01-15 45.50 food Grocery run)",
        cmd_add,
        r
    );
    register_command!(
        "edit",
        "Replace selected transaction (e.g. :edit 2024-01-15 45.50 food Groceries)",
        cmd_edit,
        r
    );
    register_command!(
        "delete-txn",
        "Delete selected transaction",
        cmd_delete_txn,
        r
    );
    register_command!(
        "budget",
        "Set a category budget (e.g. :budget food 400)",
        cmd_budget,
        r
    );
    register_command!(
        "budget-reset",
        "Restore the built-in default budgets",
        cmd_budget_reset,
        r
    );

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app, ledger)?;
    } else {
        // Try fuzzy match
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Parse `<date> <amount> <category|-> <description...>` as used by both
/// `:add` and `:edit`. Returns a user-facing error string on bad input.
fn parse_draft(args: &str) -> Result<TransactionDraft, String> {
    let parts: Vec<&str> = args.splitn(4, ' ').collect();
    if parts.len() < 4 {
        return Err("Usage: <date> <amount> <category|-> <description>".into());
    }

    let date = NaiveDate::parse_from_str(parts[0], "%Y-%m-%d")
        .map_err(|_| format!("Invalid date '{}' (expected YYYY-MM-DD)", parts[0]))?;
    let amount = Decimal::from_str(parts[1])
        .map_err(|_| format!("Invalid amount '{}'", parts[1]))?;
    let category = match parts[2] {
        "-" | "none" => None,
        raw => Some(
            Category::parse(raw)
                .ok_or_else(|| format!("Unknown category '{raw}' (see :help for keys)"))?,
        ),
    };
    let description = parts[3].trim().to_string();

    Ok(TransactionDraft {
        date,
        description,
        amount,
        category,
    })
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_dashboard(_args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    app.screen = Screen::Dashboard;
    app.refresh(ledger);
    Ok(())
}

fn cmd_transactions(_args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    app.screen = Screen::Transactions;
    app.refresh(ledger);
    Ok(())
}

fn cmd_budgets(_args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    app.screen = Screen::Budgets;
    app.refresh(ledger);
    Ok(())
}

fn cmd_reports(_args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    app.screen = Screen::Reports;
    app.refresh(ledger);
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_add(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    let draft = match parse_draft(args) {
        Ok(draft) => draft,
        Err(msg) => {
            app.set_status(msg);
            return Ok(());
        }
    };
    let description = draft.description.clone();
    match ledger.add_transaction(draft) {
        Ok(_) => app.set_status(format!("Added: {description}")),
        Err(e) => app.set_status(format!("Error: {e}")),
    }
    app.refresh(ledger);
    Ok(())
}

fn cmd_edit(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    let Some(selected) = app.selected_transaction() else {
        app.set_status("No transaction selected");
        return Ok(());
    };
    let id = selected.id;

    let draft = match parse_draft(args) {
        Ok(draft) => draft,
        Err(msg) => {
            app.set_status(msg);
            return Ok(());
        }
    };
    let record = Transaction {
        id,
        date: draft.date,
        description: draft.description.clone(),
        amount: draft.amount,
        category: draft.category,
    };
    match ledger.update_transaction(record) {
        Ok(()) => app.set_status(format!("Updated: {}", draft.description)),
        Err(e) => app.set_status(format!("Error: {e}")),
    }
    app.refresh(ledger);
    Ok(())
}

fn cmd_delete_txn(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    let Some(txn) = app.selected_transaction() else {
        app.set_status("No transaction selected");
        return Ok(());
    };
    let (id, description) = (txn.id, txn.description.clone());
    app.confirm_message = format!("Delete '{description}'?");
    app.pending_action = Some(PendingAction::DeleteTransaction { id, description });
    app.input_mode = InputMode::Confirm;
    Ok(())
}

fn cmd_budget(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    let parts: Vec<&str> = args.rsplitn(2, ' ').collect();
    if parts.len() < 2 {
        app.set_status("Usage: :budget <category> <amount>");
        return Ok(());
    }
    // rsplitn yields the amount first; the category name may contain spaces.
    let (raw_amount, raw_category) = (parts[0], parts[1]);

    let Some(category) = Category::parse(raw_category) else {
        app.set_status(format!("Unknown category '{raw_category}'"));
        return Ok(());
    };
    let Ok(limit) = Decimal::from_str(raw_amount) else {
        app.set_status(format!("Invalid amount '{raw_amount}'"));
        return Ok(());
    };

    let mut budgets = ledger.budgets().clone();
    budgets.set(category, limit);
    match ledger.save_budgets(budgets) {
        Ok(()) => app.set_status(format!(
            "Budget for {} set to {raw_amount}",
            category.label()
        )),
        Err(e) => app.set_status(format!("Error: {e}")),
    }
    app.refresh(ledger);
    Ok(())
}

fn cmd_budget_reset(_args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    match ledger.save_budgets(crate::models::Budgets::default_limits()) {
        Ok(()) => app.set_status("Budgets restored to defaults"),
        Err(e) => app.set_status(format!("Error: {e}")),
    }
    app.refresh(ledger);
    Ok(())
}
