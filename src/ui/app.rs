use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;

use crate::ledger::Ledger;
use crate::models::Transaction;
use crate::report::insights::{self, Insight};
use crate::report::{self, BudgetLine, CategoryTotal, MonthlyTotal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    Transactions,
    Budgets,
    Reports,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[
            Self::Dashboard,
            Self::Transactions,
            Self::Budgets,
            Self::Reports,
        ]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Transactions => write!(f, "Transactions"),
            Self::Budgets => write!(f, "Budgets"),
            Self::Reports => write!(f, "Reports"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone)]
pub(crate) enum PendingAction {
    DeleteTransaction { id: i64, description: String },
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    /// Reference date for "current month" views, fixed at startup.
    pub(crate) today: NaiveDate,

    // Derived views, recomputed from the ledger after every mutation.
    pub(crate) total_expenses: Decimal,
    pub(crate) current_month_expenses: Decimal,
    pub(crate) total_budget: Decimal,
    pub(crate) monthly: Vec<MonthlyTotal>,
    pub(crate) by_category: Vec<CategoryTotal>,
    pub(crate) recent: Vec<Transaction>,
    pub(crate) comparison: Vec<BudgetLine>,
    pub(crate) insights: Vec<Insight>,

    // Transactions screen: full list, most recent first.
    pub(crate) rows: Vec<Transaction>,
    pub(crate) transaction_index: usize,
    pub(crate) transaction_scroll: usize,

    // Budgets screen
    pub(crate) budget_index: usize,
    pub(crate) budget_scroll: usize,

    // Confirmation
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new() -> Self {
        Self {
            running: true,
            screen: Screen::Dashboard,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,
            today: Local::now().date_naive(),

            total_expenses: Decimal::ZERO,
            current_month_expenses: Decimal::ZERO,
            total_budget: Decimal::ZERO,
            monthly: Vec::new(),
            by_category: Vec::new(),
            recent: Vec::new(),
            comparison: Vec::new(),
            insights: Vec::new(),

            rows: Vec::new(),
            transaction_index: 0,
            transaction_scroll: 0,

            budget_index: 0,
            budget_scroll: 0,

            pending_action: None,
            confirm_message: String::new(),

            visible_rows: 20,
        }
    }

    /// Re-derive every view from the current ledger snapshot. There is no
    /// caching layer: small data volumes make full recomputation cheap, and it
    /// guarantees every mutation is immediately visible.
    pub(crate) fn refresh(&mut self, ledger: &mut Ledger) {
        let txns = ledger.transactions();

        self.total_expenses = report::total_expenses(txns);
        self.monthly = report::monthly_series(txns);
        self.by_category = report::category_series(txns);
        self.recent = report::recent_transactions(txns, 5);
        self.rows = report::recent_transactions(txns, txns.len());

        let current = report::current_month_transactions(txns, self.today);
        self.current_month_expenses = report::total_expenses(&current);
        let current_actuals = report::category_series(&current);
        self.comparison = report::budget_comparison(ledger.budgets(), &current_actuals);

        self.total_budget = ledger.budgets().total();
        let total_actual: Decimal = current_actuals.iter().map(|c| c.total).sum();
        self.insights = insights::generate(self.total_budget, total_actual, &self.comparison);

        if self.transaction_index >= self.rows.len() {
            self.transaction_index = self.rows.len().saturating_sub(1);
        }
        if self.transaction_scroll > self.transaction_index {
            self.transaction_scroll = self.transaction_index;
        }

        if let Some(warning) = ledger.take_persist_warning() {
            self.set_status(format!("Warning: {warning} (changes kept in memory)"));
        }
    }

    /// Transaction under the cursor on the Transactions screen.
    pub(crate) fn selected_transaction(&self) -> Option<&Transaction> {
        self.rows.get(self.transaction_index)
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
