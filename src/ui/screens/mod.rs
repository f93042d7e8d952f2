pub(crate) mod budgets;
pub(crate) mod dashboard;
pub(crate) mod reports;
pub(crate) mod transactions;
