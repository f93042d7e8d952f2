mod budget;
mod category;
mod transaction;

pub(crate) use budget::Budgets;
pub(crate) use category::Category;
pub(crate) use transaction::{Transaction, TransactionDraft};
