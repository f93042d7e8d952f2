use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Category;

/// A recorded expense. `id` is assigned once by the ledger at creation time
/// and never changes; edits replace the whole record keyed on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Transaction {
    pub(crate) id: i64,
    pub(crate) date: NaiveDate,
    pub(crate) description: String,
    pub(crate) amount: Decimal,
    #[serde(default)]
    pub(crate) category: Option<Category>,
}

impl Transaction {
    pub(crate) fn category_label(&self) -> &'static str {
        self.category.map(|c| c.label()).unwrap_or("—")
    }
}

/// Transaction fields as submitted by the user, before an id exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TransactionDraft {
    pub(crate) date: NaiveDate,
    pub(crate) description: String,
    pub(crate) amount: Decimal,
    pub(crate) category: Option<Category>,
}

impl TransactionDraft {
    pub(crate) fn into_transaction(self, id: i64) -> Transaction {
        Transaction {
            id,
            date: self.date,
            description: self.description,
            amount: self.amount,
            category: self.category,
        }
    }
}
