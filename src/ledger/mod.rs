use chrono::Utc;
use rust_decimal::Decimal;

use crate::error::LedgerError;
use crate::models::{Budgets, Transaction, TransactionDraft};
use crate::store::KvStore;

const TRANSACTIONS_KEY: &str = "transactions";
const BUDGETS_KEY: &str = "budgets";

/// Owns the two collections and mirrors every mutation to the store. The
/// aggregation layer only ever sees read-only snapshots of this state.
pub(crate) struct Ledger {
    transactions: Vec<Transaction>,
    budgets: Budgets,
    store: Box<dyn KvStore>,
    persist_warning: Option<String>,
}

impl Ledger {
    /// Hydrate from the store. Absent or unparsable payloads fall back to an
    /// empty transaction list / the built-in default budgets; malformed stored
    /// data is discarded, never fatal.
    pub(crate) fn load(store: Box<dyn KvStore>) -> Self {
        let transactions = match store.get(TRANSACTIONS_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
            _ => Vec::new(),
        };
        let budgets = match store.get(BUDGETS_KEY) {
            Ok(Some(raw)) => {
                serde_json::from_str(&raw).unwrap_or_else(|_| Budgets::default_limits())
            }
            _ => Budgets::default_limits(),
        };
        Self {
            transactions,
            budgets,
            store,
            persist_warning: None,
        }
    }

    pub(crate) fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub(crate) fn budgets(&self) -> &Budgets {
        &self.budgets
    }

    /// Validate, assign a fresh id, append, persist. Returns the new id.
    pub(crate) fn add_transaction(
        &mut self,
        draft: TransactionDraft,
    ) -> Result<i64, LedgerError> {
        validate_fields(draft.amount, &draft.description)?;
        let id = self.next_id();
        self.transactions.push(draft.into_transaction(id));
        self.persist_transactions();
        Ok(id)
    }

    /// Full-record replace keyed on `record.id`. The collection is unchanged
    /// when the id is unknown or the record fails validation.
    pub(crate) fn update_transaction(&mut self, record: Transaction) -> Result<(), LedgerError> {
        validate_fields(record.amount, &record.description)?;
        let slot = self
            .transactions
            .iter_mut()
            .find(|t| t.id == record.id)
            .ok_or(LedgerError::NotFound(record.id))?;
        *slot = record;
        self.persist_transactions();
        Ok(())
    }

    /// Remove by id and persist. Unknown ids leave the collection untouched
    /// and report `NotFound` for the caller to surface as a warning.
    pub(crate) fn delete_transaction(&mut self, id: i64) -> Result<(), LedgerError> {
        let pos = self
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or(LedgerError::NotFound(id))?;
        self.transactions.remove(pos);
        self.persist_transactions();
        Ok(())
    }

    /// Wholesale replace of the budget map.
    pub(crate) fn save_budgets(&mut self, budgets: Budgets) -> Result<(), LedgerError> {
        if let Some((category, limit)) = budgets.iter().find(|(_, v)| *v < Decimal::ZERO) {
            return Err(LedgerError::Validation(format!(
                "budget for {} must not be negative (got {limit})",
                category.label()
            )));
        }
        self.budgets = budgets;
        self.persist_budgets();
        Ok(())
    }

    /// Last persistence failure, if any, cleared on read. Saves never abort a
    /// mutation: the session keeps operating in memory and the UI shows this.
    pub(crate) fn take_persist_warning(&mut self) -> Option<String> {
        self.persist_warning.take()
    }

    /// Creation-time millisecond timestamp, bumped above any existing id so
    /// ids stay unique even when two submissions land in the same instant.
    fn next_id(&self) -> i64 {
        let floor = self.transactions.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Utc::now().timestamp_millis().max(floor)
    }

    fn persist_transactions(&mut self) {
        if let Err(e) = write_json(&mut *self.store, TRANSACTIONS_KEY, &self.transactions) {
            self.persist_warning = Some(e.to_string());
        }
    }

    fn persist_budgets(&mut self) {
        if let Err(e) = write_json(&mut *self.store, BUDGETS_KEY, &self.budgets) {
            self.persist_warning = Some(e.to_string());
        }
    }
}

fn write_json<T: serde::Serialize>(
    store: &mut dyn KvStore,
    key: &str,
    value: &T,
) -> Result<(), LedgerError> {
    let raw = serde_json::to_string(value)
        .map_err(|e| LedgerError::Persistence(format!("serialize {key}: {e}")))?;
    store
        .set(key, &raw)
        .map_err(|e| LedgerError::Persistence(format!("write {key}: {e}")))
}

fn validate_fields(amount: Decimal, description: &str) -> Result<(), LedgerError> {
    if amount <= Decimal::ZERO {
        return Err(LedgerError::Validation(format!(
            "amount must be positive (got {amount})"
        )));
    }
    if description.trim().is_empty() {
        return Err(LedgerError::Validation(
            "description must not be blank".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests;
