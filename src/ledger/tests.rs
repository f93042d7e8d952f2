#![allow(clippy::unwrap_used)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::*;
use crate::models::Category;
use crate::store::MemoryStore;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn draft(description: &str) -> TransactionDraft {
    TransactionDraft {
        date: date(2024, 1, 15),
        description: description.into(),
        amount: dec!(45.50),
        category: Some(Category::Food),
    }
}

fn empty_ledger() -> Ledger {
    Ledger::load(Box::new(MemoryStore::new()))
}

/// Store backed by shared state so a test can inspect what was written.
#[derive(Clone)]
struct SharedStore(Rc<RefCell<HashMap<String, String>>>);

impl SharedStore {
    fn new() -> Self {
        Self(Rc::new(RefCell::new(HashMap::new())))
    }
}

impl KvStore for SharedStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.0.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.0.borrow_mut().insert(key.into(), value.into());
        Ok(())
    }
}

/// Store whose writes always fail. Reads behave as empty.
struct FailingStore;

impl KvStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
        anyhow::bail!("disk full")
    }
}

// ── Hydration ─────────────────────────────────────────────────

#[test]
fn test_load_empty_store_uses_defaults() {
    let ledger = empty_ledger();
    assert!(ledger.transactions().is_empty());
    assert_eq!(ledger.budgets(), &Budgets::default_limits());
}

#[test]
fn test_load_hydrates_stored_collections() {
    let mut store = MemoryStore::new();
    store
        .set(
            "transactions",
            r#"[{"id":5,"date":"2024-02-10","description":"Rent","amount":"600","category":"housing"}]"#,
        )
        .unwrap();
    store.set("budgets", r#"{"food":"250"}"#).unwrap();

    let ledger = Ledger::load(Box::new(store));
    assert_eq!(ledger.transactions().len(), 1);
    assert_eq!(ledger.transactions()[0].id, 5);
    assert_eq!(ledger.transactions()[0].category, Some(Category::Housing));
    assert_eq!(ledger.budgets().limit(Category::Food), dec!(250));
    assert_eq!(ledger.budgets().limit(Category::Housing), dec!(0));
}

#[test]
fn test_load_falls_back_on_garbage_payloads() {
    let mut store = MemoryStore::with_entry("transactions", "not json");
    store.set("budgets", "{broken").unwrap();

    let ledger = Ledger::load(Box::new(store));
    assert!(ledger.transactions().is_empty());
    assert_eq!(ledger.budgets(), &Budgets::default_limits());
}

// ── Transactions ──────────────────────────────────────────────

#[test]
fn test_add_assigns_unique_increasing_ids() {
    let mut ledger = empty_ledger();
    let a = ledger.add_transaction(draft("First")).unwrap();
    let b = ledger.add_transaction(draft("Second")).unwrap();
    assert!(b > a);
    assert_eq!(ledger.transactions().len(), 2);
}

#[test]
fn test_add_rejects_non_positive_amount() {
    let mut ledger = empty_ledger();
    let mut zero = draft("Zero");
    zero.amount = dec!(0);
    assert!(matches!(
        ledger.add_transaction(zero),
        Err(LedgerError::Validation(_))
    ));

    let mut negative = draft("Negative");
    negative.amount = dec!(-5);
    assert!(matches!(
        ledger.add_transaction(negative),
        Err(LedgerError::Validation(_))
    ));
    assert!(ledger.transactions().is_empty());
}

#[test]
fn test_add_rejects_blank_description() {
    let mut ledger = empty_ledger();
    assert!(matches!(
        ledger.add_transaction(draft("   ")),
        Err(LedgerError::Validation(_))
    ));
    assert!(ledger.transactions().is_empty());
}

#[test]
fn test_add_then_delete_round_trips() {
    let mut ledger = empty_ledger();
    let id = ledger.add_transaction(draft("Groceries")).unwrap();
    ledger.delete_transaction(id).unwrap();
    assert!(ledger.transactions().is_empty());
}

#[test]
fn test_delete_unknown_id_leaves_collection_unchanged() {
    let mut ledger = empty_ledger();
    let id = ledger.add_transaction(draft("Keep me")).unwrap();
    assert!(matches!(
        ledger.delete_transaction(id + 1),
        Err(LedgerError::NotFound(_))
    ));
    assert_eq!(ledger.transactions().len(), 1);
}

#[test]
fn test_update_replaces_whole_record() {
    let mut ledger = empty_ledger();
    let id = ledger.add_transaction(draft("Old name")).unwrap();

    let mut record = ledger.transactions()[0].clone();
    record.description = "New name".into();
    record.amount = dec!(99.99);
    record.category = None;
    ledger.update_transaction(record).unwrap();

    let updated = &ledger.transactions()[0];
    assert_eq!(updated.id, id);
    assert_eq!(updated.description, "New name");
    assert_eq!(updated.amount, dec!(99.99));
    assert_eq!(updated.category, None);
}

#[test]
fn test_update_unknown_id_is_not_found() {
    let mut ledger = empty_ledger();
    ledger.add_transaction(draft("Only one")).unwrap();
    let mut record = ledger.transactions()[0].clone();
    record.id += 1;
    assert!(matches!(
        ledger.update_transaction(record),
        Err(LedgerError::NotFound(_))
    ));
    assert_eq!(ledger.transactions()[0].description, "Only one");
}

#[test]
fn test_update_revalidates_fields() {
    let mut ledger = empty_ledger();
    ledger.add_transaction(draft("Valid")).unwrap();
    let mut record = ledger.transactions()[0].clone();
    record.amount = dec!(-1);
    assert!(matches!(
        ledger.update_transaction(record),
        Err(LedgerError::Validation(_))
    ));
    assert_eq!(ledger.transactions()[0].amount, dec!(45.50));
}

// ── Budgets ───────────────────────────────────────────────────

#[test]
fn test_save_budgets_replaces_map() {
    let mut ledger = empty_ledger();
    let mut budgets = Budgets::new();
    budgets.set(Category::Travel, dec!(800));
    ledger.save_budgets(budgets).unwrap();
    assert_eq!(ledger.budgets().limit(Category::Travel), dec!(800));
    assert_eq!(ledger.budgets().limit(Category::Food), dec!(0));
}

#[test]
fn test_save_budgets_rejects_negative_limits() {
    let mut ledger = empty_ledger();
    let before = ledger.budgets().clone();
    let mut budgets = Budgets::new();
    budgets.set(Category::Food, dec!(-10));
    assert!(matches!(
        ledger.save_budgets(budgets),
        Err(LedgerError::Validation(_))
    ));
    assert_eq!(ledger.budgets(), &before);
}

// ── Persistence ───────────────────────────────────────────────

#[test]
fn test_mutations_are_written_through() {
    let store = SharedStore::new();
    let mut ledger = Ledger::load(Box::new(store.clone()));

    ledger.add_transaction(draft("Groceries")).unwrap();
    let mut budgets = Budgets::new();
    budgets.set(Category::Food, dec!(400));
    ledger.save_budgets(budgets).unwrap();

    let entries = store.0.borrow();
    let raw_txns = entries.get("transactions").unwrap();
    assert!(raw_txns.contains("Groceries"));
    assert_eq!(entries.get("budgets").unwrap(), r#"{"food":"400"}"#);
}

#[test]
fn test_persisted_state_round_trips_through_load() {
    let store = SharedStore::new();
    {
        let mut ledger = Ledger::load(Box::new(store.clone()));
        ledger.add_transaction(draft("Groceries")).unwrap();
    }

    let reloaded = Ledger::load(Box::new(store));
    assert_eq!(reloaded.transactions().len(), 1);
    assert_eq!(reloaded.transactions()[0].description, "Groceries");
    assert_eq!(reloaded.transactions()[0].amount, dec!(45.50));
}

#[test]
fn test_failed_save_keeps_mutation_and_sets_warning() {
    let mut ledger = Ledger::load(Box::new(FailingStore));
    let id = ledger.add_transaction(draft("Groceries")).unwrap();

    assert_eq!(ledger.transactions().len(), 1);
    assert_eq!(ledger.transactions()[0].id, id);
    let warning = ledger.take_persist_warning().unwrap();
    assert!(warning.contains("disk full"));
    assert_eq!(ledger.take_persist_warning(), None);
}
