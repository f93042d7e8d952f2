//! Pure aggregation over ledger snapshots. Every function here is
//! deterministic in its inputs and never mutates the collections; the UI
//! re-derives these views after each mutation instead of caching them.

pub(crate) mod insights;

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{Budgets, Category, Transaction};

/// One calendar month's spending. `period` is formatted `"{month}/{year}"`
/// with the month 1-12, not zero-padded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MonthlyTotal {
    pub(crate) period: String,
    pub(crate) total: Decimal,
}

/// Spending bucket for one category. Only strictly positive totals are ever
/// emitted; the category key is carried so consumers never reverse-map labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CategoryTotal {
    pub(crate) category: Category,
    pub(crate) label: &'static str,
    pub(crate) color: &'static str,
    pub(crate) total: Decimal,
}

/// Budget-vs-actual row. Unlike `category_series`, the comparison enumerates
/// every known category, including all-zero ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BudgetLine {
    pub(crate) category: Category,
    pub(crate) budget: Decimal,
    pub(crate) actual: Decimal,
    pub(crate) difference: Decimal,
}

/// Group transactions by (year, month) of their date, summing amounts.
/// Output is ascending by year then month; equal periods are merged.
pub(crate) fn monthly_series(transactions: &[Transaction]) -> Vec<MonthlyTotal> {
    let mut buckets: BTreeMap<(i32, u32), Decimal> = BTreeMap::new();
    for txn in transactions {
        *buckets
            .entry((txn.date.year(), txn.date.month()))
            .or_insert(Decimal::ZERO) += txn.amount;
    }
    buckets
        .into_iter()
        .map(|((year, month), total)| MonthlyTotal {
            period: format!("{month}/{year}"),
            total,
        })
        .collect()
}

/// Spending per category in declaration order, dropping uncategorized
/// transactions and categories whose total is not strictly positive.
pub(crate) fn category_series(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    Category::all()
        .iter()
        .filter_map(|&category| {
            let total: Decimal = transactions
                .iter()
                .filter(|t| t.category == Some(category))
                .map(|t| t.amount)
                .sum();
            (total > Decimal::ZERO).then(|| CategoryTotal {
                category,
                label: category.label(),
                color: category.color(),
                total,
            })
        })
        .collect()
}

/// Transactions in the same calendar month and year as `today`. The reference
/// date is injected rather than read from the clock, keeping this pure.
pub(crate) fn current_month_transactions(
    transactions: &[Transaction],
    today: NaiveDate,
) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| t.date.year() == today.year() && t.date.month() == today.month())
        .cloned()
        .collect()
}

/// One row per known category, always all of them, with
/// `difference = budget - actual`. `actuals` is typically the output of
/// `category_series` over whichever slice the caller is comparing.
pub(crate) fn budget_comparison(budgets: &Budgets, actuals: &[CategoryTotal]) -> Vec<BudgetLine> {
    Category::all()
        .iter()
        .map(|&category| {
            let actual = actuals
                .iter()
                .find(|a| a.category == category)
                .map(|a| a.total)
                .unwrap_or(Decimal::ZERO);
            let budget = budgets.limit(category);
            BudgetLine {
                category,
                budget,
                actual,
                difference: budget - actual,
            }
        })
        .collect()
}

/// Sum of all transaction amounts, no filtering.
pub(crate) fn total_expenses(transactions: &[Transaction]) -> Decimal {
    transactions.iter().map(|t| t.amount).sum()
}

/// Most recent transactions first, truncated to `count`. The sort is stable
/// so same-date entries keep their insertion order.
pub(crate) fn recent_transactions(transactions: &[Transaction], count: usize) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(count);
    sorted
}

#[cfg(test)]
mod tests;
