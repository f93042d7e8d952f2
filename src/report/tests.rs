#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::insights::{self, Severity};
use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn txn(id: i64, date: NaiveDate, amount: Decimal, category: Option<Category>) -> Transaction {
    Transaction {
        id,
        date,
        description: format!("txn {id}"),
        amount,
        category,
    }
}

// ── Monthly and category series ───────────────────────────────

#[test]
fn test_monthly_series_groups_by_month() {
    let txns = vec![
        txn(1, date(2024, 1, 15), dec!(500), Some(Category::Food)),
        txn(2, date(2024, 2, 10), dec!(600), Some(Category::Food)),
    ];
    let series = monthly_series(&txns);
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].period, "1/2024");
    assert_eq!(series[0].total, dec!(500));
    assert_eq!(series[1].period, "2/2024");
    assert_eq!(series[1].total, dec!(600));
}

#[test]
fn test_monthly_series_merges_same_period_and_sorts_across_years() {
    let txns = vec![
        txn(1, date(2024, 1, 2), dec!(10), None),
        txn(2, date(2023, 12, 31), dec!(5), None),
        txn(3, date(2024, 1, 20), dec!(30), None),
    ];
    let series = monthly_series(&txns);
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].period, "12/2023");
    assert_eq!(series[0].total, dec!(5));
    assert_eq!(series[1].period, "1/2024");
    assert_eq!(series[1].total, dec!(40));
}

#[test]
fn test_monthly_series_empty_input() {
    assert!(monthly_series(&[]).is_empty());
}

#[test]
fn test_category_series_drops_uncategorized_and_zero_buckets() {
    let txns = vec![
        txn(1, date(2024, 1, 15), dec!(500), Some(Category::Food)),
        txn(2, date(2024, 2, 10), dec!(600), Some(Category::Food)),
        txn(3, date(2024, 1, 20), dec!(75), None),
    ];
    let series = category_series(&txns);
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].category, Category::Food);
    assert_eq!(series[0].label, "Food & Dining");
    assert_eq!(series[0].total, dec!(1100));
    assert!(series.iter().all(|s| s.total > Decimal::ZERO));
}

#[test]
fn test_category_series_follows_declaration_order() {
    let txns = vec![
        txn(1, date(2024, 1, 1), dec!(20), Some(Category::Other)),
        txn(2, date(2024, 1, 2), dec!(30), Some(Category::Housing)),
        txn(3, date(2024, 1, 3), dec!(40), Some(Category::Food)),
    ];
    let series = category_series(&txns);
    let order: Vec<Category> = series.iter().map(|s| s.category).collect();
    assert_eq!(order, vec![Category::Housing, Category::Food, Category::Other]);
}

#[test]
fn test_total_matches_sum_of_monthly_series() {
    let txns = vec![
        txn(1, date(2024, 1, 15), dec!(500), Some(Category::Food)),
        txn(2, date(2024, 2, 10), dec!(600), Some(Category::Food)),
        txn(3, date(2024, 3, 1), dec!(12.34), None),
    ];
    let monthly_sum: Decimal = monthly_series(&txns).iter().map(|m| m.total).sum();
    assert_eq!(total_expenses(&txns), monthly_sum);
    assert_eq!(total_expenses(&txns), dec!(1112.34));
}

// ── Current month and recency ─────────────────────────────────

#[test]
fn test_current_month_filters_by_year_and_month() {
    let txns = vec![
        txn(1, date(2024, 1, 15), dec!(500), Some(Category::Food)),
        txn(2, date(2024, 2, 10), dec!(600), Some(Category::Food)),
        txn(3, date(2023, 2, 10), dec!(99), Some(Category::Food)),
    ];
    let current = current_month_transactions(&txns, date(2024, 2, 28));
    assert_eq!(current.len(), 1);
    assert_eq!(current[0].id, 2);
}

#[test]
fn test_recent_transactions_sorts_desc_and_truncates() {
    let txns = vec![
        txn(1, date(2024, 1, 1), dec!(10), None),
        txn(2, date(2024, 3, 1), dec!(20), None),
        txn(3, date(2024, 2, 1), dec!(30), None),
    ];
    let recent = recent_transactions(&txns, 2);
    let ids: Vec<i64> = recent.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[test]
fn test_recent_transactions_same_date_keeps_insertion_order() {
    let txns = vec![
        txn(1, date(2024, 1, 1), dec!(10), None),
        txn(2, date(2024, 1, 1), dec!(20), None),
    ];
    let recent = recent_transactions(&txns, 5);
    let ids: Vec<i64> = recent.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

// ── Budget comparison ─────────────────────────────────────────

#[test]
fn test_comparison_always_emits_every_category() {
    let comparison = budget_comparison(&Budgets::new(), &[]);
    assert_eq!(comparison.len(), Category::all().len());
    assert!(comparison
        .iter()
        .all(|line| line.budget == Decimal::ZERO && line.actual == Decimal::ZERO));
}

#[test]
fn test_comparison_difference_is_budget_minus_actual() {
    let mut budgets = Budgets::new();
    budgets.set(Category::Food, dec!(400));
    let actuals = category_series(&[txn(
        1,
        date(2024, 1, 5),
        dec!(450),
        Some(Category::Food),
    )]);
    let comparison = budget_comparison(&budgets, &actuals);

    let food = comparison
        .iter()
        .find(|l| l.category == Category::Food)
        .unwrap();
    assert_eq!(food.budget, dec!(400));
    assert_eq!(food.actual, dec!(450));
    assert_eq!(food.difference, dec!(-50));

    let housing = comparison
        .iter()
        .find(|l| l.category == Category::Housing)
        .unwrap();
    assert_eq!(housing.budget, Decimal::ZERO);
    assert_eq!(housing.actual, Decimal::ZERO);
}

// ── Insights ──────────────────────────────────────────────────

fn comparison_for(lines: &[(Category, Decimal, Decimal)]) -> Vec<BudgetLine> {
    let mut budgets = Budgets::new();
    let mut actuals = Vec::new();
    for &(category, budget, actual) in lines {
        budgets.set(category, budget);
        if actual > Decimal::ZERO {
            actuals.push(CategoryTotal {
                category,
                label: category.label(),
                color: category.color(),
                total: actual,
            });
        }
    }
    budget_comparison(&budgets, &actuals)
}

#[test]
fn test_untouched_budget_reports_full_surplus() {
    let comparison = comparison_for(&[(Category::Housing, dec!(1000), dec!(0))]);
    let findings = insights::generate(dec!(1000), dec!(0), &comparison);

    assert_eq!(findings[0].severity, Severity::Positive);
    assert_eq!(findings[0].title, "Budget Surplus");
    assert_eq!(
        findings[0].message,
        "You're under budget by $1000.00 (100.0% of total budget)"
    );
}

#[test]
fn test_overall_deficit_when_spending_exceeds_budget() {
    let comparison = comparison_for(&[(Category::Food, dec!(100), dec!(150))]);
    let findings = insights::generate(dec!(100), dec!(150), &comparison);

    assert_eq!(findings[0].severity, Severity::Negative);
    assert_eq!(findings[0].title, "Budget Deficit");
    assert_eq!(
        findings[0].message,
        "You're over budget by $50.00 (50.0% of total budget)"
    );
}

#[test]
fn test_no_findings_without_budgets() {
    let comparison = comparison_for(&[]);
    let findings = insights::generate(dec!(0), dec!(75), &comparison);
    assert!(findings.is_empty());
}

#[test]
fn test_overspend_fires_only_past_threshold() {
    // 30% over: fires.
    let comparison = comparison_for(&[(Category::Food, dec!(100), dec!(130))]);
    let findings = insights::generate(dec!(100), dec!(130), &comparison);
    let overspend = findings
        .iter()
        .find(|i| i.severity == Severity::Warning)
        .unwrap();
    assert_eq!(overspend.title, "Food & Dining Overspending");
    assert_eq!(
        overspend.message,
        "You've spent 30.0% more than your budget in Food & Dining"
    );

    // 15% over: below threshold, only the overall finding remains.
    let comparison = comparison_for(&[(Category::Food, dec!(100), dec!(115))]);
    let findings = insights::generate(dec!(100), dec!(115), &comparison);
    assert!(findings.iter().all(|i| i.severity != Severity::Warning));
}

#[test]
fn test_underspend_fires_only_past_threshold() {
    // 60% unused: fires.
    let comparison = comparison_for(&[(Category::Travel, dec!(100), dec!(40))]);
    let findings = insights::generate(dec!(100), dec!(40), &comparison);
    let underspend = findings
        .iter()
        .find(|i| i.severity == Severity::Info)
        .unwrap();
    assert_eq!(underspend.title, "Travel Underspending");
    assert_eq!(underspend.message, "You've only used 40.0% of your Travel budget");

    // 40% unused: below threshold.
    let comparison = comparison_for(&[(Category::Travel, dec!(100), dec!(60))]);
    let findings = insights::generate(dec!(100), dec!(60), &comparison);
    assert!(findings.iter().all(|i| i.severity != Severity::Info));
}

#[test]
fn test_category_findings_capped_at_three() {
    // Five categories all overspending well past the threshold.
    let comparison = comparison_for(&[
        (Category::Housing, dec!(100), dec!(200)),
        (Category::Food, dec!(100), dec!(200)),
        (Category::Travel, dec!(100), dec!(200)),
        (Category::Shopping, dec!(100), dec!(200)),
        (Category::Other, dec!(100), dec!(200)),
    ]);
    let findings = insights::generate(dec!(500), dec!(1000), &comparison);

    // One overall finding plus at most three per-category ones.
    assert_eq!(findings.len(), 4);
    assert_eq!(findings[0].title, "Budget Deficit");
    assert!(findings[1..].iter().all(|i| i.severity == Severity::Warning));
}

#[test]
fn test_warnings_sort_before_info() {
    let comparison = comparison_for(&[
        (Category::Housing, dec!(100), dec!(10)), // 90% unused → info
        (Category::Food, dec!(100), dec!(200)),   // 100% over → warning
    ]);
    let findings = insights::generate(dec!(200), dec!(210), &comparison);

    let ranks: Vec<u8> = findings[1..].iter().map(|i| i.severity.rank()).collect();
    let mut sorted = ranks.clone();
    sorted.sort_unstable();
    assert_eq!(ranks, sorted);
    assert_eq!(findings[1].severity, Severity::Warning);
    assert_eq!(findings[2].severity, Severity::Info);
}
