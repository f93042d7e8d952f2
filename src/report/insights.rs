//! Heuristic budget-adherence findings derived from the comparison rows.

use rust_decimal::Decimal;

use super::BudgetLine;

const OVERSPEND_THRESHOLD: u32 = 20;
const UNDERSPEND_THRESHOLD: u32 = 50;
const CATEGORY_INSIGHT_CAP: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Severity {
    Warning,
    Negative,
    Positive,
    Info,
}

impl Severity {
    /// Display priority for category insights; lower sorts first. The order
    /// (warning, negative, positive, info) is deliberately asymmetric and
    /// user-visible, so it is kept as-is.
    pub(crate) fn rank(&self) -> u8 {
        match self {
            Self::Warning => 1,
            Self::Negative => 2,
            Self::Positive => 3,
            Self::Info => 4,
        }
    }

    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Negative => "negative",
            Self::Positive => "positive",
            Self::Info => "info",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Insight {
    pub(crate) severity: Severity,
    pub(crate) title: String,
    pub(crate) message: String,
}

/// Build the ranked, capped insight list: an overall surplus/deficit finding
/// (only when any budget is set, to avoid dividing by zero) followed by at
/// most three per-category findings sorted by severity rank.
pub(crate) fn generate(
    total_budget: Decimal,
    total_actual: Decimal,
    comparison: &[BudgetLine],
) -> Vec<Insight> {
    let mut insights = Vec::new();

    if total_budget > Decimal::ZERO {
        let difference = total_budget - total_actual;
        let pct = difference.abs() / total_budget * Decimal::ONE_HUNDRED;
        if difference >= Decimal::ZERO {
            insights.push(Insight {
                severity: Severity::Positive,
                title: "Budget Surplus".into(),
                message: format!(
                    "You're under budget by ${difference:.2} ({pct:.1}% of total budget)"
                ),
            });
        } else {
            insights.push(Insight {
                severity: Severity::Negative,
                title: "Budget Deficit".into(),
                message: format!(
                    "You're over budget by ${:.2} ({pct:.1}% of total budget)",
                    difference.abs()
                ),
            });
        }
    }

    let mut category_insights: Vec<Insight> = Vec::new();
    for line in comparison {
        if line.budget <= Decimal::ZERO {
            continue;
        }
        let label = line.category.label();
        let pct = line.difference.abs() / line.budget * Decimal::ONE_HUNDRED;
        if line.difference < Decimal::ZERO && pct > Decimal::from(OVERSPEND_THRESHOLD) {
            category_insights.push(Insight {
                severity: Severity::Warning,
                title: format!("{label} Overspending"),
                message: format!("You've spent {pct:.1}% more than your budget in {label}"),
            });
        } else if line.difference > Decimal::ZERO && pct > Decimal::from(UNDERSPEND_THRESHOLD) {
            category_insights.push(Insight {
                severity: Severity::Info,
                title: format!("{label} Underspending"),
                message: format!(
                    "You've only used {:.1}% of your {label} budget",
                    Decimal::ONE_HUNDRED - pct
                ),
            });
        }
    }

    // Stable sort: categories at equal severity keep declaration order.
    category_insights.sort_by_key(|i| i.severity.rank());
    category_insights.truncate(CATEGORY_INSIGHT_CAP);
    insights.extend(category_insights);
    insights
}
