use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Category;

/// Per-category monthly spending limits. Categories absent from the map read
/// as a zero limit; the map is replaced wholesale on save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct Budgets(BTreeMap<Category, Decimal>);

impl Budgets {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Built-in limits used on first run, before the user saves anything.
    pub(crate) fn default_limits() -> Self {
        let mut budgets = Self::new();
        let defaults = [
            (Category::Housing, 1000),
            (Category::Transportation, 300),
            (Category::Food, 400),
            (Category::Utilities, 200),
            (Category::Entertainment, 150),
            (Category::Healthcare, 100),
            (Category::Shopping, 200),
            (Category::Education, 100),
            (Category::Personal, 100),
            (Category::Travel, 200),
            (Category::Debt, 300),
            (Category::Savings, 400),
            (Category::Gifts, 100),
            (Category::Other, 100),
        ];
        for (category, limit) in defaults {
            budgets.set(category, Decimal::from(limit));
        }
        budgets
    }

    pub(crate) fn limit(&self, category: Category) -> Decimal {
        self.0.get(&category).copied().unwrap_or(Decimal::ZERO)
    }

    pub(crate) fn set(&mut self, category: Category, limit: Decimal) {
        self.0.insert(category, limit);
    }

    /// Sum of all limits across the map.
    pub(crate) fn total(&self) -> Decimal {
        self.0.values().sum()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (Category, Decimal)> + '_ {
        self.0.iter().map(|(c, v)| (*c, *v))
    }
}
