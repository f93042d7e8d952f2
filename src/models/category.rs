use serde::{Deserialize, Serialize};

/// Fixed expense classification. The set is closed: budgets, charts and
/// insights all enumerate these 14 variants and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Category {
    Housing,
    Transportation,
    Food,
    Utilities,
    Entertainment,
    Healthcare,
    Shopping,
    Education,
    Personal,
    Travel,
    Debt,
    Savings,
    Gifts,
    Other,
}

impl Category {
    /// All categories in declaration order. Derived views that enumerate
    /// categories iterate in this order so output stays reproducible.
    pub(crate) fn all() -> &'static [Category] {
        &[
            Self::Housing,
            Self::Transportation,
            Self::Food,
            Self::Utilities,
            Self::Entertainment,
            Self::Healthcare,
            Self::Shopping,
            Self::Education,
            Self::Personal,
            Self::Travel,
            Self::Debt,
            Self::Savings,
            Self::Gifts,
            Self::Other,
        ]
    }

    /// Stable identifier used as the serialized form and in commands.
    pub(crate) fn key(&self) -> &'static str {
        match self {
            Self::Housing => "housing",
            Self::Transportation => "transportation",
            Self::Food => "food",
            Self::Utilities => "utilities",
            Self::Entertainment => "entertainment",
            Self::Healthcare => "healthcare",
            Self::Shopping => "shopping",
            Self::Education => "education",
            Self::Personal => "personal",
            Self::Travel => "travel",
            Self::Debt => "debt",
            Self::Savings => "savings",
            Self::Gifts => "gifts",
            Self::Other => "other",
        }
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Housing => "Housing",
            Self::Transportation => "Transportation",
            Self::Food => "Food & Dining",
            Self::Utilities => "Utilities",
            Self::Entertainment => "Entertainment",
            Self::Healthcare => "Healthcare",
            Self::Shopping => "Shopping",
            Self::Education => "Education",
            Self::Personal => "Personal Care",
            Self::Travel => "Travel",
            Self::Debt => "Debt Payments",
            Self::Savings => "Savings & Investments",
            Self::Gifts => "Gifts & Donations",
            Self::Other => "Other",
        }
    }

    /// Presentation color as a `#RRGGBB` hex string.
    pub(crate) fn color(&self) -> &'static str {
        match self {
            Self::Housing => "#FF8042",
            Self::Transportation => "#0088FE",
            Self::Food => "#00C49F",
            Self::Utilities => "#FFBB28",
            Self::Entertainment => "#FF8042",
            Self::Healthcare => "#8884d8",
            Self::Shopping => "#82ca9d",
            Self::Education => "#8dd1e1",
            Self::Personal => "#a4de6c",
            Self::Travel => "#d0ed57",
            Self::Debt => "#ffc658",
            Self::Savings => "#8884d8",
            Self::Gifts => "#83a6ed",
            Self::Other => "#CBD5E0",
        }
    }

    /// Parse a category from its key (case-insensitive). The display label is
    /// accepted too, so `:budget Food & Dining 400` works as well as
    /// `:budget food 400`.
    pub(crate) fn parse(s: &str) -> Option<Category> {
        let lower = s.trim().to_lowercase();
        Self::all()
            .iter()
            .find(|c| c.key() == lower || c.label().to_lowercase() == lower)
            .copied()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
