//! Expense categories
//!
//! A fixed category set shared by manual entry, CSV import, and receipt
//! scanning. `Other` is the fallback whenever classification finds no hint.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed expense category set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Groceries,
    Transport,
    Home,
    Utilities,
    Entertainment,
    Shopping,
    Health,
    Travel,
    Gifts,
    #[default]
    Other,
}

impl Category {
    /// All categories in display order
    pub const ALL: &'static [Category] = &[
        Self::Food,
        Self::Groceries,
        Self::Transport,
        Self::Home,
        Self::Utilities,
        Self::Entertainment,
        Self::Shopping,
        Self::Health,
        Self::Travel,
        Self::Gifts,
        Self::Other,
    ];

    /// Stable identifier used in storage and CSV matching
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Groceries => "groceries",
            Self::Transport => "transport",
            Self::Home => "home",
            Self::Utilities => "utilities",
            Self::Entertainment => "entertainment",
            Self::Shopping => "shopping",
            Self::Health => "health",
            Self::Travel => "travel",
            Self::Gifts => "gifts",
            Self::Other => "other",
        }
    }

    /// Human-readable label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Food => "Food & Dining",
            Self::Groceries => "Groceries",
            Self::Transport => "Transport",
            Self::Home => "Home",
            Self::Utilities => "Utilities",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::Health => "Health",
            Self::Travel => "Travel",
            Self::Gifts => "Gifts",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
