//! Spending categories
//!
//! The category set is fixed. Serialized names match the display names
//! ("Food", "Rent", ...), which is also how budgets and alert flags are
//! keyed in persisted data.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the fixed spending categories
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Category {
    #[default]
    Food,
    Rent,
    Travel,
    Shopping,
    Other,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Rent,
        Category::Travel,
        Category::Shopping,
        Category::Other,
    ];

    /// Display name, identical to the serialized form
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Rent => "Rent",
            Self::Travel => "Travel",
            Self::Shopping => "Shopping",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| {
                format!(
                    "Unknown category '{}' (expected one of: {})",
                    s,
                    Self::ALL.map(|c| c.name()).join(", ")
                )
            })
    }
}
