//! Grocery records and their category enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::database::Bank;
use crate::item::{normalize_name, ItemController, Record};

/// Controller over the `"grocery bank"` collection.
pub type GroceryController = ItemController<GroceryItem>;

/// Aisle a grocery item belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Produce,
    Dairy,
    Meat,
    Pantry,
    Frozen,
    Beverage,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Produce,
        Category::Dairy,
        Category::Meat,
        Category::Pantry,
        Category::Frozen,
        Category::Beverage,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Produce => "produce",
            Category::Dairy => "dairy",
            Category::Meat => "meat",
            Category::Pantry => "pantry",
            Category::Frozen => "frozen",
            Category::Beverage => "beverage",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Case-insensitive match on the lowercase name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                format!(
                    "unknown category '{}'. Valid categories: {}",
                    s,
                    Category::ALL.map(Category::as_str).join(", ")
                )
            })
    }
}

/// One entry of the grocery bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryItem {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Category")]
    pub category: Category,
}

impl GroceryItem {
    /// Build an item from name tokens, e.g. `["chili", "powder"]`.
    pub fn new<S: AsRef<str>>(name: &[S], category: Category) -> Self {
        Self {
            name: normalize_name(name),
            category,
        }
    }
}

impl Record for GroceryItem {
    const BANK: Bank = Bank::Groceries;

    fn name(&self) -> &str {
        &self.name
    }

    fn normalized(self) -> Self {
        Self {
            name: normalize_name(&[self.name]),
            category: self.category,
        }
    }
}
