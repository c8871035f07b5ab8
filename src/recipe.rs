//! Recipe records.

use serde::{Deserialize, Serialize};

use crate::database::Bank;
use crate::item::{normalize_name, ItemController, Record};

/// Controller over the `"recipe bank"` collection.
pub type RecipeController = ItemController<Recipe>;

/// One entry of the recipe bank. The link is stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Link")]
    pub link: String,
}

impl Recipe {
    pub fn new<S: AsRef<str>>(name: &[S], link: impl Into<String>) -> Self {
        Self {
            name: normalize_name(name),
            link: link.into(),
        }
    }
}

impl Record for Recipe {
    const BANK: Bank = Bank::Recipes;

    fn name(&self) -> &str {
        &self.name
    }

    fn normalized(self) -> Self {
        Self {
            name: normalize_name(&[self.name]),
            link: self.link,
        }
    }
}
