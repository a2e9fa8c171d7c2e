use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use validator::Validate;

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum GroceryCategory {
    /// Fresh fruit, vegetables and herbs
    Produce,
    /// Milk, cheese, yogurt, eggs
    Dairy,
    Meat,
    Seafood,
    Bakery,
    /// Rice, pasta, flour, cereals
    Grains,
    #[strum(serialize = "canned goods")]
    #[serde(rename = "canned goods")]
    CannedGoods,
    Frozen,
    Snacks,
    Beverages,
    #[default]
    Other,
}

/// Categories sort by their display name, which is how the grocery page lists them.
impl Ord for GroceryCategory {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_ref().cmp(other.as_ref())
    }
}

impl PartialOrd for GroceryCategory {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
pub struct GroceryItem {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 0.0))]
    pub amount: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub category: GroceryCategory,
}
