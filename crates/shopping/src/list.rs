use std::collections::BTreeMap;

use mealwise_shared::{GroceryCategory, GroceryItem};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::{GroceryEntry, ShoppingError, ShoppingResult, categorize};

/// What the add-item form submits.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct NewGroceryItem {
    pub name: String,
    pub amount: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub category: GroceryCategory,
}

/// A user's shopping list, in the order items were added.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroceryList {
    items: Vec<GroceryItem>,
}

impl From<Vec<GroceryItem>> for GroceryList {
    fn from(items: Vec<GroceryItem>) -> Self {
        Self { items }
    }
}

impl GroceryList {
    /// Turn consolidated plan entries into list items, keeping their order.
    pub fn from_entries(entries: Vec<GroceryEntry>) -> Self {
        let items = entries
            .into_iter()
            .map(|entry| GroceryItem {
                id: Ulid::new().to_string(),
                category: categorize(&entry.name),
                name: entry.label(),
                amount: entry.amount,
                unit: entry.unit,
                checked: entry.checked,
            })
            .collect();

        Self { items }
    }

    pub fn items(&self) -> &[GroceryItem] {
        &self.items
    }

    /// Append an item. The amount falls back to 1 when it is not a positive number.
    pub fn add_item(&mut self, input: NewGroceryItem) -> ShoppingResult<&GroceryItem> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(ShoppingError::EmptyName);
        }

        let amount = if input.amount.is_finite() && input.amount > 0.0 {
            input.amount
        } else {
            1.0
        };

        let item = GroceryItem {
            id: Ulid::new().to_string(),
            name: name.to_owned(),
            amount,
            unit: input.unit.trim().to_owned(),
            checked: false,
            category: input.category,
        };
        tracing::info!(id = %item.id, name = %item.name, "grocery item added");
        self.items.push(item);

        Ok(&self.items[self.items.len() - 1])
    }

    /// Flip the checked flag and return its new value.
    pub fn toggle(&mut self, id: &str) -> ShoppingResult<bool> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| ShoppingError::ItemNotFound(id.to_owned()))?;

        item.checked = !item.checked;
        Ok(item.checked)
    }

    pub fn remove(&mut self, id: &str) -> ShoppingResult<GroceryItem> {
        let position = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| ShoppingError::ItemNotFound(id.to_owned()))?;

        Ok(self.items.remove(position))
    }

    /// Remove every checked item and hand them back.
    pub fn clear_checked(&mut self) -> Vec<GroceryItem> {
        let (checked, remaining) = std::mem::take(&mut self.items)
            .into_iter()
            .partition(|item| item.checked);
        self.items = remaining;

        tracing::info!(cleared = checked.len(), "checked grocery items cleared");
        checked
    }

    pub fn by_category(&self) -> BTreeMap<GroceryCategory, Vec<&GroceryItem>> {
        let mut groups: BTreeMap<GroceryCategory, Vec<&GroceryItem>> = BTreeMap::new();
        for item in &self.items {
            groups.entry(item.category).or_default().push(item);
        }

        groups
    }

    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|item| item.checked).count()
    }

    pub fn remaining_count(&self) -> usize {
        self.items.len() - self.checked_count()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
