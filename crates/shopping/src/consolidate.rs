use std::collections::HashMap;
use std::fmt;

use mealwise_shared::{Ingredient, MealPlanDay};
use serde::Serialize;

/// Where a consolidated line lives.
///
/// The first unit seen for a name owns the plain key; any other unit of the same
/// name gets its own composite key instead of being summed across units.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GroceryKey {
    Plain { name: String },
    Composite { name: String, unit: String },
}

impl fmt::Display for GroceryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroceryKey::Plain { name } => f.write_str(name),
            GroceryKey::Composite { name, unit } => write!(f, "{name} ({unit})"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GroceryEntry {
    pub key: GroceryKey,
    pub name: String,
    pub amount: f64,
    pub unit: String,
    pub checked: bool,
}

impl GroceryEntry {
    fn new(key: GroceryKey, ingredient: &Ingredient) -> Self {
        Self {
            key,
            name: ingredient.name.to_owned(),
            amount: ingredient.amount,
            unit: ingredient.unit.to_owned(),
            checked: false,
        }
    }

    /// Display name: `"flour"` for the plain line, `"flour (g)"` for a composite one.
    pub fn label(&self) -> String {
        self.key.to_string()
    }
}

/// Merge every ingredient of the plan into one shopping list.
///
/// Walks days in order, then breakfast/lunch/dinner/snack, then recipes, and keeps
/// the lines in first-encounter order. Amounts only add up under the same unit.
#[tracing::instrument(skip_all, fields(days = days.len()))]
pub fn generate_grocery_list(days: &[MealPlanDay]) -> Vec<GroceryEntry> {
    let mut entries: Vec<GroceryEntry> = Vec::new();
    let mut index: HashMap<GroceryKey, usize> = HashMap::new();

    let ingredients = days
        .iter()
        .flat_map(MealPlanDay::recipes)
        .flat_map(|recipe| recipe.ingredients.iter());

    for ingredient in ingredients {
        let plain = GroceryKey::Plain {
            name: ingredient.name.to_owned(),
        };

        let key = match index.get(&plain) {
            Some(&position) if entries[position].unit == ingredient.unit => {
                entries[position].amount += ingredient.amount;
                continue;
            }
            Some(_) => GroceryKey::Composite {
                name: ingredient.name.to_owned(),
                unit: ingredient.unit.to_owned(),
            },
            None => plain,
        };

        match index.get(&key) {
            Some(&position) => entries[position].amount += ingredient.amount,
            None => {
                tracing::debug!(%key, "new grocery line");
                index.insert(key.clone(), entries.len());
                entries.push(GroceryEntry::new(key, ingredient));
            }
        }
    }

    entries
}
