use std::fmt::Write;

use anyhow::Result;
use mealwise_shopping::{GroceryList, generate_grocery_list};

use crate::Catalog;

fn format_line(label: &str, amount: f64, unit: &str) -> String {
    if unit.is_empty() {
        format!("{label}: {amount}")
    } else {
        format!("{label}: {amount} {unit}")
    }
}

pub fn groceries(catalog: &Catalog, by_category: bool) -> Result<String> {
    let entries = generate_grocery_list(&catalog.meal_plan);
    let mut out = String::new();

    if !by_category {
        for entry in &entries {
            writeln!(out, "- {}", format_line(&entry.label(), entry.amount, &entry.unit))?;
        }
        return Ok(out);
    }

    let list = GroceryList::from_entries(entries);
    for (category, items) in list.by_category() {
        writeln!(out, "{category}")?;
        for item in items {
            writeln!(out, "  - {}", format_line(&item.name, item.amount, &item.unit))?;
        }
    }

    Ok(out)
}
