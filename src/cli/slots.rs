use std::fmt::Write;

use anyhow::Result;
use mealwise_mealplan::MealTypeColor;
use mealwise_shared::MealType;
use strum::VariantArray;

pub fn slots() -> Result<String> {
    let mut out = String::new();
    for meal_type in MealType::VARIANTS {
        writeln!(out, "{meal_type}\t{}", meal_type.color_token())?;
    }

    Ok(out)
}
