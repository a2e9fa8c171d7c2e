use std::fmt::Write;

use anyhow::Result;
use mealwise_mealplan::{AxisProgress, MealPlan, NutritionProgress};
use mealwise_shared::NutrientTotal;

use crate::Catalog;

pub fn nutrition(catalog: &Catalog, day_id: Option<&str>) -> Result<String> {
    let plan = MealPlan::from(catalog.meal_plan.clone());
    let preferences = &catalog.user.preferences;
    let mut out = String::new();

    let days: Vec<_> = match day_id {
        Some(id) => {
            // Surface DayNotFound before printing anything
            plan.daily_nutrition(id)?;
            plan.days.iter().filter(|day| day.id == id).collect()
        }
        None => plan.days.iter().collect(),
    };

    for day in days {
        let total = plan.daily_nutrition(&day.id)?;
        let progress = NutritionProgress::against(total, preferences);

        writeln!(out, "{} ({})", day.day, day.date)?;
        writeln!(out, "  {}", format_total(&total))?;
        writeln!(out, "  {}", format_progress(&progress))?;
    }

    if day_id.is_none() {
        writeln!(out, "Week")?;
        writeln!(out, "  {}", format_total(&plan.weekly_nutrition()))?;
    }

    Ok(out)
}

fn format_total(total: &NutrientTotal) -> String {
    format!(
        "{:.0} kcal, {:.0} g protein, {:.0} g carbs, {:.0} g fat",
        total.calories, total.protein, total.carbs, total.fat
    )
}

fn format_axis(label: &str, axis: &AxisProgress) -> String {
    format!("{label} {}% ({:.0} left)", axis.percent, axis.remaining)
}

fn format_progress(progress: &NutritionProgress) -> String {
    [
        format_axis("calories", &progress.calories),
        format_axis("protein", &progress.protein),
        format_axis("carbs", &progress.carbs),
        format_axis("fat", &progress.fat),
    ]
    .join(", ")
}
