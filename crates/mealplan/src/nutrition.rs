use mealwise_shared::{MealPlanDay, NutrientTotal};

/// Sum calories, protein, carbs and fat over every recipe of the day's four slots.
///
/// A day without recipes yields [`NutrientTotal::ZERO`].
pub fn daily_nutrition(day: &MealPlanDay) -> NutrientTotal {
    day.recipes()
        .map(|recipe| NutrientTotal::from(&recipe.nutrients))
        .sum()
}

/// Sum of [`daily_nutrition`] over the given days.
#[tracing::instrument(skip_all, fields(days = days.len()))]
pub fn weekly_nutrition(days: &[MealPlanDay]) -> NutrientTotal {
    let total = days.iter().map(daily_nutrition).sum();
    tracing::debug!(?total, "weekly nutrition aggregated");
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealwise_shared::{Nutrients, Recipe};

    fn recipe(calories: f64, protein: f64, carbs: f64, fat: f64) -> Recipe {
        Recipe {
            id: format!("r-{calories}"),
            title: "test".to_string(),
            servings: 1,
            nutrients: Nutrients {
                calories,
                protein,
                carbs,
                fat,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_day_is_zero() {
        let day = MealPlanDay::new("day5", "Friday", "2025-04-28");
        assert_eq!(daily_nutrition(&day), NutrientTotal::ZERO);
    }

    #[test]
    fn test_daily_sums_all_slots() {
        let mut day = MealPlanDay::new("day1", "Monday", "2025-04-24");
        day.meals.breakfast.push(recipe(350.0, 15.0, 30.0, 22.0));
        day.meals.lunch.push(recipe(380.0, 12.0, 45.0, 18.0));
        day.meals.dinner.push(recipe(420.0, 40.0, 8.0, 25.0));
        day.meals.snack.push(recipe(280.0, 20.0, 35.0, 8.0));

        let total = daily_nutrition(&day);
        assert_eq!(
            total,
            NutrientTotal {
                calories: 1430.0,
                protein: 87.0,
                carbs: 118.0,
                fat: 73.0,
            }
        );
    }

    #[test]
    fn test_same_recipe_twice_in_a_slot_counts_twice() {
        let mut day = MealPlanDay::new("day1", "Monday", "2025-04-24");
        day.meals.snack.push(recipe(100.0, 1.0, 2.0, 3.0));
        day.meals.snack.push(recipe(100.0, 1.0, 2.0, 3.0));

        assert_eq!(daily_nutrition(&day).calories, 200.0);
    }

    #[test]
    fn test_weekly_of_no_days_is_zero() {
        assert_eq!(weekly_nutrition(&[]), NutrientTotal::ZERO);
    }
}
