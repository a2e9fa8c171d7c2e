use mealwise_shared::{MealPlanDay, MealType, NutrientTotal, Recipe};
use serde::{Deserialize, Serialize};

use crate::{MealPlanError, MealPlanResult, daily_nutrition, weekly_nutrition};

/// Ordered days of a planner, owned by the caller and edited between aggregations.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealPlan {
    pub days: Vec<MealPlanDay>,
}

impl From<Vec<MealPlanDay>> for MealPlan {
    fn from(days: Vec<MealPlanDay>) -> Self {
        Self { days }
    }
}

impl MealPlan {
    pub fn day(&self, day_id: &str) -> Option<&MealPlanDay> {
        self.days.iter().find(|day| day.id == day_id)
    }

    fn day_mut(&mut self, day_id: &str) -> MealPlanResult<&mut MealPlanDay> {
        self.days
            .iter_mut()
            .find(|day| day.id == day_id)
            .ok_or_else(|| MealPlanError::DayNotFound(day_id.to_owned()))
    }

    /// Append `recipe` at the end of the slot.
    pub fn add_recipe(
        &mut self,
        day_id: &str,
        meal_type: MealType,
        recipe: Recipe,
    ) -> MealPlanResult<()> {
        let day = self.day_mut(day_id)?;
        tracing::debug!(day = day_id, %meal_type, recipe = %recipe.id, "recipe added to plan");
        day.meals.slot_mut(meal_type).push(recipe);

        Ok(())
    }

    /// Drop every recipe with `recipe_id` from the slot and return how many were removed.
    pub fn remove_recipe(
        &mut self,
        day_id: &str,
        meal_type: MealType,
        recipe_id: &str,
    ) -> MealPlanResult<usize> {
        let slot = self.day_mut(day_id)?.meals.slot_mut(meal_type);
        let before = slot.len();
        slot.retain(|recipe| recipe.id != recipe_id);
        let removed = before - slot.len();
        tracing::debug!(
            day = day_id,
            %meal_type,
            recipe = recipe_id,
            removed,
            "recipe removed from plan"
        );

        Ok(removed)
    }

    pub fn daily_nutrition(&self, day_id: &str) -> MealPlanResult<NutrientTotal> {
        self.day(day_id)
            .map(daily_nutrition)
            .ok_or_else(|| MealPlanError::DayNotFound(day_id.to_owned()))
    }

    pub fn weekly_nutrition(&self) -> NutrientTotal {
        weekly_nutrition(&self.days)
    }
}
