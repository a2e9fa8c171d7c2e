use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use validator::Validate;

use crate::recipe::Recipe;

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
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
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

/// The four fixed slots of a day, each holding recipes in the order they were added.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct Meals {
    #[serde(default)]
    #[validate(nested)]
    pub breakfast: Vec<Recipe>,
    #[serde(default)]
    #[validate(nested)]
    pub lunch: Vec<Recipe>,
    #[serde(default)]
    #[validate(nested)]
    pub dinner: Vec<Recipe>,
    #[serde(default)]
    #[validate(nested)]
    pub snack: Vec<Recipe>,
}

impl Meals {
    pub fn slot(&self, meal_type: MealType) -> &[Recipe] {
        match meal_type {
            MealType::Breakfast => &self.breakfast,
            MealType::Lunch => &self.lunch,
            MealType::Dinner => &self.dinner,
            MealType::Snack => &self.snack,
        }
    }

    pub fn slot_mut(&mut self, meal_type: MealType) -> &mut Vec<Recipe> {
        match meal_type {
            MealType::Breakfast => &mut self.breakfast,
            MealType::Lunch => &mut self.lunch,
            MealType::Dinner => &mut self.dinner,
            MealType::Snack => &mut self.snack,
        }
    }

    /// Every recipe of the day, breakfast first and snack last.
    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        MealType::VARIANTS
            .iter()
            .flat_map(move |meal_type| self.slot(*meal_type).iter())
    }

    pub fn is_empty(&self) -> bool {
        MealType::VARIANTS
            .iter()
            .all(|meal_type| self.slot(*meal_type).is_empty())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct MealPlanDay {
    #[validate(length(min = 1))]
    pub id: String,
    pub day: String,
    pub date: String,
    #[serde(default)]
    #[validate(nested)]
    pub meals: Meals,
}

impl MealPlanDay {
    pub fn new(id: impl Into<String>, day: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            day: day.into(),
            date: date.into(),
            meals: Meals::default(),
        }
    }

    pub fn recipes(&self) -> impl Iterator<Item = &Recipe> {
        self.meals.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn recipe(id: &str) -> Recipe {
        Recipe {
            id: id.to_string(),
            title: id.to_string(),
            servings: 1,
            ..Default::default()
        }
    }

    #[test]
    fn test_meal_type_parses_case_insensitively() {
        assert_eq!(MealType::from_str("Breakfast").unwrap(), MealType::Breakfast);
        assert_eq!(MealType::from_str("SNACK").unwrap(), MealType::Snack);
        assert!(MealType::from_str("brunch").is_err());
        assert_eq!(MealType::Dinner.to_string(), "dinner");
    }

    #[test]
    fn test_iter_walks_slots_in_fixed_order() {
        let mut day = MealPlanDay::new("day1", "Monday", "2025-04-24");
        day.meals.snack.push(recipe("d"));
        day.meals.breakfast.push(recipe("a"));
        day.meals.dinner.push(recipe("c"));
        day.meals.lunch.push(recipe("b"));
        day.meals.breakfast.push(recipe("a2"));

        let ids: Vec<&str> = day.recipes().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "a2", "b", "c", "d"]);
    }

    #[test]
    fn test_validation_reaches_slot_recipes() {
        let mut day = MealPlanDay::new("day1", "Monday", "2025-04-24");
        day.meals.dinner.push(recipe("ok"));
        assert!(day.validate().is_ok());

        let mut broken = recipe("broken");
        broken.nutrients.calories = -5000.0;
        day.meals.snack.push(broken);
        assert!(day.validate().is_err());

        let mut day = MealPlanDay::new("day1", "Monday", "2025-04-24");
        let mut broken = recipe("broken");
        broken.ingredients.push(crate::Ingredient::new("flour", -3.0, "cup"));
        day.meals.breakfast.push(broken);
        assert!(day.validate().is_err());
    }

    #[test]
    fn test_empty_day() {
        let mut day = MealPlanDay::new("day5", "Friday", "2025-04-28");
        assert!(day.meals.is_empty());

        day.meals.slot_mut(MealType::Lunch).push(recipe("x"));
        assert!(!day.meals.is_empty());
        assert_eq!(day.meals.slot(MealType::Lunch).len(), 1);
    }
}
