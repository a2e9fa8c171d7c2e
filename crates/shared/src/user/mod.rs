use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::nutrition::NutrientTotal;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
pub struct MacroGoals {
    #[validate(range(min = 30.0, max = 250.0))]
    pub protein: f64,
    #[validate(range(min = 50.0, max = 500.0))]
    pub carbs: f64,
    #[validate(range(min = 20.0, max = 150.0))]
    pub fat: f64,
}

/// Targets and tags the dashboard compares a plan against. Read-only for aggregation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub cuisine_preferences: Vec<String>,
    #[validate(range(min = 1000.0, max = 5000.0))]
    pub calorie_goal: f64,
    #[validate(nested)]
    pub macros: MacroGoals,
}

impl UserPreferences {
    /// Goals in the same shape as an aggregated total.
    pub fn goals(&self) -> NutrientTotal {
        NutrientTotal {
            calories: self.calorie_goal,
            protein: self.macros.protein,
            carbs: self.macros.carbs,
            fat: self.macros.fat,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
pub struct User {
    #[validate(length(min = 1))]
    pub id: String,
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(nested)]
    pub preferences: UserPreferences,
}
