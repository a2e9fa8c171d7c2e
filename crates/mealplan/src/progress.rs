use mealwise_shared::{NutrientTotal, UserPreferences};
use serde::Serialize;

/// Whole percentage of `goal` reached by `current`, capped at 100.
pub fn progress_percent(current: f64, goal: f64) -> u8 {
    if goal <= 0.0 || !goal.is_finite() {
        return 0;
    }

    ((current / goal) * 100.0).round().clamp(0.0, 100.0) as u8
}

/// What is still missing to reach `goal`; never negative.
pub fn remaining(current: f64, goal: f64) -> f64 {
    (goal - current).max(0.0)
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AxisProgress {
    pub current: f64,
    pub goal: f64,
    pub percent: u8,
    pub remaining: f64,
}

impl AxisProgress {
    pub fn new(current: f64, goal: f64) -> Self {
        Self {
            current,
            goal,
            percent: progress_percent(current, goal),
            remaining: remaining(current, goal),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct NutritionProgress {
    pub calories: AxisProgress,
    pub protein: AxisProgress,
    pub carbs: AxisProgress,
    pub fat: AxisProgress,
}

impl NutritionProgress {
    pub fn against(total: NutrientTotal, preferences: &UserPreferences) -> Self {
        Self::against_goals(total, preferences.goals())
    }

    pub fn against_goals(total: NutrientTotal, goals: NutrientTotal) -> Self {
        Self {
            calories: AxisProgress::new(total.calories, goals.calories),
            protein: AxisProgress::new(total.protein, goals.protein),
            carbs: AxisProgress::new(total.carbs, goals.carbs),
            fat: AxisProgress::new(total.fat, goals.fat),
        }
    }
}
