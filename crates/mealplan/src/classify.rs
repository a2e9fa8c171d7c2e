use mealwise_shared::MealType;
use strum::VariantArray;

pub trait MealTypeColor {
    fn color_token(&self) -> &'static str;
}

impl MealTypeColor for MealType {
    fn color_token(&self) -> &'static str {
        match self {
            MealType::Breakfast => "meal-breakfast",
            MealType::Lunch => "meal-lunch",
            MealType::Dinner => "meal-dinner",
            MealType::Snack => "meal-snack",
        }
    }
}

/// Presentation token for a slot key; unknown keys get `""`.
///
/// Slot keys are the lowercase names used by the planner, so matching is exact.
pub fn meal_type_color_token(meal_type: &str) -> &'static str {
    MealType::VARIANTS
        .iter()
        .find(|variant| variant.as_ref() == meal_type)
        .map(MealTypeColor::color_token)
        .unwrap_or_default()
}
