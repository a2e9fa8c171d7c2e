use thiserror::Error;

pub type MealPlanResult<T> = Result<T, MealPlanError>;

#[derive(Error, Debug, PartialEq)]
pub enum MealPlanError {
    #[error("Day not found: {0}")]
    DayNotFound(String),

    #[error("Meal plan name must not be empty")]
    EmptyPlanName,

    #[error("Saved meal plan not found: {0}")]
    PlanNotFound(String),
}
