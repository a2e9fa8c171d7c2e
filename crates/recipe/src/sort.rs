use mealwise_shared::Recipe;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum RecipeSort {
    /// Catalog order
    #[default]
    Relevance,
    CaloriesAsc,
    CaloriesDesc,
    ProteinDesc,
    TimeAsc,
}

/// Stable sort; recipes that compare equal keep their catalog order.
pub fn sort_recipes(mut recipes: Vec<Recipe>, sort: RecipeSort) -> Vec<Recipe> {
    match sort {
        RecipeSort::Relevance => {}
        RecipeSort::CaloriesAsc => recipes
            .sort_by(|a, b| a.nutrients.calories.total_cmp(&b.nutrients.calories)),
        RecipeSort::CaloriesDesc => recipes
            .sort_by(|a, b| b.nutrients.calories.total_cmp(&a.nutrients.calories)),
        RecipeSort::ProteinDesc => recipes
            .sort_by(|a, b| b.nutrients.protein.total_cmp(&a.nutrients.protein)),
        RecipeSort::TimeAsc => recipes.sort_by_key(|recipe| recipe.ready_in_minutes),
    }

    recipes
}
