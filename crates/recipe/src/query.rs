use mealwise_shared::Recipe;
use serde::Deserialize;

use crate::{
    RecipeSort, filter_by_cuisine, filter_by_diet, filter_by_meal_type, search_by_title,
    sort_recipes,
};

/// Everything the recipe browser narrows a catalog by.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RecipeQuery {
    #[serde(default)]
    pub term: String,
    #[serde(default)]
    pub diets: Vec<String>,
    #[serde(default)]
    pub cuisines: Vec<String>,
    #[serde(default)]
    pub meal_type: String,
    #[serde(default)]
    pub sort: RecipeSort,
}

impl RecipeQuery {
    /// Search, then filters, then sort.
    ///
    /// Diets go through [`filter_by_diet`], so a recipe must carry every selected
    /// diet rather than any one of them. Cuisines still match on any.
    #[tracing::instrument(skip_all, fields(catalog = recipes.len()))]
    pub fn apply(&self, recipes: Vec<Recipe>) -> Vec<Recipe> {
        let recipes = search_by_title(recipes, &self.term);
        let recipes = filter_by_diet(recipes, &self.diets);
        let recipes = filter_by_cuisine(recipes, &self.cuisines);
        let recipes = filter_by_meal_type(recipes, &self.meal_type);
        let recipes = sort_recipes(recipes, self.sort);

        tracing::debug!(matched = recipes.len(), sort = %self.sort, "recipe query applied");
        recipes
    }

    pub fn is_empty(&self) -> bool {
        self.term.trim().is_empty()
            && self.diets.is_empty()
            && self.cuisines.is_empty()
            && self.meal_type.is_empty()
    }
}
