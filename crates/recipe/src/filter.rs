use mealwise_shared::Recipe;

/// Keep recipes tagged with EVERY requested diet.
///
/// # Business Rules
/// - **AND Logic**: a recipe must carry all requested diet tags
/// - Empty `diets` returns the input unchanged
///
/// Cuisine matching in [`filter_by_cuisine`] is an OR. The two differ on purpose
/// ("must satisfy all restrictions" vs "any of these cuisines"), although whether
/// the diet side should stay strict is still an open UX question.
pub fn filter_by_diet<S: AsRef<str>>(recipes: Vec<Recipe>, diets: &[S]) -> Vec<Recipe> {
    if diets.is_empty() {
        return recipes;
    }

    recipes
        .into_iter()
        .filter(|recipe| diets.iter().all(|diet| recipe.has_diet(diet.as_ref())))
        .collect()
}

/// Keep recipes whose dish types contain `meal_type`, compared in lowercase.
///
/// An empty `meal_type` returns the input unchanged.
pub fn filter_by_meal_type(recipes: Vec<Recipe>, meal_type: &str) -> Vec<Recipe> {
    if meal_type.is_empty() {
        return recipes;
    }

    let meal_type = meal_type.to_lowercase();
    recipes
        .into_iter()
        .filter(|recipe| recipe.has_dish_type(&meal_type))
        .collect()
}

/// Keep recipes tagged with ANY of the requested cuisines.
pub fn filter_by_cuisine<S: AsRef<str>>(recipes: Vec<Recipe>, cuisines: &[S]) -> Vec<Recipe> {
    if cuisines.is_empty() {
        return recipes;
    }

    recipes
        .into_iter()
        .filter(|recipe| {
            cuisines
                .iter()
                .any(|cuisine| recipe.has_cuisine(cuisine.as_ref()))
        })
        .collect()
}

/// Case-insensitive substring match on the title; an empty term matches everything.
pub fn search_by_title(recipes: Vec<Recipe>, term: &str) -> Vec<Recipe> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return recipes;
    }

    recipes
        .into_iter()
        .filter(|recipe| recipe.title.to_lowercase().contains(&term))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_recipe(id: &str, title: &str, diets: &[&str], cuisines: &[&str], dish_types: &[&str]) -> Recipe {
        Recipe {
            id: id.to_string(),
            title: title.to_string(),
            servings: 1,
            diets: diets.iter().map(|s| s.to_string()).collect(),
            cuisines: cuisines.iter().map(|s| s.to_string()).collect(),
            dish_types: dish_types.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn catalog() -> Vec<Recipe> {
        vec![
            create_test_recipe("1", "Avocado Toast", &["vegetarian"], &["american"], &["breakfast"]),
            create_test_recipe("2", "Quinoa Salad", &["vegetarian", "gluten-free"], &["mediterranean"], &["lunch", "salad"]),
            create_test_recipe("3", "Grilled Salmon", &["pescatarian", "gluten-free", "keto"], &["american"], &["dinner"]),
            create_test_recipe("4", "Vegetable Stir Fry", &["vegetarian", "vegan"], &["asian", "chinese"], &["dinner", "lunch"]),
        ]
    }

    fn ids(recipes: &[Recipe]) -> Vec<&str> {
        recipes.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_empty_diets_returns_all() {
        let no_diets: [&str; 0] = [];
        assert_eq!(filter_by_diet(catalog(), &no_diets), catalog());
    }

    #[test]
    fn test_diet_requires_every_tag() {
        let filtered = filter_by_diet(catalog(), &["vegetarian", "gluten-free"]);
        assert_eq!(ids(&filtered), vec!["2"]);

        let filtered = filter_by_diet(catalog(), &["vegetarian"]);
        assert_eq!(ids(&filtered), vec!["1", "2", "4"]);
    }

    #[test]
    fn test_diet_no_match_is_empty() {
        assert!(filter_by_diet(catalog(), &["vegan", "keto"]).is_empty());
    }

    #[test]
    fn test_meal_type_is_lowercased() {
        assert_eq!(ids(&filter_by_meal_type(catalog(), "Dinner")), vec!["3", "4"]);
        assert_eq!(ids(&filter_by_meal_type(catalog(), "lunch")), vec!["2", "4"]);
        assert!(filter_by_meal_type(catalog(), "snack").is_empty());
        assert_eq!(filter_by_meal_type(catalog(), ""), catalog());
    }

    #[test]
    fn test_cuisine_matches_any_tag() {
        let filtered = filter_by_cuisine(catalog(), &["mediterranean", "chinese"]);
        assert_eq!(ids(&filtered), vec!["2", "4"]);

        let no_cuisines: Vec<String> = Vec::new();
        assert_eq!(filter_by_cuisine(catalog(), &no_cuisines), catalog());
    }

    #[test]
    fn test_search_by_title() {
        assert_eq!(ids(&search_by_title(catalog(), "SALAD")), vec!["2"]);
        assert_eq!(ids(&search_by_title(catalog(), "  toast ")), vec!["1"]);
        assert_eq!(search_by_title(catalog(), ""), catalog());
    }
}
