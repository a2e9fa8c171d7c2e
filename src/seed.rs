//! Built-in demo catalog: one user, five recipes and a week of planning.
//!
//! Every function builds fresh values; nothing here is shared state.

use mealwise_shared::{
    Ingredient, MacroGoals, MealPlanDay, Nutrients, Recipe, User, UserPreferences,
};

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub fn user() -> User {
    User {
        id: "user1".to_string(),
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        preferences: UserPreferences {
            dietary_restrictions: tags(&["vegetarian"]),
            allergies: tags(&["peanuts"]),
            cuisine_preferences: tags(&["italian", "mexican", "asian"]),
            calorie_goal: 2000.0,
            macros: MacroGoals {
                protein: 120.0,
                carbs: 200.0,
                fat: 65.0,
            },
        },
    }
}

pub fn recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: "recipe1".to_string(),
            title: "Avocado Toast with Egg".to_string(),
            summary: "A simple, nutritious breakfast with creamy avocado and protein-rich eggs."
                .to_string(),
            ready_in_minutes: 15,
            servings: 1,
            cuisines: tags(&["american"]),
            dish_types: tags(&["breakfast"]),
            diets: tags(&["vegetarian"]),
            ingredients: vec![
                Ingredient::new("bread", 2.0, "slices"),
                Ingredient::new("avocado", 1.0, ""),
                Ingredient::new("eggs", 2.0, ""),
                Ingredient::new("salt", 1.0, "pinch"),
                Ingredient::new("pepper", 1.0, "pinch"),
            ],
            instructions: tags(&[
                "Toast the bread until golden and crisp.",
                "Mash the avocado with salt and pepper.",
                "Spread the avocado on the toast.",
                "Fry the eggs until the whites are set but the yolk is still runny.",
                "Place the eggs on top of the avocado toast.",
            ]),
            nutrients: Nutrients {
                calories: 350.0,
                protein: 15.0,
                fat: 22.0,
                carbs: 30.0,
                fiber: Some(8.0),
                ..Default::default()
            },
        },
        Recipe {
            id: "recipe2".to_string(),
            title: "Quinoa Salad with Roasted Vegetables".to_string(),
            summary: "A hearty quinoa salad filled with roasted vegetables and a tangy dressing."
                .to_string(),
            ready_in_minutes: 40,
            servings: 2,
            cuisines: tags(&["mediterranean"]),
            dish_types: tags(&["lunch", "salad"]),
            diets: tags(&["vegetarian", "gluten-free"]),
            ingredients: vec![
                Ingredient::new("quinoa", 1.0, "cup"),
                Ingredient::new("bell peppers", 2.0, ""),
                Ingredient::new("zucchini", 1.0, ""),
                Ingredient::new("red onion", 1.0, ""),
                Ingredient::new("olive oil", 2.0, "tbsp"),
                Ingredient::new("lemon juice", 2.0, "tbsp"),
                Ingredient::new("feta cheese", 0.5, "cup"),
            ],
            instructions: tags(&[
                "Preheat the oven to 220°C.",
                "Rinse and cook the quinoa.",
                "Chop the vegetables and toss with olive oil, salt, and pepper.",
                "Roast the vegetables for 20-25 minutes.",
                "Combine quinoa and vegetables, dress with lemon juice and olive oil.",
                "Fold in the crumbled feta.",
            ]),
            nutrients: Nutrients {
                calories: 380.0,
                protein: 12.0,
                fat: 18.0,
                carbs: 45.0,
                fiber: Some(7.0),
                ..Default::default()
            },
        },
        Recipe {
            id: "recipe3".to_string(),
            title: "Grilled Salmon with Asparagus".to_string(),
            summary: "Grilled salmon served with fresh asparagus for a protein-rich dinner."
                .to_string(),
            ready_in_minutes: 25,
            servings: 2,
            cuisines: tags(&["american"]),
            dish_types: tags(&["dinner"]),
            diets: tags(&["pescatarian", "gluten-free", "keto"]),
            ingredients: vec![
                Ingredient::new("salmon fillet", 12.0, "oz"),
                Ingredient::new("asparagus", 1.0, "bunch"),
                Ingredient::new("olive oil", 2.0, "tbsp"),
                Ingredient::new("lemon", 1.0, ""),
                Ingredient::new("garlic", 2.0, "cloves"),
                Ingredient::new("dill", 1.0, "tbsp"),
            ],
            instructions: tags(&[
                "Preheat the grill to medium-high heat.",
                "Brush the salmon with olive oil and season with salt, pepper, and dill.",
                "Trim the asparagus and toss with olive oil.",
                "Grill the salmon 4-5 minutes per side.",
                "Grill the asparagus for 3-4 minutes.",
                "Finish with fresh lemon.",
            ]),
            nutrients: Nutrients {
                calories: 420.0,
                protein: 40.0,
                fat: 25.0,
                carbs: 8.0,
                fiber: Some(4.0),
                ..Default::default()
            },
        },
        Recipe {
            id: "recipe4".to_string(),
            title: "Greek Yogurt Parfait".to_string(),
            summary: "A quick, protein-packed snack with layers of yogurt, fruit, and granola."
                .to_string(),
            ready_in_minutes: 10,
            servings: 1,
            cuisines: tags(&["greek"]),
            dish_types: tags(&["snack", "breakfast"]),
            diets: tags(&["vegetarian"]),
            ingredients: vec![
                Ingredient::new("greek yogurt", 1.0, "cup"),
                Ingredient::new("mixed berries", 0.5, "cup"),
                Ingredient::new("granola", 0.25, "cup"),
                Ingredient::new("honey", 1.0, "tbsp"),
            ],
            instructions: tags(&[
                "Add a layer of Greek yogurt to a glass.",
                "Add a layer of mixed berries.",
                "Sprinkle with granola and repeat the layers.",
                "Drizzle with honey.",
            ]),
            nutrients: Nutrients {
                calories: 280.0,
                protein: 20.0,
                fat: 8.0,
                carbs: 35.0,
                sugar: Some(20.0),
                ..Default::default()
            },
        },
        Recipe {
            id: "recipe5".to_string(),
            title: "Vegetable Stir Fry".to_string(),
            summary: "A colorful stir fry packed with vegetables and tofu.".to_string(),
            ready_in_minutes: 30,
            servings: 2,
            cuisines: tags(&["asian", "chinese"]),
            dish_types: tags(&["dinner", "lunch"]),
            diets: tags(&["vegetarian", "vegan"]),
            ingredients: vec![
                Ingredient::new("tofu", 14.0, "oz"),
                Ingredient::new("broccoli", 1.0, "head"),
                Ingredient::new("carrots", 2.0, ""),
                Ingredient::new("bell peppers", 2.0, ""),
                Ingredient::new("soy sauce", 3.0, "tbsp"),
                Ingredient::new("sesame oil", 1.0, "tbsp"),
                Ingredient::new("garlic", 3.0, "cloves"),
                Ingredient::new("ginger", 1.0, "tbsp"),
            ],
            instructions: tags(&[
                "Press and cube the tofu.",
                "Chop the vegetables.",
                "Heat sesame oil in a wok over medium-high heat.",
                "Stir in garlic and ginger for 30 seconds.",
                "Brown the tofu, then stir fry the vegetables for 5-7 minutes.",
                "Add soy sauce and toss to coat.",
            ]),
            nutrients: Nutrients {
                calories: 320.0,
                protein: 25.0,
                fat: 15.0,
                carbs: 25.0,
                fiber: Some(8.0),
                ..Default::default()
            },
        },
    ]
}

/// Seven days starting Monday; Friday to Sunday are still empty.
pub fn meal_plan(recipes: &[Recipe]) -> Vec<MealPlanDay> {
    let pick = |index: usize| recipes.get(index).cloned().into_iter().collect::<Vec<_>>();

    let mut days: Vec<MealPlanDay> = [
        ("day1", "Monday", "2025-04-24"),
        ("day2", "Tuesday", "2025-04-25"),
        ("day3", "Wednesday", "2025-04-26"),
        ("day4", "Thursday", "2025-04-27"),
        ("day5", "Friday", "2025-04-28"),
        ("day6", "Saturday", "2025-04-29"),
        ("day7", "Sunday", "2025-04-30"),
    ]
    .into_iter()
    .map(|(id, day, date)| MealPlanDay::new(id, day, date))
    .collect();

    // (breakfast, lunch, dinner, snack) indices into `recipes`
    let assignments = [
        (Some(0), Some(1), Some(2), Some(3)),
        (Some(0), Some(4), Some(2), None),
        (Some(3), Some(1), Some(4), None),
        (Some(0), Some(1), Some(2), Some(3)),
    ];

    for (day, (breakfast, lunch, dinner, snack)) in days.iter_mut().zip(assignments) {
        day.meals.breakfast = breakfast.map(pick).unwrap_or_default();
        day.meals.lunch = lunch.map(pick).unwrap_or_default();
        day.meals.dinner = dinner.map(pick).unwrap_or_default();
        day.meals.snack = snack.map(pick).unwrap_or_default();
    }

    days
}
