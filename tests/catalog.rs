use mealwise::cli::Commands;
use mealwise::{Catalog, Config};
use temp_dir::TempDir;

const WEEK: &str = r#"{
    "user": {
        "id": "u1",
        "name": "Sam",
        "email": "sam@example.com",
        "preferences": {
            "dietaryRestrictions": [],
            "allergies": [],
            "cuisinePreferences": ["french"],
            "calorieGoal": 1800,
            "macros": { "protein": 100, "carbs": 180, "fat": 60 }
        }
    },
    "recipes": [
        {
            "id": "pancakes",
            "title": "Pancakes",
            "readyInMinutes": 20,
            "servings": 4,
            "dishTypes": ["breakfast"],
            "ingredients": [
                { "name": "flour", "amount": 1, "unit": "cup" },
                { "name": "eggs", "amount": 2 }
            ],
            "nutrients": { "calories": 400, "protein": 10, "carbs": 60, "fat": 12 }
        },
        {
            "id": "bread",
            "title": "Bread",
            "readyInMinutes": 180,
            "servings": 8,
            "ingredients": [
                { "name": "flour", "amount": 200, "unit": "g" }
            ],
            "nutrients": { "calories": 250, "protein": 8, "carbs": 48, "fat": 2 }
        }
    ],
    "mealPlan": [
        {
            "id": "d1",
            "day": "Monday",
            "date": "2025-05-05",
            "meals": {
                "breakfast": [
                    {
                        "id": "pancakes",
                        "title": "Pancakes",
                        "readyInMinutes": 20,
                        "servings": 4,
                        "ingredients": [
                            { "name": "flour", "amount": 1, "unit": "cup" },
                            { "name": "eggs", "amount": 2 }
                        ],
                        "nutrients": { "calories": 400, "protein": 10, "carbs": 60, "fat": 12 }
                    }
                ],
                "dinner": [
                    {
                        "id": "bread",
                        "title": "Bread",
                        "readyInMinutes": 180,
                        "servings": 8,
                        "ingredients": [
                            { "name": "flour", "amount": 200, "unit": "g" }
                        ],
                        "nutrients": { "calories": 250, "protein": 8, "carbs": 48, "fat": 2 }
                    }
                ]
            }
        }
    ]
}"#;

fn write_catalog(dir: &TempDir, body: &str) -> String {
    let path = dir.child("catalog.json");
    std::fs::write(&path, body).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_catalog_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir, WEEK);

    let catalog = Catalog::from_file(&path).unwrap();

    assert_eq!(catalog.user.preferences.calorie_goal, 1800.0);
    assert_eq!(catalog.recipes.len(), 2);
    assert_eq!(catalog.meal_plan[0].meals.dinner[0].id, "bread");
    assert!(catalog.meal_plan[0].meals.snack.is_empty());
}

#[test]
fn test_catalog_file_drives_commands() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir, WEEK);
    let catalog = Catalog::resolve(Some(path.as_str()), None).unwrap();
    let config = Config::load(Some("does/not/exist.toml".to_string())).unwrap();

    let groceries = Commands::Groceries { by_category: false }
        .run(&config, &catalog)
        .unwrap();
    assert_eq!(groceries, "- flour: 1 cup\n- eggs: 2\n- flour (g): 200 g\n");

    let nutrition = Commands::Nutrition { day: None }
        .run(&config, &catalog)
        .unwrap();
    assert!(nutrition.contains("650 kcal, 18 g protein, 108 g carbs, 14 g fat"));
    assert!(nutrition.contains("carbs 60% (72 left)"));
}

#[test]
fn test_catalog_file_errors() {
    let dir = TempDir::new().unwrap();

    let missing = dir.child("missing.json");
    let err = Catalog::from_file(&missing).unwrap_err();
    assert!(format!("{err:#}").contains("failed to read catalog"));

    let path = write_catalog(&dir, &WEEK.replace("sam@example.com", "not-an-email"));
    let err = Catalog::from_file(&path).unwrap_err();
    assert!(format!("{err:#}").contains("catalog failed validation"));
}

#[test]
fn test_catalog_file_rejects_bad_plan_recipe() {
    let dir = TempDir::new().unwrap();

    // The top-level recipe list stays valid; only the copy inside the plan is broken.
    let body = WEEK.replacen(
        r#""nutrients": { "calories": 250, "protein": 8, "carbs": 48, "fat": 2 }
                    }"#,
        r#""nutrients": { "calories": -250, "protein": 8, "carbs": 48, "fat": 2 }
                    }"#,
        1,
    );
    assert_ne!(body, WEEK);
    let path = write_catalog(&dir, &body);
    let err = Catalog::from_file(&path).unwrap_err();
    assert!(format!("{err:#}").contains("catalog failed validation"));

    let body = WEEK.replacen(
        r#"{ "name": "eggs", "amount": 2 }
                        ]"#,
        r#"{ "name": "eggs", "amount": -2 }
                        ]"#,
        1,
    );
    assert_ne!(body, WEEK);
    let path = write_catalog(&dir, &body);
    assert!(Catalog::from_file(&path).is_err());
}
