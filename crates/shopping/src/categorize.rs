use mealwise_shared::GroceryCategory;

/// Map an ingredient name to a store aisle; unknown names land in `Other`.
///
/// The lookup is an exact match on the trimmed, lowercased name against a fixed table.
pub fn categorize(ingredient_name: &str) -> GroceryCategory {
    let normalized = ingredient_name.trim().to_lowercase();
    let name = normalized.as_str();

    if is_produce(name) {
        GroceryCategory::Produce
    } else if is_dairy(name) {
        GroceryCategory::Dairy
    } else if is_meat(name) {
        GroceryCategory::Meat
    } else if is_seafood(name) {
        GroceryCategory::Seafood
    } else if is_bakery(name) {
        GroceryCategory::Bakery
    } else if is_grains(name) {
        GroceryCategory::Grains
    } else if is_canned(name) {
        GroceryCategory::CannedGoods
    } else if is_frozen(name) {
        GroceryCategory::Frozen
    } else if is_snack(name) {
        GroceryCategory::Snacks
    } else if is_beverage(name) {
        GroceryCategory::Beverages
    } else {
        GroceryCategory::Other
    }
}

fn is_produce(name: &str) -> bool {
    matches!(
        name,
        // Vegetables
        "tomato" | "tomatoes"
            | "onion" | "onions"
            | "red onion"
            | "garlic"
            | "lettuce"
            | "carrot" | "carrots"
            | "celery"
            | "bell pepper" | "bell peppers"
            | "cucumber" | "cucumbers"
            | "zucchini"
            | "broccoli"
            | "cauliflower"
            | "spinach"
            | "kale"
            | "asparagus"
            | "potato" | "potatoes"
            | "sweet potato" | "sweet potatoes"
            | "mushroom" | "mushrooms"
            | "avocado" | "avocados"
            | "ginger"
            // Herbs
            | "cilantro"
            | "parsley"
            | "basil"
            | "dill"
            | "mint"
            // Fruits
            | "apple" | "apples"
            | "banana" | "bananas"
            | "lemon" | "lemons"
            | "lime" | "limes"
            | "mixed berries"
            | "strawberries"
            | "blueberries"
    )
}

fn is_dairy(name: &str) -> bool {
    matches!(
        name,
        "milk"
            | "butter"
            | "cream"
            | "cheese"
            | "feta cheese"
            | "parmesan"
            | "mozzarella"
            | "yogurt"
            | "greek yogurt"
            | "egg" | "eggs"
    )
}

fn is_meat(name: &str) -> bool {
    matches!(
        name,
        "chicken" | "chicken breast" | "beef" | "ground beef" | "pork" | "bacon" | "turkey" | "lamb"
    )
}

fn is_seafood(name: &str) -> bool {
    matches!(
        name,
        "salmon" | "salmon fillet" | "tuna" | "shrimp" | "cod" | "prawns"
    )
}

fn is_bakery(name: &str) -> bool {
    matches!(name, "bread" | "baguette" | "tortillas" | "bagels" | "pita")
}

fn is_grains(name: &str) -> bool {
    matches!(
        name,
        "quinoa" | "rice" | "pasta" | "flour" | "oats" | "granola" | "couscous" | "noodles"
    )
}

fn is_canned(name: &str) -> bool {
    matches!(
        name,
        "canned tomatoes" | "black beans" | "chickpeas" | "coconut milk" | "tomato paste"
    )
}

fn is_frozen(name: &str) -> bool {
    matches!(name, "frozen peas" | "frozen corn" | "ice cream")
}

fn is_snack(name: &str) -> bool {
    matches!(name, "chips" | "crackers" | "dark chocolate" | "nuts" | "almonds")
}

fn is_beverage(name: &str) -> bool {
    matches!(name, "coffee" | "tea" | "orange juice" | "sparkling water")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorize_fixture_ingredients() {
        assert_eq!(categorize("avocado"), GroceryCategory::Produce);
        assert_eq!(categorize("Bell Peppers"), GroceryCategory::Produce);
        assert_eq!(categorize("greek yogurt"), GroceryCategory::Dairy);
        assert_eq!(categorize("eggs"), GroceryCategory::Dairy);
        assert_eq!(categorize("salmon fillet"), GroceryCategory::Seafood);
        assert_eq!(categorize("bread"), GroceryCategory::Bakery);
        assert_eq!(categorize(" quinoa "), GroceryCategory::Grains);
        assert_eq!(categorize("chickpeas"), GroceryCategory::CannedGoods);
    }

    #[test]
    fn test_unknown_is_other() {
        assert_eq!(categorize("soy sauce"), GroceryCategory::Other);
        assert_eq!(categorize(""), GroceryCategory::Other);
    }
}
