use crate::shared::*;

/// Populate the FoodCatalog in display order: rice, soup, then the side dishes.
pub fn populate_foods(catalog: &mut FoodCatalog) {
    let foods: Vec<FoodItem> = vec![
        // ── Rice ────────────────────────────────────────────────────────────────
        food("rice-1", "White rice", FoodCategory::Rice, "white-rice-bowl"),
        food("rice-2", "Multigrain rice", FoodCategory::Rice, "multigrain-rice"),
        food("rice-3", "Bean rice", FoodCategory::Rice, "rice-with-beans"),
        // ── Soup ────────────────────────────────────────────────────────────────
        food("soup-1", "Seaweed soup", FoodCategory::Soup, "seaweed-soup"),
        food("soup-2", "Soybean paste soup", FoodCategory::Soup, "doenjang-jjigae"),
        food("soup-3", "Egg drop soup", FoodCategory::Soup, "egg-drop-soup"),
        // ── Vegetables ──────────────────────────────────────────────────────────
        food("veg-1", "Spinach", FoodCategory::Vegetable, "spinach-namul"),
        food("veg-2", "Carrot", FoodCategory::Vegetable, "sliced-carrots"),
        food("veg-3", "Cucumber", FoodCategory::Vegetable, "sliced-cucumber"),
        food("veg-4", "Mushroom", FoodCategory::Vegetable, "stir-fried-mushrooms"),
        food("veg-5", "Broccoli", FoodCategory::Vegetable, "steamed-broccoli"),
        food("veg-6", "Kimchi", FoodCategory::Vegetable, "kimchi"),
        // ── Meat & fish (protein dishes) ────────────────────────────────────────
        food("meat-1", "Bulgogi", FoodCategory::Meat, "bulgogi"),
        food("meat-2", "Grilled fish", FoodCategory::Meat, "grilled-fish"),
        food("meat-3", "Rolled omelette", FoodCategory::Meat, "gyeran-mari"),
        food("meat-4", "Chicken", FoodCategory::Meat, "fried-chicken"),
        food("meat-5", "Tofu", FoodCategory::Meat, "pan-fried-tofu"),
        food("meat-6", "Shrimp", FoodCategory::Meat, "grilled-shrimp"),
        // ── Fruit ───────────────────────────────────────────────────────────────
        food("fruit-1", "Apple", FoodCategory::Fruit, "sliced-apple"),
        food("fruit-2", "Banana", FoodCategory::Fruit, "sliced-banana"),
        food("fruit-3", "Strawberry", FoodCategory::Fruit, "strawberries"),
        food("fruit-4", "Orange", FoodCategory::Fruit, "sliced-orange"),
        food("fruit-5", "Grapes", FoodCategory::Fruit, "grapes"),
        food("fruit-6", "Watermelon", FoodCategory::Fruit, "sliced-watermelon"),
    ];

    catalog.foods = foods;
}

fn food(id: &str, name: &str, category: FoodCategory, image_query: &str) -> FoodItem {
    FoodItem {
        id: id.into(),
        name: name.into(),
        category,
        image_ref: format!("https://source.unsplash.com/100x100/?{image_query}"),
    }
}
