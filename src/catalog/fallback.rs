use crate::model::Recipe;

/// Recipes used when the catalog source cannot be loaded
pub fn fallback_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: 1,
            name: "Chicken Rice Bowl".to_string(),
            ingredients: vec![
                "chicken".to_string(),
                "rice".to_string(),
                "soy sauce".to_string(),
                "vegetables".to_string(),
            ],
            instructions:
                "Cook rice. Stir-fry chicken with vegetables. Serve over rice with soy sauce."
                    .to_string(),
            difficulty: Some("Easy".to_string()),
            cook_time: Some("25 minutes".to_string()),
            region: None,
            recipe_type: None,
        },
        Recipe {
            id: 2,
            name: "Tomato Pasta".to_string(),
            ingredients: vec![
                "pasta".to_string(),
                "tomatoes".to_string(),
                "garlic".to_string(),
                "olive oil".to_string(),
                "basil".to_string(),
            ],
            instructions:
                "Boil pasta. Sauté garlic in olive oil. Add tomatoes and basil. Combine with pasta."
                    .to_string(),
            difficulty: Some("Easy".to_string()),
            cook_time: Some("15 minutes".to_string()),
            region: None,
            recipe_type: None,
        },
    ]
}
