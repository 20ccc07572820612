use recipe_finder::matcher::match_ingredients;
use recipe_finder::{
    find_by_ingredients, parse_ingredients, search_ingredients, Catalog, IngredientQuery, Recipe,
    SearchOutcome, SearchView,
};

fn recipe(id: i64, name: &str, ingredients: &[&str]) -> Recipe {
    Recipe {
        id,
        name: name.to_string(),
        ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
        instructions: format!("Make the {}.", name.to_lowercase()),
        difficulty: Some("Easy".to_string()),
        cook_time: None,
        region: None,
        recipe_type: None,
    }
}

fn pantry_catalog() -> Catalog {
    Catalog::new(vec![
        recipe(10, "Fried Rice", &["Rice", "Egg", "Spring Onion"]),
        recipe(11, "Cauliflower Rice", &["riced cauliflower", "butter"]),
        recipe(12, "Pancakes", &["flour", "milk", "egg"]),
        recipe(13, "Garden Salad", &["lettuce", "cucumber"]),
    ])
}

fn ids(recipes: &[&Recipe]) -> Vec<i64> {
    recipes.iter().map(|r| r.id).collect()
}

#[test]
fn test_chicken_rice_matches_only_the_bowl() {
    let catalog = Catalog::fallback();

    let outcome = search_ingredients("chicken, rice", &catalog);

    assert_eq!(ids(outcome.recipes()), vec![1]);
    assert_eq!(outcome.recipes()[0].name, "Chicken Rice Bowl");
}

#[test]
fn test_unknown_ingredient_renders_suggestions() {
    let catalog = Catalog::fallback();

    assert_eq!(
        search_ingredients("xyz", &catalog),
        SearchOutcome::NoMatches
    );

    match find_by_ingredients(&catalog, "xyz") {
        SearchView::NoResults {
            message,
            suggestions,
        } => {
            assert!(message.starts_with("No recipes found with those ingredients."));
            assert_eq!(
                suggestions,
                vec!["chicken", "rice", "tomatoes", "pasta", "vegetables"]
            );
        }
        other => panic!("Expected no-results view, got {:?}", other),
    }
}

#[test]
fn test_blank_input_never_reaches_matcher() {
    let catalog = Catalog::fallback();

    for input in ["", "   ", "\t\n"] {
        assert_eq!(parse_ingredients(input), IngredientQuery::Missing);
        assert_eq!(
            search_ingredients(input, &catalog),
            SearchOutcome::MissingInput
        );
        match find_by_ingredients(&catalog, input) {
            SearchView::Prompt { message } => {
                assert_eq!(message, "Please enter some ingredients")
            }
            other => panic!("Expected prompt view, got {:?}", other),
        }
    }
}

#[test]
fn test_result_is_ordered_subsequence_of_catalog() {
    let catalog = pantry_catalog();

    let found = match_ingredients(&["egg".to_string(), "rice".to_string()], &catalog);

    assert_eq!(ids(&found), vec![10, 11, 12]);
    let catalog_ids = catalog.ids();
    let mut last_position = None;
    for id in ids(&found) {
        let position = catalog_ids.iter().position(|c| *c == id).unwrap();
        assert!(last_position.map_or(true, |last| position > last));
        last_position = Some(position);
    }
}

#[test]
fn test_matching_is_idempotent() {
    let catalog = pantry_catalog();

    let first = search_ingredients("Egg, lettuce", &catalog);
    let second = search_ingredients("Egg, lettuce", &catalog);

    assert_eq!(first, second);
    assert_eq!(ids(first.recipes()), vec![10, 12, 13]);
}

#[test]
fn test_matching_ignores_case() {
    let catalog = Catalog::fallback();

    assert_eq!(
        search_ingredients("CHICKEN", &catalog),
        search_ingredients("chicken", &catalog)
    );
}

#[test]
fn test_containment_works_both_ways() {
    let catalog = Catalog::new(vec![recipe(1, "Plain Rice", &["rice"])]);

    assert_eq!(ids(search_ingredients("ric", &catalog).recipes()), vec![1]);
    assert_eq!(
        ids(search_ingredients("basmati rice", &catalog).recipes()),
        vec![1]
    );
}

#[test]
fn test_loose_substring_match_is_kept() {
    // "rice" is a substring of "riced cauliflower"
    let catalog = pantry_catalog();

    let outcome = search_ingredients("rice", &catalog);

    assert_eq!(ids(outcome.recipes()), vec![10, 11]);
}

#[test]
fn test_separator_only_input_finds_nothing() {
    let catalog = Catalog::fallback();

    assert_eq!(search_ingredients(", ,", &catalog), SearchOutcome::NoMatches);
}

#[test]
fn test_results_view_cards() {
    let catalog = Catalog::fallback();

    match find_by_ingredients(&catalog, "tomatoes, basil") {
        SearchView::Results { heading, cards } => {
            assert_eq!(heading, "Found 1 recipe(s):");
            assert_eq!(cards[0].title, "Tomato Pasta");
            assert_eq!(cards[0].link, "recipe.html?id=2");
            assert_eq!(cards[0].cook_time, "15 minutes");
        }
        other => panic!("Expected results view, got {:?}", other),
    }
}
