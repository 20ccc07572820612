//! Data-to-view mapping.
//!
//! Functions here turn matcher results into plain view models. Markup and
//! escaping belong to the adapters in [`html`] and [`text`].

pub mod html;
pub mod text;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::matcher::SearchOutcome;
use crate::model::{parse_id, Recipe};

pub const MISSING_INPUT_MESSAGE: &str = "Please enter some ingredients";
pub const SUGGESTED_INGREDIENTS: [&str; 5] = ["chicken", "rice", "tomatoes", "pasta", "vegetables"];
const PREVIEW_CHARS: usize = 100;
const NOT_AVAILABLE: &str = "N/A";

/// What the results area shows after a search
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchView {
    /// Input was blank
    Prompt { message: String },
    /// Nothing matched; carries ingredients worth trying
    NoResults {
        message: String,
        suggestions: Vec<String>,
    },
    Results {
        heading: String,
        cards: Vec<RecipeCard>,
    },
}

/// Summary of one recipe in a result list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeCard {
    pub id: i64,
    pub title: String,
    pub ingredients: String,
    pub difficulty: String,
    pub cook_time: String,
    pub preview: String,
    /// Navigation target for the detail page
    pub link: String,
}

/// What the detail page shows
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DetailView {
    Found(RecipeDetail),
    NotFound { message: String, valid_ids: Vec<i64> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeDetail {
    pub id: i64,
    pub title: String,
    pub difficulty: String,
    pub cook_time: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
}

/// Result of looking a recipe up by its id parameter
#[derive(Debug, Clone, PartialEq)]
pub enum DetailOutcome<'a> {
    Found(&'a Recipe),
    NotFound { valid_ids: Vec<i64> },
}

/// Find a recipe by the raw `id` parameter; comparison is numeric.
pub fn lookup_recipe<'a>(raw_id: &str, catalog: &'a Catalog) -> DetailOutcome<'a> {
    match parse_id(raw_id).and_then(|id| catalog.find(id)) {
        Some(recipe) => DetailOutcome::Found(recipe),
        None => DetailOutcome::NotFound {
            valid_ids: catalog.ids(),
        },
    }
}

/// Navigation target for a recipe card
pub fn detail_link(id: i64) -> String {
    format!("recipe.html?id={}", id)
}

pub fn search_view(outcome: &SearchOutcome<'_>) -> SearchView {
    match outcome {
        SearchOutcome::MissingInput => SearchView::Prompt {
            message: MISSING_INPUT_MESSAGE.to_string(),
        },
        SearchOutcome::NoMatches => no_results_view(),
        SearchOutcome::Matches(recipes) => results_view(recipes),
    }
}

/// View for a plain list of recipes, e.g. from the filter matcher
pub fn results_view(recipes: &[&Recipe]) -> SearchView {
    if recipes.is_empty() {
        return no_results_view();
    }

    SearchView::Results {
        heading: format!("Found {} recipe(s):", recipes.len()),
        cards: recipes.iter().map(|r| recipe_card(r)).collect(),
    }
}

fn no_results_view() -> SearchView {
    SearchView::NoResults {
        message: format!(
            "No recipes found with those ingredients. Try: {}, or {}",
            SUGGESTED_INGREDIENTS[..SUGGESTED_INGREDIENTS.len() - 1].join(", "),
            SUGGESTED_INGREDIENTS[SUGGESTED_INGREDIENTS.len() - 1]
        ),
        suggestions: SUGGESTED_INGREDIENTS.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn recipe_card(recipe: &Recipe) -> RecipeCard {
    RecipeCard {
        id: recipe.id,
        title: recipe.name.clone(),
        ingredients: recipe.ingredients.join(", "),
        difficulty: or_not_available(recipe.difficulty.as_deref()),
        cook_time: or_not_available(recipe.cook_time.as_deref()),
        preview: preview(&recipe.instructions),
        link: detail_link(recipe.id),
    }
}

pub fn detail_view(outcome: &DetailOutcome<'_>) -> DetailView {
    match outcome {
        DetailOutcome::Found(recipe) => DetailView::Found(RecipeDetail {
            id: recipe.id,
            title: recipe.name.clone(),
            difficulty: or_not_available(recipe.difficulty.as_deref()),
            cook_time: or_not_available(recipe.cook_time.as_deref()),
            ingredients: recipe.ingredients.clone(),
            instructions: recipe.instructions.clone(),
        }),
        DetailOutcome::NotFound { valid_ids } => DetailView::NotFound {
            message: format!(
                "Recipe not found. Available recipe IDs: {}",
                valid_ids
                    .iter()
                    .map(|id| id.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            valid_ids: valid_ids.clone(),
        },
    }
}

fn preview(instructions: &str) -> String {
    let head: String = instructions.chars().take(PREVIEW_CHARS).collect();
    format!("{}...", head)
}

fn or_not_available(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}
