//! Catalog filtering.
//!
//! Both matchers are pure functions of their inputs and return references
//! into the catalog in catalog order. Nothing is ranked or scored.

use crate::catalog::Catalog;
use crate::model::Recipe;
use crate::query::{parse_ingredients, FilterQuery, IngredientQuery};

/// Outcome of a search, before any presentation
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome<'a> {
    /// The query was blank; the matcher never ran
    MissingInput,
    /// The matcher ran and nothing matched
    NoMatches,
    /// Matching recipes in catalog order
    Matches(Vec<&'a Recipe>),
}

impl<'a> SearchOutcome<'a> {
    pub fn from_matches(matches: Vec<&'a Recipe>) -> Self {
        if matches.is_empty() {
            SearchOutcome::NoMatches
        } else {
            SearchOutcome::Matches(matches)
        }
    }

    pub fn recipes(&self) -> &[&'a Recipe] {
        match self {
            SearchOutcome::Matches(recipes) => recipes,
            _ => &[],
        }
    }
}

/// True when some token and some ingredient contain one another.
///
/// `tokens` must already be lowercased (see [`parse_ingredients`]).
pub fn matches_any_ingredient(tokens: &[String], recipe: &Recipe) -> bool {
    let ingredients = recipe.lowercase_ingredients();
    tokens.iter().any(|token| {
        ingredients.iter().any(|ingredient| {
            ingredient.contains(token.as_str()) || token.contains(ingredient.as_str())
        })
    })
}

/// Recipes sharing at least one ingredient with the token list
pub fn match_ingredients<'a>(tokens: &[String], catalog: &'a Catalog) -> Vec<&'a Recipe> {
    catalog
        .iter()
        .filter(|recipe| matches_any_ingredient(tokens, recipe))
        .collect()
}

/// Parse raw ingredient text and match it against the catalog
pub fn search_ingredients<'a>(input: &str, catalog: &'a Catalog) -> SearchOutcome<'a> {
    match parse_ingredients(input) {
        IngredientQuery::Missing => SearchOutcome::MissingInput,
        IngredientQuery::Tokens(tokens) => {
            SearchOutcome::from_matches(match_ingredients(&tokens, catalog))
        }
    }
}

/// Search text against name or any ingredient, AND the exact-match filters
pub fn matches_filter(query: &FilterQuery, recipe: &Recipe) -> bool {
    let search = query.search.to_lowercase();
    let matches_search = recipe.name.to_lowercase().contains(&search)
        || recipe
            .ingredients
            .iter()
            .any(|ingredient| ingredient.to_lowercase().contains(&search));

    let matches_region = match &query.region {
        None => true,
        Some(region) => recipe.region.as_deref() == Some(region.as_str()),
    };

    let matches_type = match &query.recipe_type {
        None => true,
        Some(recipe_type) => recipe.recipe_type.as_deref() == Some(recipe_type.as_str()),
    };

    matches_search && matches_region && matches_type
}

/// Recipes satisfying every part of the filter query
pub fn filter_recipes<'a>(query: &FilterQuery, catalog: &'a Catalog) -> Vec<&'a Recipe> {
    catalog
        .iter()
        .filter(|recipe| matches_filter(query, recipe))
        .collect()
}
