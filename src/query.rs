/// Result of parsing the free-text ingredient field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngredientQuery {
    /// Nothing but whitespace was entered
    Missing,
    /// Lowercased, trimmed, non-empty tokens in input order
    Tokens(Vec<String>),
}

/// Split comma-separated ingredient text into normalized tokens.
///
/// `"Chicken,  rice ,, tomatoes"` becomes `["chicken", "rice", "tomatoes"]`.
/// Blank input yields [`IngredientQuery::Missing`] rather than an empty list.
pub fn parse_ingredients(input: &str) -> IngredientQuery {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return IngredientQuery::Missing;
    }

    let tokens = trimmed
        .to_lowercase()
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect();

    IngredientQuery::Tokens(tokens)
}

/// Free-text search combined with two categorical filters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery {
    /// Lowercased search text, used whole
    pub search: String,
    pub region: Option<String>,
    pub recipe_type: Option<String>,
}

impl FilterQuery {
    /// Build from raw form values, where an empty selection means
    /// "no filter selected".
    pub fn new(search: &str, region: &str, recipe_type: &str) -> Self {
        Self {
            search: search.to_lowercase(),
            region: selection(region),
            recipe_type: selection(recipe_type),
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = selection(&region.into());
        self
    }

    pub fn with_type(mut self, recipe_type: impl Into<String>) -> Self {
        self.recipe_type = selection(&recipe_type.into());
        self
    }
}

fn selection(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
