//! Find recipes in a small static catalog by the ingredients you have.
//!
//! The pure pieces (`query`, `matcher`, `view`) work on any [`Catalog`];
//! [`RecipeFinder`] ties them to a catalog source, an ingredient detector
//! and a diagnostics trail.

pub mod builder;
pub mod catalog;
pub mod config;
pub mod detect;
pub mod diagnostics;
pub mod error;
pub mod finder;
pub mod matcher;
pub mod model;
pub mod query;
pub mod view;

pub use builder::RecipeFinderBuilder;
pub use catalog::{Catalog, CatalogLoader, CatalogSource, LoadPolicy, LoadStatus};
pub use config::FinderConfig;
pub use detect::{ImageSource, IngredientDetector, SimulatedDetector};
pub use error::FinderError;
pub use finder::{ImageSearch, RecipeFinder};
pub use matcher::{filter_recipes, search_ingredients, SearchOutcome};
pub use model::Recipe;
pub use query::{parse_ingredients, FilterQuery, IngredientQuery};
pub use view::{DetailOutcome, DetailView, SearchView};

use std::time::Duration;

/// Load a catalog from a path or URL, failing instead of falling back
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let catalog = recipe_finder::load_catalog("recipes.json").await?;
/// println!("{} recipes", catalog.len());
/// # Ok(())
/// # }
/// ```
pub async fn load_catalog(location: &str) -> Result<Catalog, FinderError> {
    load_catalog_with_timeout(location, None).await
}

pub async fn load_catalog_with_timeout(
    location: &str,
    timeout: Option<Duration>,
) -> Result<Catalog, FinderError> {
    let source = CatalogSource::parse(location);
    let loader = CatalogLoader::new(source, LoadPolicy::Fallback, timeout)?;
    loader.fetch().await
}

/// Search a catalog by comma-separated ingredients and build the results view
///
/// # Example
/// ```
/// use recipe_finder::{find_by_ingredients, Catalog, SearchView};
///
/// let view = find_by_ingredients(&Catalog::fallback(), "chicken, rice");
/// assert!(matches!(view, SearchView::Results { .. }));
/// ```
pub fn find_by_ingredients(catalog: &Catalog, input: &str) -> SearchView {
    view::search_view(&search_ingredients(input, catalog))
}

/// Build the detail view for a raw id parameter
///
/// # Example
/// ```
/// use recipe_finder::{recipe_detail, Catalog, DetailView};
///
/// let view = recipe_detail(&Catalog::fallback(), "7");
/// assert!(matches!(view, DetailView::NotFound { .. }));
/// ```
pub fn recipe_detail(catalog: &Catalog, raw_id: &str) -> DetailView {
    view::detail_view(&view::lookup_recipe(raw_id, catalog))
}
