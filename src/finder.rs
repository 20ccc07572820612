use log::{debug, info};
use std::time::Duration;
use tokio::time::sleep;

use crate::builder::RecipeFinderBuilder;
use crate::catalog::{Catalog, CatalogLoader, LoadStatus};
use crate::detect::{ImageSource, ImageUpload, IngredientDetector};
use crate::diagnostics::DiagnosticLog;
use crate::matcher::{filter_recipes, matches_any_ingredient, SearchOutcome};
use crate::query::{parse_ingredients, FilterQuery, IngredientQuery};
use crate::view::{self, DetailView, SearchView};
use crate::FinderError;

/// Result of searching with ingredients detected in an uploaded image
#[derive(Debug, Clone)]
pub struct ImageSearch {
    /// Name of the uploaded file
    pub upload: String,
    pub ingredients: Vec<String>,
    /// Text written into the ingredient field before searching
    pub query: String,
    pub view: SearchView,
}

/// A page session: owns the catalog and everything needed to query it.
///
/// Built through [`RecipeFinder::builder`], which awaits the initial load,
/// so no query can observe a catalog that is still being fetched.
pub struct RecipeFinder {
    catalog: Catalog,
    loader: CatalogLoader,
    detector: Box<dyn IngredientDetector>,
    detect_delay: Duration,
    diagnostics: DiagnosticLog,
}

impl RecipeFinder {
    /// Creates a new builder for a finder session
    pub fn builder() -> RecipeFinderBuilder {
        RecipeFinderBuilder::default()
    }

    pub(crate) fn new(
        loader: CatalogLoader,
        detector: Box<dyn IngredientDetector>,
        detect_delay: Duration,
    ) -> Self {
        Self {
            catalog: Catalog::default(),
            loader,
            detector,
            detect_delay,
            diagnostics: DiagnosticLog::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn loader(&self) -> &CatalogLoader {
        &self.loader
    }

    pub fn diagnostics(&self) -> &DiagnosticLog {
        &self.diagnostics
    }

    /// Reset the diagnostics panel
    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }

    /// Re-fetch the catalog, overwriting it on success
    pub async fn reload(&mut self) -> LoadStatus {
        self.loader
            .load_into(&mut self.catalog, &mut self.diagnostics)
            .await
    }

    async fn ensure_loaded(&mut self) {
        if self.catalog.is_empty() {
            debug!("Catalog is empty, loading before query");
            self.reload().await;
        }
    }

    /// Search by comma-separated ingredients
    pub async fn search(&mut self, input: &str) -> SearchView {
        self.ensure_loaded().await;

        let input = input.trim();
        self.diagnostics
            .record(format!("Search started with input: \"{}\"", input));

        let tokens = match parse_ingredients(input) {
            IngredientQuery::Missing => {
                return view::search_view(&SearchOutcome::MissingInput);
            }
            IngredientQuery::Tokens(tokens) => tokens,
        };

        self.diagnostics.record(format!(
            "Parsed ingredients: {}",
            serde_json::to_string(&tokens).unwrap_or_default()
        ));

        let mut matches = Vec::new();
        for recipe in self.catalog.iter() {
            let has_match = matches_any_ingredient(&tokens, recipe);
            self.diagnostics
                .record(format!("Recipe \"{}\" match: {}", recipe.name, has_match));
            if has_match {
                matches.push(recipe);
            }
        }

        self.diagnostics
            .record(format!("Found {} matching recipes", matches.len()));
        info!("Ingredient search returned {} recipes", matches.len());

        view::search_view(&SearchOutcome::from_matches(matches))
    }

    /// Search text plus region and type filters
    pub async fn filter(&mut self, query: &FilterQuery) -> SearchView {
        self.ensure_loaded().await;

        let matches = filter_recipes(query, &self.catalog);
        info!("Filtered search returned {} recipes", matches.len());
        view::results_view(&matches)
    }

    /// Detail page for the raw `id` parameter
    pub async fn detail(&mut self, raw_id: &str) -> DetailView {
        self.ensure_loaded().await;

        view::detail_view(&view::lookup_recipe(raw_id, &self.catalog))
    }

    /// Detect ingredients in an uploaded image, then search for them after
    /// the configured delay.
    pub async fn search_from_image(
        &mut self,
        source: &ImageSource,
    ) -> Result<ImageSearch, FinderError> {
        let upload = ImageUpload::read(source).await?;
        self.diagnostics
            .record(format!("Image uploaded: {}", upload.name));

        let ingredients = self.detector.detect(&upload).await?;
        let query = ingredients.join(", ");
        self.diagnostics.record(format!(
            "Ingredients from image ({}): {}",
            self.detector.detector_name(),
            query
        ));

        debug!("Waiting {:?} before searching", self.detect_delay);
        sleep(self.detect_delay).await;

        let view = self.search(&query).await;
        Ok(ImageSearch {
            upload: upload.name,
            ingredients,
            query,
            view,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LoadPolicy;

    async fn fallback_finder() -> RecipeFinder {
        RecipeFinder::builder()
            .catalog_path("/nonexistent/recipes.json")
            .policy(LoadPolicy::Fallback)
            .detect_delay(Duration::ZERO)
            .build()
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_search_records_each_step() {
        let mut finder = fallback_finder().await;
        finder.clear();

        finder.search(" Chicken, rice ").await;

        let messages: Vec<_> = finder.diagnostics().messages().collect();
        assert_eq!(
            messages,
            vec![
                "Search started with input: \"Chicken, rice\"",
                "Parsed ingredients: [\"chicken\",\"rice\"]",
                "Recipe \"Chicken Rice Bowl\" match: true",
                "Recipe \"Tomato Pasta\" match: false",
                "Found 1 matching recipes",
            ]
        );
    }

    #[tokio::test]
    async fn test_blank_search_stops_after_first_message() {
        let mut finder = fallback_finder().await;
        finder.clear();

        let view = finder.search("   ").await;

        assert!(matches!(view, SearchView::Prompt { .. }));
        assert_eq!(finder.diagnostics().entries().len(), 1);
    }

    #[tokio::test]
    async fn test_clear_hides_diagnostics() {
        let mut finder = fallback_finder().await;
        assert!(finder.diagnostics().is_visible());

        finder.clear();

        assert!(!finder.diagnostics().is_visible());
        assert_eq!(finder.catalog().len(), 2);
    }

    #[tokio::test]
    async fn test_filter_on_fallback_catalog() {
        let mut finder = fallback_finder().await;

        let view = finder.filter(&FilterQuery::new("", "", "")).await;

        match view {
            SearchView::Results { cards, .. } => assert_eq!(cards.len(), 2),
            other => panic!("Expected results view, got {:?}", other),
        }
    }
}
