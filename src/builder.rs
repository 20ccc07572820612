use log::debug;
use std::path::PathBuf;
use std::time::Duration;

use crate::catalog::{CatalogLoader, CatalogSource, LoadPolicy};
use crate::config::FinderConfig;
use crate::detect::{DetectorFactory, IngredientDetector};
use crate::{FinderError, RecipeFinder};

/// Builder for configuring a [`RecipeFinder`] session.
///
/// Explicit settings win over values taken from a [`FinderConfig`].
#[derive(Default)]
pub struct RecipeFinderBuilder {
    config: Option<FinderConfig>,
    source: Option<CatalogSource>,
    policy: Option<LoadPolicy>,
    timeout: Option<Duration>,
    detector: Option<Box<dyn IngredientDetector>>,
    detect_delay: Option<Duration>,
}

impl RecipeFinderBuilder {
    /// Start from a loaded configuration
    ///
    /// # Example
    /// ```
    /// use recipe_finder::{FinderConfig, RecipeFinder};
    ///
    /// let builder = RecipeFinder::builder().config(FinderConfig::default());
    /// ```
    pub fn config(mut self, config: FinderConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Read the catalog from a JSON file
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeFinder;
    ///
    /// let builder = RecipeFinder::builder().catalog_path("data/recipes.json");
    /// ```
    pub fn catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(CatalogSource::Path(path.into()));
        self
    }

    /// Fetch the catalog over HTTP(S)
    pub fn catalog_url(mut self, url: impl Into<String>) -> Self {
        self.source = Some(CatalogSource::Url(url.into()));
        self
    }

    pub fn source(mut self, source: CatalogSource) -> Self {
        self.source = Some(source);
        self
    }

    /// Choose how load failures are handled
    ///
    /// # Example
    /// ```
    /// use recipe_finder::{LoadPolicy, RecipeFinder};
    ///
    /// let builder = RecipeFinder::builder().policy(LoadPolicy::KeepPrevious);
    /// ```
    pub fn policy(mut self, policy: LoadPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Set a timeout for remote catalog requests
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Replace the configured ingredient detector
    pub fn detector(mut self, detector: impl IngredientDetector + 'static) -> Self {
        self.detector = Some(Box::new(detector));
        self
    }

    /// Set the pause between image detection and the automatic search
    pub fn detect_delay(mut self, delay: Duration) -> Self {
        self.detect_delay = Some(delay);
        self
    }

    /// Build the session and await its initial catalog load
    ///
    /// # Errors
    /// Returns `FinderError` if:
    /// - The catalog source is empty
    /// - The configured detector is unknown
    /// - The HTTP client cannot be created
    ///
    /// A catalog that fails to load is not an error; the load policy decides
    /// what the session starts with.
    ///
    /// # Example
    /// ```no_run
    /// # use recipe_finder::RecipeFinder;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut finder = RecipeFinder::builder()
    ///     .catalog_path("recipes.json")
    ///     .build()
    ///     .await?;
    /// let view = finder.search("chicken, rice").await;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<RecipeFinder, FinderError> {
        let config = self.config.unwrap_or_default();

        let source = match self.source {
            Some(source) => source,
            None => CatalogSource::parse(&config.catalog.source),
        };
        if source.to_string().trim().is_empty() {
            return Err(FinderError::BuilderError(
                "Catalog source cannot be empty".to_string(),
            ));
        }

        let policy = self.policy.unwrap_or(config.catalog.policy);
        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(config.catalog.timeout));

        let detector = match self.detector {
            Some(detector) => detector,
            None => DetectorFactory::create(&config.detector)?,
        };
        let detect_delay = self
            .detect_delay
            .unwrap_or(Duration::from_millis(config.detector.delay_ms));

        debug!(
            "Building finder: source={}, policy={}, detector={}",
            source,
            policy.as_str(),
            detector.detector_name()
        );

        let loader = CatalogLoader::new(source, policy, Some(timeout))?;
        let mut finder = RecipeFinder::new(loader, detector, detect_delay);
        finder.reload().await;

        Ok(finder)
    }
}
