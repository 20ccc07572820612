mod fallback;
mod source;

pub use fallback::fallback_recipes;
pub use source::{CatalogFetcher, CatalogSource};

use log::{debug, info, warn};
use serde::Deserialize;
use std::collections::HashSet;
use std::time::Duration;

use crate::diagnostics::DiagnosticLog;
use crate::model::Recipe;
use crate::FinderError;

/// Ordered, read-only collection of recipes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// The fixed two-recipe catalog substituted on load failure
    pub fn fallback() -> Self {
        Self::new(fallback_recipes())
    }

    /// Parse a JSON array of recipe objects.
    ///
    /// Only a document that is not a JSON array fails. A record without a
    /// usable integer `id` cannot be linked to, so it is skipped on its own.
    pub fn from_json(json: &str) -> Result<Self, FinderError> {
        let records: Vec<serde_json::Value> = serde_json::from_str(json)?;
        let mut recipes = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            match serde_json::from_value::<Recipe>(record) {
                Ok(recipe) => recipes.push(recipe),
                Err(e) => warn!("Skipping catalog record {}: {}", index, e),
            }
        }
        Ok(Self::new(recipes))
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// First recipe carrying `id`; duplicates after it are unreachable
    pub fn find(&self, id: i64) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// All ids in catalog order
    pub fn ids(&self) -> Vec<i64> {
        self.recipes.iter().map(|r| r.id).collect()
    }

    /// Every distinct ingredient string, in first-seen order
    pub fn unique_ingredients(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut unique = Vec::new();
        for recipe in &self.recipes {
            for ingredient in &recipe.ingredients {
                if seen.insert(ingredient.as_str()) {
                    unique.push(ingredient.as_str());
                }
            }
        }
        unique
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.iter()
    }
}

/// How the loader reacts when the source cannot be read or parsed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadPolicy {
    /// Substitute the fallback catalog and report it in diagnostics
    #[default]
    Fallback,
    /// Leave the current catalog untouched and say nothing to the user
    KeepPrevious,
}

impl LoadPolicy {
    pub fn as_str(&self) -> &str {
        match self {
            LoadPolicy::Fallback => "fallback",
            LoadPolicy::KeepPrevious => "keep_previous",
        }
    }
}

impl std::str::FromStr for LoadPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fallback" => Ok(LoadPolicy::Fallback),
            "keep_previous" | "keep-previous" => Ok(LoadPolicy::KeepPrevious),
            _ => Err(format!("Unknown load policy: {}", s)),
        }
    }
}

/// What a load attempt did to the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// The source was read; carries the number of recipes
    Loaded(usize),
    /// The source failed and the fallback catalog was installed
    Fallback,
    /// The source failed and the previous catalog was kept
    KeptPrevious,
}

/// Reads the catalog from its source and applies the load policy
pub struct CatalogLoader {
    source: CatalogSource,
    policy: LoadPolicy,
    fetcher: CatalogFetcher,
}

impl CatalogLoader {
    pub fn new(
        source: CatalogSource,
        policy: LoadPolicy,
        timeout: Option<Duration>,
    ) -> Result<Self, FinderError> {
        Ok(Self {
            source,
            policy,
            fetcher: CatalogFetcher::new(timeout)?,
        })
    }

    pub fn policy(&self) -> LoadPolicy {
        self.policy
    }

    /// Fetch and parse the source without applying any policy
    pub async fn fetch(&self) -> Result<Catalog, FinderError> {
        let body = self.fetcher.fetch(&self.source).await?;
        Catalog::from_json(&body)
    }

    /// Load into `catalog`, overwriting it on success.
    ///
    /// Failures never escape: they are resolved by the policy.
    pub async fn load_into(
        &self,
        catalog: &mut Catalog,
        diagnostics: &mut DiagnosticLog,
    ) -> LoadStatus {
        match self.fetch().await {
            Ok(loaded) => {
                info!("Loaded {} recipes from {}", loaded.len(), self.source);
                if self.policy == LoadPolicy::Fallback {
                    diagnostics.record(format!(
                        "Loaded {} recipes from {}",
                        loaded.len(),
                        self.source
                    ));
                    diagnostics.record(format!(
                        "Available ingredients: {}",
                        loaded.unique_ingredients().join(", ")
                    ));
                }
                let count = loaded.len();
                *catalog = loaded;
                LoadStatus::Loaded(count)
            }
            Err(e) => match self.policy {
                LoadPolicy::Fallback => {
                    warn!("Failed to load {}: {}", self.source, e);
                    diagnostics.record(format!("Error loading recipes: {}", e));
                    *catalog = Catalog::fallback();
                    diagnostics.record("Using fallback recipes");
                    LoadStatus::Fallback
                }
                LoadPolicy::KeepPrevious => {
                    debug!(
                        "Failed to load {}, keeping {} recipes: {}",
                        self.source,
                        catalog.len(),
                        e
                    );
                    LoadStatus::KeptPrevious
                }
            },
        }
    }
}
