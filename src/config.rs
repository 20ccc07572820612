use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::catalog::LoadPolicy;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct FinderConfig {
    /// Where the catalog comes from and how load failures are handled
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Ingredient detection for image uploads
    #[serde(default)]
    pub detector: DetectorConfig,
}

/// Configuration for the catalog loader
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Path or http(s) URL of the recipe list
    #[serde(default = "default_source")]
    pub source: String,
    /// What to do when the source cannot be loaded
    #[serde(default)]
    pub policy: LoadPolicy,
    /// Request timeout in seconds (remote sources only)
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            policy: LoadPolicy::default(),
            timeout: default_timeout(),
        }
    }
}

/// Configuration for image ingredient detection
#[derive(Debug, Deserialize, Clone)]
pub struct DetectorConfig {
    /// Detector implementation name
    #[serde(default = "default_detector_kind")]
    pub kind: String,
    /// Ingredients reported by the simulated detector
    #[serde(default = "default_detected_ingredients")]
    pub ingredients: Vec<String>,
    /// Delay between detection and the automatic search, in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            kind: default_detector_kind(),
            ingredients: default_detected_ingredients(),
            delay_ms: default_delay_ms(),
        }
    }
}

// Default value functions
fn default_source() -> String {
    "recipes.json".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_detector_kind() -> String {
    "simulated".to_string()
}

fn default_detected_ingredients() -> Vec<String> {
    vec![
        "chicken".to_string(),
        "tomatoes".to_string(),
        "onion".to_string(),
    ]
}

fn default_delay_ms() -> u64 {
    1000
}

/// Load configuration from the named file (extension optional) plus environment
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with RECIPE_FINDER__ prefix
/// 2. The named TOML file
/// 3. Default values
///
/// Environment variable format: RECIPE_FINDER__CATALOG__SOURCE
pub fn load_config_from(name: &str) -> Result<FinderConfig, ConfigError> {
    load_layered(name, "RECIPE_FINDER")
}

fn load_layered(name: &str, env_prefix: &str) -> Result<FinderConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name(name).required(false))
        // Use double underscore for nested: RECIPE_FINDER__CATALOG__POLICY
        .add_source(
            Environment::with_prefix(env_prefix)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
