use log::debug;
use reqwest::Client;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::FinderError;

/// Location of the recipe list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// A JSON file on disk
    Path(PathBuf),
    /// A JSON document served over HTTP(S)
    Url(String),
}

impl CatalogSource {
    /// Interpret a configured location: anything with an http(s) scheme is a
    /// URL, everything else is a file path.
    pub fn parse(location: &str) -> Self {
        let trimmed = location.trim();
        let lowered = trimmed.to_ascii_lowercase();
        if lowered.starts_with("http://") || lowered.starts_with("https://") {
            CatalogSource::Url(trimmed.to_string())
        } else {
            CatalogSource::Path(PathBuf::from(trimmed))
        }
    }
}

impl Default for CatalogSource {
    fn default() -> Self {
        CatalogSource::Path(PathBuf::from("recipes.json"))
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Path(path) => write!(f, "{}", path.display()),
            CatalogSource::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Reads the raw catalog document from its source
pub struct CatalogFetcher {
    client: Client,
}

impl CatalogFetcher {
    pub fn new(timeout: Option<Duration>) -> Result<Self, FinderError> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("Mozilla/5.0 (compatible; RecipeFinder/0.1)")
            .build()?;

        Ok(Self { client })
    }

    pub async fn fetch(&self, source: &CatalogSource) -> Result<String, FinderError> {
        match source {
            CatalogSource::Path(path) => {
                debug!("Reading catalog from {}", path.display());
                Ok(tokio::fs::read_to_string(path).await?)
            }
            CatalogSource::Url(url) => {
                debug!("Fetching catalog from {}", url);
                let response = self.client.get(url).send().await?;

                if !response.status().is_success() {
                    return Err(FinderError::CatalogUnavailable(format!(
                        "{} (status {})",
                        source,
                        response.status()
                    )));
                }

                Ok(response.text().await?)
            }
        }
    }
}
