use thiserror::Error;

/// Errors that can occur while loading, searching or uploading
#[derive(Error, Debug)]
pub enum FinderError {
    /// Failed to fetch the catalog over HTTP
    #[error("Failed to fetch catalog: {0}")]
    FetchError(#[from] reqwest::Error),

    /// Failed to read a local file (catalog or uploaded image)
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// The catalog source was reachable but its content is not a recipe list
    #[error("Malformed catalog: {0}")]
    MalformedCatalog(#[from] serde_json::Error),

    /// The catalog source answered but could not be used
    #[error("Failed to load {0}")]
    CatalogUnavailable(String),

    /// Uploaded image payload is not valid base64
    #[error("Invalid image data: {0}")]
    InvalidImage(#[from] base64::DecodeError),

    /// An upload carried no image content
    #[error("Uploaded image is empty: {0}")]
    EmptyUpload(String),

    /// Ingredient detection failed
    #[error("Ingredient detection failed: {0}")]
    DetectionError(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
