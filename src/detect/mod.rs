mod simulated;

pub use simulated::SimulatedDetector;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::debug;
use std::path::Path;

use crate::config::DetectorConfig;
use crate::FinderError;

/// Where an uploaded image comes from
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// Image from a file path
    Path(String),
    /// Image as base64-encoded data
    Base64(String),
}

/// An uploaded image, read into memory
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub name: String,
    pub data: Vec<u8>,
}

impl ImageUpload {
    /// Read the image behind `source`; an upload without content is rejected
    pub async fn read(source: &ImageSource) -> Result<Self, FinderError> {
        let upload = match source {
            ImageSource::Path(path) => {
                let data = tokio::fs::read(path).await?;
                let name = Path::new(path)
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.clone());
                ImageUpload { name, data }
            }
            ImageSource::Base64(encoded) => ImageUpload {
                name: "base64-image".to_string(),
                data: STANDARD.decode(encoded.trim())?,
            },
        };

        if upload.data.is_empty() {
            return Err(FinderError::EmptyUpload(upload.name));
        }

        debug!("Read image {} ({} bytes)", upload.name, upload.data.len());
        Ok(upload)
    }
}

/// Turns an image into a list of ingredient names
#[async_trait]
pub trait IngredientDetector: Send + Sync {
    /// Get the detector name (e.g. "simulated")
    fn detector_name(&self) -> &str;

    async fn detect(&self, image: &ImageUpload) -> Result<Vec<String>, FinderError>;
}

pub struct DetectorFactory;

impl DetectorFactory {
    /// Create a detector instance from configuration
    pub fn create(config: &DetectorConfig) -> Result<Box<dyn IngredientDetector>, FinderError> {
        match config.kind.as_str() {
            "simulated" => Ok(Box::new(SimulatedDetector::new(
                config.ingredients.clone(),
            ))),
            other => Err(FinderError::DetectionError(format!(
                "Unknown detector: {} (available: {})",
                other,
                Self::available_detectors().join(", ")
            ))),
        }
    }

    /// List all available detector names
    pub fn available_detectors() -> Vec<&'static str> {
        vec!["simulated"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_read_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"\x89PNG fake").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let upload = ImageUpload::read(&ImageSource::Path(path)).await.unwrap();
        assert_eq!(upload.data, b"\x89PNG fake");
        assert!(!upload.name.contains('/'));
    }

    #[tokio::test]
    async fn test_read_from_base64() {
        let encoded = STANDARD.encode(b"fridge");
        let upload = ImageUpload::read(&ImageSource::Base64(encoded))
            .await
            .unwrap();
        assert_eq!(upload.name, "base64-image");
        assert_eq!(upload.data, b"fridge");
    }

    #[tokio::test]
    async fn test_invalid_base64() {
        let result = ImageUpload::read(&ImageSource::Base64("%%%".to_string())).await;
        assert!(matches!(result, Err(FinderError::InvalidImage(_))));
    }

    #[tokio::test]
    async fn test_empty_upload_is_rejected() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let result = ImageUpload::read(&ImageSource::Path(path)).await;
        assert!(matches!(result, Err(FinderError::EmptyUpload(_))));
    }

    #[test]
    fn test_create_simulated_detector() {
        let detector = DetectorFactory::create(&DetectorConfig::default()).unwrap();
        assert_eq!(detector.detector_name(), "simulated");
    }

    #[test]
    fn test_create_unknown_detector() {
        let config = DetectorConfig {
            kind: "vision".to_string(),
            ..Default::default()
        };
        let result = DetectorFactory::create(&config);
        assert!(result.is_err());
        if let Err(e) = result {
            assert!(e.to_string().contains("Unknown detector"));
        }
    }
}
