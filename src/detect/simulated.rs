use async_trait::async_trait;
use log::debug;

use super::{ImageUpload, IngredientDetector};
use crate::FinderError;

/// Reports the same ingredients for every image without looking at it
pub struct SimulatedDetector {
    ingredients: Vec<String>,
}

impl SimulatedDetector {
    pub fn new(ingredients: Vec<String>) -> Self {
        Self { ingredients }
    }
}

impl Default for SimulatedDetector {
    fn default() -> Self {
        Self::new(vec![
            "chicken".to_string(),
            "tomatoes".to_string(),
            "onion".to_string(),
        ])
    }
}

#[async_trait]
impl IngredientDetector for SimulatedDetector {
    fn detector_name(&self) -> &str {
        "simulated"
    }

    async fn detect(&self, image: &ImageUpload) -> Result<Vec<String>, FinderError> {
        debug!(
            "Simulating detection for {} ({} bytes)",
            image.name,
            image.data.len()
        );
        Ok(self.ingredients.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_output_ignores_image() {
        let detector = SimulatedDetector::default();
        let first = ImageUpload {
            name: "a.jpg".to_string(),
            data: vec![1, 2, 3],
        };
        let second = ImageUpload {
            name: "b.png".to_string(),
            data: vec![9; 64],
        };

        let expected = vec!["chicken", "tomatoes", "onion"];
        assert_eq!(detector.detect(&first).await.unwrap(), expected);
        assert_eq!(detector.detect(&second).await.unwrap(), expected);
    }
}
