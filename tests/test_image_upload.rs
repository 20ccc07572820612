use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use recipe_finder::detect::ImageUpload;
use recipe_finder::{FinderError, ImageSource, IngredientDetector, RecipeFinder, SearchView};
use std::io::Write;
use std::time::Duration;

struct PantryDetector;

#[async_trait]
impl IngredientDetector for PantryDetector {
    fn detector_name(&self) -> &str {
        "pantry"
    }

    async fn detect(&self, _image: &ImageUpload) -> Result<Vec<String>, FinderError> {
        Ok(vec!["Pasta".to_string(), "Basil".to_string()])
    }
}

fn fallback_finder_path() -> &'static str {
    "/nonexistent/recipes.json"
}

#[tokio::test]
async fn test_upload_searches_with_simulated_ingredients() {
    let mut image = tempfile::Builder::new().suffix(".jpg").tempfile().unwrap();
    image.write_all(b"\xff\xd8\xff fridge photo").unwrap();

    let mut finder = RecipeFinder::builder()
        .catalog_path(fallback_finder_path())
        .detect_delay(Duration::ZERO)
        .build()
        .await
        .unwrap();

    let source = ImageSource::Path(image.path().to_str().unwrap().to_string());
    let result = finder.search_from_image(&source).await.unwrap();

    assert!(result.upload.ends_with(".jpg"));
    assert_eq!(result.ingredients, vec!["chicken", "tomatoes", "onion"]);
    assert_eq!(result.query, "chicken, tomatoes, onion");
    match result.view {
        SearchView::Results { cards, .. } => {
            let ids: Vec<i64> = cards.iter().map(|c| c.id).collect();
            assert_eq!(ids, vec![1, 2]);
        }
        other => panic!("Expected results view, got {:?}", other),
    }

    let messages: Vec<_> = finder.diagnostics().messages().collect();
    assert!(messages.iter().any(|m| m.starts_with("Image uploaded: ")));
    assert!(messages.contains(&"Ingredients from image (simulated): chicken, tomatoes, onion"));
    assert!(messages.contains(&"Search started with input: \"chicken, tomatoes, onion\""));
}

#[tokio::test(start_paused = true)]
async fn test_search_waits_for_detection_delay() {
    let mut finder = RecipeFinder::builder()
        .catalog_path(fallback_finder_path())
        .detect_delay(Duration::from_millis(1000))
        .build()
        .await
        .unwrap();

    let start = tokio::time::Instant::now();
    let source = ImageSource::Base64(STANDARD.encode(b"photo"));
    finder.search_from_image(&source).await.unwrap();

    assert!(start.elapsed() >= Duration::from_millis(1000));
}

#[tokio::test]
async fn test_custom_detector_replaces_simulation() {
    let mut finder = RecipeFinder::builder()
        .catalog_path(fallback_finder_path())
        .detector(PantryDetector)
        .detect_delay(Duration::ZERO)
        .build()
        .await
        .unwrap();

    let source = ImageSource::Base64(STANDARD.encode(b"photo"));
    let result = finder.search_from_image(&source).await.unwrap();

    assert_eq!(result.query, "Pasta, Basil");
    match result.view {
        SearchView::Results { cards, .. } => assert_eq!(cards[0].title, "Tomato Pasta"),
        other => panic!("Expected results view, got {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_image_is_an_error() {
    let mut finder = RecipeFinder::builder()
        .catalog_path(fallback_finder_path())
        .detect_delay(Duration::ZERO)
        .build()
        .await
        .unwrap();

    let source = ImageSource::Path("/nonexistent/fridge.jpg".to_string());
    let result = finder.search_from_image(&source).await;

    assert!(matches!(result, Err(FinderError::IoError(_))));
}
