//! Basic ingredient search with the finder session
//!
//! Loads `recipes.json` from the working directory (or the fallback recipes
//! when it is missing), searches by ingredients and opens the first result.

use recipe_finder::view::text;
use recipe_finder::{RecipeFinder, SearchView};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut finder = RecipeFinder::builder()
        .catalog_path("recipes.json")
        .build()
        .await?;
    println!("Catalog has {} recipes", finder.catalog().len());

    println!("\n=== Search: chicken, rice ===");
    let results = finder.search("chicken, rice").await;
    println!("{}", text::render_search(&results));

    if let SearchView::Results { cards, .. } = &results {
        println!("\n=== Detail for {} ===", cards[0].link);
        let detail = finder.detail(&cards[0].id.to_string()).await;
        println!("{}", text::render_detail(&detail));
    }

    println!("\n=== Diagnostics ===");
    for entry in finder.diagnostics().entries() {
        println!("{}", entry);
    }

    Ok(())
}
