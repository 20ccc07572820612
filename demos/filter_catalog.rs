//! Free-text search with region and type filters
//!
//! Uses the pure matcher functions on a catalog loaded once up front.

use recipe_finder::view::{html, results_view};
use recipe_finder::{filter_recipes, load_catalog, FilterQuery};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let location = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "recipes.json".to_string());
    let catalog = load_catalog(&location).await?;

    let everything = filter_recipes(&FilterQuery::default(), &catalog);
    println!("All recipes: {}", everything.len());

    let query = FilterQuery::new("rice", "", "").with_region("Thai");
    let thai = filter_recipes(&query, &catalog);
    println!("{}", html::render_search(&results_view(&thai)));

    Ok(())
}
