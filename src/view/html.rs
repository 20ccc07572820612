use html_escape::{encode_double_quoted_attribute, encode_text};

use super::{DetailView, RecipeCard, SearchView};

/// Render the results area. All catalog and user text is escaped.
pub fn render_search(view: &SearchView) -> String {
    match view {
        SearchView::Prompt { message } => no_results(message),
        SearchView::NoResults { message, .. } => no_results(message),
        SearchView::Results { heading, cards } => {
            let mut html = format!("<h2>{}</h2>\n", encode_text(heading));
            for card in cards {
                html.push_str(&render_card(card));
            }
            html
        }
    }
}

fn render_card(card: &RecipeCard) -> String {
    format!(
        r#"<a class="recipe-card" href="{link}">
    <div class="recipe-title">{title}</div>
    <div class="recipe-ingredients"><strong>Ingredients:</strong> {ingredients}</div>
    <div class="recipe-meta">
        <span class="difficulty">Difficulty: {difficulty}</span>
        <span class="cook-time">Time: {cook_time}</span>
    </div>
    <div class="recipe-preview">{preview}</div>
    <div class="view-more">Click to view full recipe →</div>
</a>
"#,
        link = encode_double_quoted_attribute(&card.link),
        title = encode_text(&card.title),
        ingredients = encode_text(&card.ingredients),
        difficulty = encode_text(&card.difficulty),
        cook_time = encode_text(&card.cook_time),
        preview = encode_text(&card.preview),
    )
}

pub fn render_detail(view: &DetailView) -> String {
    match view {
        DetailView::NotFound { message, .. } => no_results(message),
        DetailView::Found(detail) => {
            let items: String = detail
                .ingredients
                .iter()
                .map(|i| format!("<li>{}</li>", encode_text(i)))
                .collect();

            format!(
                r#"<div class="recipe-full">
    <h1>{title}</h1>
    <div class="recipe-meta">
        <span class="difficulty">Difficulty: {difficulty}</span>
        <span class="cook-time">Cook Time: {cook_time}</span>
    </div>
    <div class="recipe-section">
        <h3>Ingredients:</h3>
        <ul class="ingredients-list">{items}</ul>
    </div>
    <div class="recipe-section">
        <h3>Instructions:</h3>
        <p class="instructions">{instructions}</p>
    </div>
</div>
"#,
                title = encode_text(&detail.title),
                difficulty = encode_text(&detail.difficulty),
                cook_time = encode_text(&detail.cook_time),
                items = items,
                instructions = encode_text(&detail.instructions),
            )
        }
    }
}

fn no_results(message: &str) -> String {
    format!("<div class=\"no-results\">{}</div>", encode_text(message))
}
