use super::{DetailView, SearchView};

pub fn render_search(view: &SearchView) -> String {
    match view {
        SearchView::Prompt { message } => message.clone(),
        SearchView::NoResults { message, .. } => message.clone(),
        SearchView::Results { heading, cards } => {
            let mut out = heading.clone();
            for card in cards {
                out.push_str(&format!(
                    "\n\n[{}] {}\n  Ingredients: {}\n  Difficulty: {} | Time: {}\n  {}",
                    card.id,
                    card.title,
                    card.ingredients,
                    card.difficulty,
                    card.cook_time,
                    card.preview
                ));
            }
            out
        }
    }
}

pub fn render_detail(view: &DetailView) -> String {
    match view {
        DetailView::NotFound { message, .. } => message.clone(),
        DetailView::Found(detail) => {
            let mut out = format!(
                "{}\nDifficulty: {} | Cook Time: {}\n\nIngredients:",
                detail.title, detail.difficulty, detail.cook_time
            );
            for ingredient in &detail.ingredients {
                out.push_str(&format!("\n  - {}", ingredient));
            }
            out.push_str(&format!("\n\nInstructions:\n{}", detail.instructions));
            out
        }
    }
}
