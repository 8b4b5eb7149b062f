//! Plain-text rendering of the search views.

use pantry_core::view::{
    RecipeCard, RecipeDetail, SearchState, SuggestionPanel, NO_RECIPES_MESSAGE,
};
use pantry_core::FindRecipesResponse;
use std::fmt::Write;

pub fn render_state(state: &SearchState) -> String {
    match state {
        SearchState::Idle => String::new(),
        SearchState::Loading { query } => format!("Searching recipes for \"{}\"...\n", query),
        SearchState::Rendered(response) => render_results(response),
        SearchState::Empty => format!("{}\n", NO_RECIPES_MESSAGE),
        SearchState::Failed { message } => format!("{}\n", message),
    }
}

/// Numbered cards followed by the suggestion panel, if any.
pub fn render_results(response: &FindRecipesResponse) -> String {
    let mut out = String::new();

    for (i, recipe) in response.recipes.iter().enumerate() {
        let card = RecipeCard::from(recipe);
        let _ = writeln!(out, "{:>2}. {} ({})", i + 1, card.title, card.summary);
        if let Some(image) = &card.image {
            let _ = writeln!(out, "    {}", image);
        }
    }

    if let Some(panel) = SuggestionPanel::from_suggestion(response.agentic.as_ref()) {
        out.push('\n');
        out.push_str(&render_panel(&panel));
    }

    out
}

pub fn render_detail(detail: &RecipeDetail) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", detail.title);
    let _ = writeln!(out, "{}", "=".repeat(detail.title.chars().count()));
    if let Some(image) = &detail.image {
        let _ = writeln!(out, "{}", image);
    }

    let _ = writeln!(out, "\nUsed ingredients:");
    write_list(&mut out, &detail.used);
    let _ = writeln!(out, "\nMissing ingredients:");
    write_list(&mut out, &detail.missing);

    let _ = writeln!(out, "\nInstructions:\n{}", detail.instructions);
    out
}

pub fn render_panel(panel: &SuggestionPanel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "AI suggestion for {}", panel.recipe_title);
    let _ = writeln!(out, "{}", panel.goal_label);
    let _ = writeln!(out, "{}", panel.reasoning);

    if !panel.substitutions.is_empty() {
        let _ = writeln!(out, "\nSubstitutions:");
        write_list(&mut out, &panel.substitutions);
    }

    if !panel.steps.is_empty() {
        let _ = writeln!(out, "\nImproved steps:");
        for (i, step) in panel.steps.iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", i + 1, step);
        }
    }

    out
}

fn write_list(out: &mut String, items: &[String]) {
    if items.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for item in items {
        let _ = writeln!(out, "  - {}", item);
    }
}
