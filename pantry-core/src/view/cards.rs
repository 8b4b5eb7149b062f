//! View models for recipe cards, the detail view and the suggestion panel.

use crate::types::{RecipeCandidate, Suggestion};

/// Shown instead of cards when a search comes back empty.
pub const NO_RECIPES_MESSAGE: &str = "No recipes found.";

const NO_INSTRUCTIONS: &str = "No instructions available.";
const NO_REASONING: &str = "No reasoning provided by AI.";

/// One result card.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeCard {
    pub id: i64,
    pub title: String,
    pub image: Option<String>,
    /// e.g. "2 used, 1 missing"
    pub summary: String,
}

impl From<&RecipeCandidate> for RecipeCard {
    fn from(recipe: &RecipeCandidate) -> Self {
        Self {
            id: recipe.id,
            title: recipe.title.clone(),
            image: recipe.image.clone(),
            summary: format!(
                "{} used, {} missing",
                recipe.used_ingredients.len(),
                recipe.missed_ingredients.len()
            ),
        }
    }
}

/// The detail (modal) view of one recipe.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDetail {
    pub title: String,
    pub image: Option<String>,
    pub used: Vec<String>,
    pub missing: Vec<String>,
    pub instructions: String,
}

impl From<&RecipeCandidate> for RecipeDetail {
    fn from(recipe: &RecipeCandidate) -> Self {
        let instructions = if recipe.instructions.trim().is_empty() {
            NO_INSTRUCTIONS.to_string()
        } else {
            recipe.instructions.clone()
        };

        Self {
            title: recipe.title.clone(),
            image: recipe.image.clone(),
            used: recipe.used_ingredients.iter().map(|i| i.name.clone()).collect(),
            missing: recipe
                .missed_ingredients
                .iter()
                .map(|i| i.name.clone())
                .collect(),
            instructions,
        }
    }
}

/// The improvement-suggestion panel.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionPanel {
    pub recipe_title: String,
    /// "Goal: Healthier", or "Goal: Auto-detected" when the AI picked none.
    pub goal_label: String,
    pub reasoning: String,
    /// "from → to (benefit)"
    pub substitutions: Vec<String>,
    pub steps: Vec<String>,
}

impl SuggestionPanel {
    /// Build the panel, or `None` when there is nothing to show.
    pub fn from_suggestion(suggestion: Option<&Suggestion>) -> Option<Self> {
        suggestion.map(Self::from)
    }
}

impl From<&Suggestion> for SuggestionPanel {
    fn from(suggestion: &Suggestion) -> Self {
        let goal_label = match suggestion.goal {
            Some(goal) => format!("Goal: {}", capitalize(goal.as_str())),
            None => "Goal: Auto-detected".to_string(),
        };

        let reasoning = suggestion
            .reasoning
            .as_deref()
            .filter(|r| !r.trim().is_empty())
            .unwrap_or(NO_REASONING)
            .to_string();

        Self {
            recipe_title: suggestion.best_recipe_title.clone(),
            goal_label,
            reasoning,
            substitutions: suggestion
                .substitutions
                .iter()
                .map(|s| format!("{} → {} ({})", s.from, s.to, s.benefit))
                .collect(),
            steps: suggestion.improved_instructions.clone(),
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
