//! Prompt for generating instructions when the recipe API has none.

/// Prompt name used in log lines.
pub const INSTRUCTIONS_PROMPT_NAME: &str = "generate_instructions";

/// Render the instruction-generation prompt for a recipe title and the
/// user's ingredient list.
pub fn render_instructions_prompt(title: &str, ingredients: &str) -> String {
    format!(
        "Generate step-by-step cooking instructions for a recipe called \"{title}\" using the following ingredients: {ingredients}.",
        title = title,
        ingredients = ingredients
    )
}
