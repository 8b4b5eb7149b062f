//! Prompt asking the AI to pick one improvement goal for a recipe.

/// Prompt name used in log lines.
pub const SUGGESTION_PROMPT_NAME: &str = "agentic_suggestion";

/// Render the improvement-suggestion prompt.
pub fn render_suggestion_prompt(title: &str, ingredients: &str, instructions: &str) -> String {
    format!(
        r#"You are an autonomous cooking assistant.
Pick ONE goal: healthier, cheaper, or faster.
Respond with JSON only, no other text, in exactly this shape:
{{
  "goal": "healthier",
  "reasoning": "why this goal suits the recipe",
  "substitutions": [
    {{"from": "cream", "to": "yogurt", "benefit": "less fat"}}
  ],
  "improved_instructions": ["Step 1", "Step 2"]
}}
Recipe: {title}
Ingredients: {ingredients}
Current instructions: {instructions}"#,
        title = title,
        ingredients = ingredients,
        instructions = instructions
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_prompt() {
        let prompt = render_suggestion_prompt("Risotto", "rice, stock", "Stir for 20 minutes.");

        assert!(prompt.contains("Pick ONE goal: healthier, cheaper, or faster."));
        assert!(prompt.contains("Recipe: Risotto"));
        assert!(prompt.contains("Ingredients: rice, stock"));
        assert!(prompt.contains("Current instructions: Stir for 20 minutes."));
        assert!(prompt.contains("\"improved_instructions\""));
        assert!(prompt.contains("{\"from\": \"cream\""));
    }
}
