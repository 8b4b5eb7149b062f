//! Per-candidate enrichment: detail lookup plus AI-written instructions when
//! the recipe database has none.

use crate::llm::LlmProvider;
use crate::prompts::instructions::{render_instructions_prompt, INSTRUCTIONS_PROMPT_NAME};
use crate::recipes::{RecipeSource, SearchHit};
use crate::types::{RecipeCandidate, INSTRUCTIONS_PLACEHOLDER};

/// Ask the AI for instructions. Returns the placeholder on failure or blank output.
pub async fn generate_instructions(llm: &dyn LlmProvider, title: &str, ingredients: &str) -> String {
    let prompt = render_instructions_prompt(title, ingredients);

    match llm.complete(&prompt).await {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => {
            tracing::warn!(
                prompt_name = INSTRUCTIONS_PROMPT_NAME,
                title,
                "AI returned blank instructions"
            );
            INSTRUCTIONS_PLACEHOLDER.to_string()
        }
        Err(e) => {
            tracing::warn!(
                prompt_name = INSTRUCTIONS_PROMPT_NAME,
                title,
                error = %e,
                "instruction generation failed"
            );
            INSTRUCTIONS_PLACEHOLDER.to_string()
        }
    }
}

/// Turn one search hit into a candidate with non-empty instructions.
///
/// A failed detail lookup degrades straight to the placeholder without an
/// AI call; blank instructions from a successful lookup are generated.
pub async fn enrich_candidate(
    source: &dyn RecipeSource,
    llm: &dyn LlmProvider,
    hit: SearchHit,
    ingredients: &str,
) -> RecipeCandidate {
    let details = match source.recipe_information(hit.id).await {
        Ok(details) => details,
        Err(e) => {
            tracing::warn!(recipe_id = hit.id, error = %e, "failed to fetch recipe details");
            return hit.into_candidate(INSTRUCTIONS_PLACEHOLDER.to_string());
        }
    };

    let instructions = match details.instructions {
        Some(text) if !text.trim().is_empty() => text,
        _ => {
            tracing::debug!(recipe_id = hit.id, "no instructions upstream, generating");
            generate_instructions(llm, &hit.title, ingredients).await
        }
    };

    hit.into_candidate(instructions)
}
