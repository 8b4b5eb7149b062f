//! Improvement suggestions for the top-ranked recipe.
//!
//! The AI is asked for a JSON object, but models wrap it in prose or code
//! fences often enough that the reply is scanned for the first balanced
//! object and then validated against a fixed schema. Anything that does not
//! validate degrades to a suggestion whose reasoning is the raw reply.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::llm::LlmProvider;
use crate::prompts::suggestion::{render_suggestion_prompt, SUGGESTION_PROMPT_NAME};
use crate::types::{Goal, RecipeCandidate, Substitution, Suggestion, SUGGESTION_PLACEHOLDER};

#[derive(Debug, Error, PartialEq)]
pub enum SuggestionParseError {
    #[error("No JSON object in response")]
    NoJsonObject,

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Response does not match the suggestion schema: {0}")]
    Schema(String),
}

/// A validated suggestion payload, without the best-recipe reference.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuggestionPayload {
    pub goal: Option<Goal>,
    pub reasoning: Option<String>,
    pub substitutions: Vec<Substitution>,
    pub improved_instructions: Vec<String>,
}

impl SuggestionPayload {
    fn apply_to(self, suggestion: &mut Suggestion) {
        suggestion.goal = self.goal;
        suggestion.reasoning = self.reasoning;
        suggestion.substitutions = self.substitutions;
        suggestion.improved_instructions = self.improved_instructions;
    }
}

#[derive(Debug, Deserialize)]
struct RawSuggestion {
    #[serde(default)]
    goal: Option<String>,
    #[serde(default)]
    reasoning: Option<String>,
    #[serde(default)]
    substitutions: Option<Vec<RawSubstitution>>,
    #[serde(default)]
    improved_instructions: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct RawSubstitution {
    from: String,
    to: String,
    #[serde(default)]
    benefit: Option<String>,
}

/// Find the first balanced `{...}` in `text`.
///
/// Braces inside JSON string literals (including escaped quotes) do not
/// count. If the first `{` never closes, later ones are tried.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let mut start = 0;

    while let Some(offset) = text[start..].find('{') {
        let open = start + offset;
        let mut depth = 0usize;
        let mut in_string = false;
        let mut escaped = false;

        for (i, &b) in bytes.iter().enumerate().skip(open) {
            if in_string {
                match b {
                    _ if escaped => escaped = false,
                    b'\\' => escaped = true,
                    b'"' => in_string = false,
                    _ => {}
                }
                continue;
            }
            match b {
                b'"' => in_string = true,
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(&text[open..=i]);
                    }
                }
                _ => {}
            }
        }

        start = open + 1;
    }

    None
}

/// Parse and validate an AI reply against the suggestion schema.
pub fn parse_suggestion(text: &str) -> Result<SuggestionPayload, SuggestionParseError> {
    let object = extract_json_object(text).ok_or(SuggestionParseError::NoJsonObject)?;

    let value: Value = serde_json::from_str(object)
        .map_err(|e| SuggestionParseError::InvalidJson(e.to_string()))?;

    let raw: RawSuggestion =
        serde_json::from_value(value).map_err(|e| SuggestionParseError::Schema(e.to_string()))?;

    let goal = match raw.goal.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(g) => Some(
            Goal::parse(g)
                .ok_or_else(|| SuggestionParseError::Schema(format!("unknown goal: {}", g)))?,
        ),
    };

    let substitutions = raw
        .substitutions
        .unwrap_or_default()
        .into_iter()
        .map(|s| Substitution {
            from: s.from,
            to: s.to,
            benefit: s.benefit.unwrap_or_default(),
        })
        .collect();

    Ok(SuggestionPayload {
        goal,
        reasoning: raw.reasoning,
        substitutions,
        improved_instructions: raw.improved_instructions.unwrap_or_default(),
    })
}

/// Build the suggestion for `best` from a raw AI reply.
pub fn suggestion_from_reply(best: &RecipeCandidate, reply: &str) -> Suggestion {
    let mut suggestion = Suggestion::for_recipe(best);

    match parse_suggestion(reply) {
        Ok(payload) => payload.apply_to(&mut suggestion),
        Err(e) => {
            tracing::debug!(error = %e, "suggestion reply did not validate, using raw text");
            suggestion.reasoning = Some(reply.to_string());
        }
    }

    suggestion
}

/// Ask the AI for one improvement to `best`. Never fails: AI errors degrade
/// to a placeholder reasoning with empty lists.
pub async fn suggest_improvement(
    llm: &dyn LlmProvider,
    best: &RecipeCandidate,
    ingredients: &str,
) -> Suggestion {
    let prompt = render_suggestion_prompt(&best.title, ingredients, &best.instructions);

    match llm.complete(&prompt).await {
        Ok(reply) => suggestion_from_reply(best, &reply),
        Err(e) => {
            tracing::warn!(
                prompt_name = SUGGESTION_PROMPT_NAME,
                recipe_id = best.id,
                error = %e,
                "AI suggestion failed"
            );
            let mut suggestion = Suggestion::for_recipe(best);
            suggestion.reasoning = Some(SUGGESTION_PLACEHOLDER.to_string());
            suggestion
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::FakeProvider;

    fn best() -> RecipeCandidate {
        RecipeCandidate {
            id: 42,
            title: "Creamy Chicken Pasta".to_string(),
            image: None,
            used_ingredient_count: 2,
            missed_ingredient_count: 1,
            used_ingredients: vec![],
            missed_ingredients: vec![],
            likes: 10,
            instructions: "Boil pasta. Add cream.".to_string(),
            score: 4.2,
        }
    }

    #[test]
    fn test_extract_plain_object() {
        assert_eq!(extract_json_object(r#"{"a": 1}"#), Some(r#"{"a": 1}"#));
    }

    #[test]
    fn test_extract_from_fenced_prose() {
        let text = "Sure! Here you go:\n```json\n{\"goal\": \"faster\", \"x\": {\"y\": 1}}\n```\nEnjoy {not json}";
        assert_eq!(
            extract_json_object(text),
            Some("{\"goal\": \"faster\", \"x\": {\"y\": 1}}")
        );
    }

    #[test]
    fn test_extract_ignores_braces_in_strings() {
        let text = r#"{"reasoning": "use } and { freely \" ok", "goal": "cheaper"} trailing }"#;
        assert_eq!(
            extract_json_object(text),
            Some(r#"{"reasoning": "use } and { freely \" ok", "goal": "cheaper"}"#)
        );
    }

    #[test]
    fn test_extract_none() {
        assert_eq!(extract_json_object("no braces here"), None);
        assert_eq!(extract_json_object("{ never closed"), None);
    }

    #[test]
    fn test_parse_full_payload() {
        let payload = parse_suggestion(
            r#"{
                "goal": "Healthier",
                "reasoning": "Less saturated fat",
                "substitutions": [{"from": "cream", "to": "yogurt", "benefit": "less fat"}, {"from": "salt", "to": "herbs"}],
                "improved_instructions": ["Boil pasta", "Stir in yogurt off the heat"]
            }"#,
        )
        .unwrap();

        assert_eq!(payload.goal, Some(Goal::Healthier));
        assert_eq!(payload.reasoning.as_deref(), Some("Less saturated fat"));
        assert_eq!(payload.substitutions.len(), 2);
        assert_eq!(payload.substitutions[1].benefit, "");
        assert_eq!(payload.improved_instructions.len(), 2);
    }

    #[test]
    fn test_parse_rejects_unknown_goal() {
        let err = parse_suggestion(r#"{"goal": "tastier"}"#).unwrap_err();
        assert!(matches!(err, SuggestionParseError::Schema(_)));
    }

    #[test]
    fn test_parse_rejects_wrong_types() {
        let err = parse_suggestion(r#"{"improved_instructions": "just one string"}"#).unwrap_err();
        assert!(matches!(err, SuggestionParseError::Schema(_)));
    }

    #[test]
    fn test_parse_malformed_json() {
        let err = parse_suggestion(r#"{"goal": "faster",}"#).unwrap_err();
        assert!(matches!(err, SuggestionParseError::InvalidJson(_)));
    }

    #[test]
    fn test_parse_nulls_are_empty() {
        let payload =
            parse_suggestion(r#"{"goal": null, "substitutions": null, "improved_instructions": null}"#)
                .unwrap();
        assert_eq!(payload, SuggestionPayload::default());
    }

    #[test]
    fn test_reply_fallback_uses_raw_text() {
        let reply = "I would make it faster {but this is not json}";
        let suggestion = suggestion_from_reply(&best(), reply);

        assert_eq!(suggestion.best_recipe_id, 42);
        assert_eq!(suggestion.goal, None);
        assert_eq!(suggestion.reasoning.as_deref(), Some(reply));
        assert!(suggestion.substitutions.is_empty());
        assert!(suggestion.improved_instructions.is_empty());
    }

    #[test]
    fn test_blank_reply_keeps_empty_reasoning() {
        let suggestion = suggestion_from_reply(&best(), "  ");

        assert_eq!(suggestion.best_recipe_id, 42);
        assert_eq!(suggestion.reasoning.as_deref(), Some("  "));
        assert_ne!(suggestion.reasoning.as_deref(), Some(SUGGESTION_PLACEHOLDER));
        assert!(suggestion.substitutions.is_empty());
    }

    #[tokio::test]
    async fn test_suggest_improvement_success() {
        let llm = FakeProvider::with_response(
            "autonomous cooking assistant",
            r#"```json
{"goal": "cheaper", "reasoning": "Cream is pricey", "substitutions": [{"from": "cream", "to": "milk", "benefit": "cheaper"}], "improved_instructions": ["Boil pasta", "Add milk"]}
```"#,
        );

        let suggestion = suggest_improvement(&llm, &best(), "chicken, pasta").await;
        assert_eq!(suggestion.best_recipe_title, "Creamy Chicken Pasta");
        assert_eq!(suggestion.goal, Some(Goal::Cheaper));
        assert_eq!(suggestion.substitutions[0].to, "milk");
        assert_eq!(suggestion.improved_instructions, vec!["Boil pasta", "Add milk"]);
    }

    #[tokio::test]
    async fn test_suggest_improvement_ai_failure() {
        let llm = FakeProvider::new().and_failure("autonomous", "503");
        let suggestion = suggest_improvement(&llm, &best(), "chicken").await;

        assert_eq!(suggestion.best_recipe_id, 42);
        assert_eq!(suggestion.reasoning.as_deref(), Some(SUGGESTION_PLACEHOLDER));
        assert!(suggestion.substitutions.is_empty());
    }

    #[tokio::test]
    async fn test_suggest_prompt_carries_recipe() {
        let llm = FakeProvider::with_response("Current instructions: Boil pasta. Add cream.", "{}");
        let suggestion = suggest_improvement(&llm, &best(), "chicken").await;
        assert_eq!(suggestion.reasoning, None);
        assert_eq!(llm.calls(), 1);
    }
}
