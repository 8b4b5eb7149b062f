pub mod config;
pub mod enrich;
pub mod error;
pub mod finder;
pub mod http;
pub mod llm;
pub mod prompts;
pub mod ranking;
pub mod recipes;
pub mod sanitize;
pub mod suggest;
pub mod types;
pub mod view;

pub use config::AppConfig;
pub use error::{FetchError, FindError};
pub use finder::RecipeFinder;
pub use http::{HttpClient, MockClient, MockResponse, ReqwestClient, ReqwestClientBuilder};
pub use llm::{FakeProvider, GeminiProvider, LlmError, LlmProvider};
pub use ranking::{rank, score};
pub use recipes::{FakeRecipeSource, RecipeSource, RecipeSourceError, SearchHit, SpoonacularSource};
pub use sanitize::sanitize_ingredients;
pub use suggest::{parse_suggestion, suggest_improvement, SuggestionParseError};
pub use types::{
    FindRecipesResponse, Goal, IngredientRef, RecipeCandidate, Substitution, Suggestion,
    INSTRUCTIONS_PLACEHOLDER, SUGGESTION_PLACEHOLDER,
};
