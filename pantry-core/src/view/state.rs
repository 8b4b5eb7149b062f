//! Search lifecycle: idle → loading → rendered / empty / failed.

use crate::types::FindRecipesResponse;

/// Shown when the user searches with nothing typed.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter some ingredients!";

/// Shown when the request or its decoding fails.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to load recipes. Check backend or API keys.";

/// Where a client is in the search lifecycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Loading {
        query: String,
    },
    Rendered(FindRecipesResponse),
    Empty,
    Failed {
        message: String,
    },
}

/// How a fetch ended.
#[derive(Debug)]
pub enum SearchOutcome {
    Loaded(FindRecipesResponse),
    Failed(String),
}

impl SearchState {
    /// Start a search. Blank input is rejected with a user-facing message
    /// and leaves the state untouched.
    ///
    /// Returns the trimmed query to send.
    pub fn begin(&mut self, input: &str) -> Result<String, &'static str> {
        let query = input.trim();
        if query.is_empty() {
            return Err(EMPTY_INPUT_MESSAGE);
        }
        *self = SearchState::Loading {
            query: query.to_string(),
        };
        Ok(query.to_string())
    }

    /// Finish the in-flight search. Always leaves the loading state,
    /// whatever the outcome.
    pub fn finish(&mut self, outcome: SearchOutcome) {
        *self = match outcome {
            SearchOutcome::Loaded(response) if response.recipes.is_empty() => SearchState::Empty,
            SearchOutcome::Loaded(response) => SearchState::Rendered(response),
            SearchOutcome::Failed(error) => {
                tracing::error!(error = %error, "recipe fetch failed");
                SearchState::Failed {
                    message: FETCH_FAILED_MESSAGE.to_string(),
                }
            }
        };
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading { .. })
    }

    /// The response being shown, if any.
    pub fn response(&self) -> Option<&FindRecipesResponse> {
        match self {
            SearchState::Rendered(response) => Some(response),
            _ => None,
        }
    }
}
