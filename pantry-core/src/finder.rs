//! The recipe finder: search, enrich, rank, suggest.

use std::sync::Arc;
use tokio::task::JoinSet;

use crate::config::{AppConfig, DEFAULT_SEARCH_LIMIT};
use crate::enrich::enrich_candidate;
use crate::error::FindError;
use crate::http::HttpClient;
use crate::llm::{create_provider, LlmProvider};
use crate::ranking::rank;
use crate::recipes::{RecipeSource, SearchHit, SpoonacularSource};
use crate::sanitize::normalize_query;
use crate::suggest::suggest_improvement;
use crate::types::{FindRecipesResponse, RecipeCandidate, INSTRUCTIONS_PLACEHOLDER};

/// Orchestrates one ingredient query end to end.
///
/// Holds no per-request state, so a single instance can serve concurrent
/// requests.
#[derive(Clone)]
pub struct RecipeFinder {
    source: Arc<dyn RecipeSource>,
    llm: Arc<dyn LlmProvider>,
    search_limit: u32,
}

impl RecipeFinder {
    pub fn new(source: Arc<dyn RecipeSource>, llm: Arc<dyn LlmProvider>) -> Self {
        Self {
            source,
            llm,
            search_limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    /// Number of candidates requested from the search.
    pub fn with_search_limit(mut self, limit: u32) -> Self {
        self.search_limit = limit;
        self
    }

    /// Wire up the production Spoonacular source and Gemini provider.
    pub fn from_config(config: &AppConfig, http: Arc<dyn HttpClient>) -> Self {
        let source = Arc::new(SpoonacularSource::new(
            http.clone(),
            &config.spoonacular_base_url,
            config.spoonacular_api_key.clone(),
        ));
        let llm = create_provider(config, http);
        Self::new(source, llm).with_search_limit(config.search_limit)
    }

    /// Search, enrich, rank, and attach an improvement suggestion.
    ///
    /// Only a blank query or a failed search is an error. Detail and AI
    /// failures degrade to placeholders.
    pub async fn find_recipes(&self, raw: Option<&str>) -> Result<FindRecipesResponse, FindError> {
        let ingredients = normalize_query(raw).ok_or(FindError::InvalidRequest)?;

        tracing::info!(ingredients = %ingredients, "fetching recipes");

        let hits = self
            .source
            .search_by_ingredients(&ingredients, self.search_limit)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "recipe search failed");
                FindError::Upstream(e)
            })?;

        if hits.is_empty() {
            tracing::info!("no recipes found");
            return Ok(FindRecipesResponse::empty());
        }

        let mut recipes = self.enrich_all(hits, &ingredients).await;
        rank(&mut recipes);

        let agentic = match recipes.first() {
            Some(best) => Some(suggest_improvement(self.llm.as_ref(), best, &ingredients).await),
            None => None,
        };

        tracing::info!(count = recipes.len(), "returning recipes");
        Ok(FindRecipesResponse { recipes, agentic })
    }

    /// Enrich every hit concurrently, preserving input order.
    ///
    /// Each task owns its hit, so one failing (or panicking) task only
    /// affects its own slot.
    async fn enrich_all(&self, hits: Vec<SearchHit>, ingredients: &str) -> Vec<RecipeCandidate> {
        let ingredients: Arc<str> = Arc::from(ingredients);
        let mut slots: Vec<Option<RecipeCandidate>> = vec![None; hits.len()];
        let mut tasks = JoinSet::new();

        for (index, hit) in hits.iter().cloned().enumerate() {
            let source = self.source.clone();
            let llm = self.llm.clone();
            let ingredients = ingredients.clone();

            tasks.spawn(async move {
                let candidate =
                    enrich_candidate(source.as_ref(), llm.as_ref(), hit, &ingredients).await;
                (index, candidate)
            });
        }

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, candidate)) => slots[index] = Some(candidate),
                Err(e) => tracing::warn!(error = %e, "recipe enrichment task failed"),
            }
        }

        slots
            .into_iter()
            .zip(hits)
            .map(|(slot, hit)| {
                slot.unwrap_or_else(|| hit.into_candidate(INSTRUCTIONS_PLACEHOLDER.to_string()))
            })
            .collect()
    }
}
