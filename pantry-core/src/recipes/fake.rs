//! In-memory recipe source for tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{RecipeInformation, RecipeSource, RecipeSourceError, SearchHit};
use crate::error::FetchError;

/// A recipe source with canned hits and per-recipe details.
///
/// Recipes with no registered details fail their detail lookup.
#[derive(Debug, Default)]
pub struct FakeRecipeSource {
    hits: Vec<SearchHit>,
    details: HashMap<i64, RecipeInformation>,
    search_error: Option<String>,
    search_calls: AtomicUsize,
    detail_calls: AtomicUsize,
}

impl FakeRecipeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a search hit along with the instructions its detail lookup returns.
    pub fn with_recipe(mut self, hit: SearchHit, instructions: Option<&str>) -> Self {
        self.details.insert(
            hit.id,
            RecipeInformation {
                instructions: instructions.map(str::to_string),
            },
        );
        self.hits.push(hit);
        self
    }

    /// Add a search hit whose detail lookup fails.
    pub fn with_failing_details(mut self, hit: SearchHit) -> Self {
        self.details.remove(&hit.id);
        self.hits.push(hit);
        self
    }

    /// Make the search itself fail.
    pub fn with_search_error(mut self, message: &str) -> Self {
        self.search_error = Some(message.to_string());
        self
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::Relaxed)
    }

    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl RecipeSource for FakeRecipeSource {
    async fn search_by_ingredients(
        &self,
        _ingredients: &str,
        limit: u32,
    ) -> Result<Vec<SearchHit>, RecipeSourceError> {
        self.search_calls.fetch_add(1, Ordering::Relaxed);
        if let Some(message) = &self.search_error {
            return Err(FetchError::InvalidBody(message.clone()).into());
        }
        Ok(self.hits.iter().take(limit as usize).cloned().collect())
    }

    async fn recipe_information(&self, id: i64) -> Result<RecipeInformation, RecipeSourceError> {
        self.detail_calls.fetch_add(1, Ordering::Relaxed);
        self.details.get(&id).cloned().ok_or_else(|| {
            FetchError::Status {
                status: 404,
                url: format!("fake://recipes/{}/information", id),
            }
            .into()
        })
    }
}
