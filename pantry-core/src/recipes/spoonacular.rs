//! Spoonacular recipe search API.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use super::{RecipeInformation, RecipeSource, RecipeSourceError, SearchHit};
use crate::error::FetchError;
use crate::http::HttpClient;

/// Recipe source backed by the Spoonacular REST API.
pub struct SpoonacularSource {
    http: Arc<dyn HttpClient>,
    base_url: String,
    api_key: Option<String>,
}

impl SpoonacularSource {
    pub fn new(http: Arc<dyn HttpClient>, base_url: &str, api_key: Option<String>) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn api_key(&self) -> Result<String, FetchError> {
        self.api_key
            .clone()
            .ok_or_else(|| FetchError::NotConfigured("SPOON_KEY not set".to_string()))
    }

    fn search_url(&self) -> String {
        format!("{}/recipes/findByIngredients", self.base_url)
    }

    fn information_url(&self, id: i64) -> String {
        format!("{}/recipes/{}/information", self.base_url, id)
    }
}

/// Decode a search body. Anything that is not an array counts as no hits;
/// individual malformed entries are skipped.
fn parse_hits(body: Value) -> Vec<SearchHit> {
    let Value::Array(items) = body else {
        tracing::debug!("search response is not an array, treating as empty");
        return Vec::new();
    };

    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<SearchHit>(item) {
            Ok(hit) => Some(hit),
            Err(e) => {
                tracing::warn!(error = %e, "skipping malformed search hit");
                None
            }
        })
        .collect()
}

#[async_trait]
impl RecipeSource for SpoonacularSource {
    async fn search_by_ingredients(
        &self,
        ingredients: &str,
        limit: u32,
    ) -> Result<Vec<SearchHit>, RecipeSourceError> {
        let api_key = self.api_key()?;
        let query = [
            ("ingredients", ingredients.to_string()),
            ("number", limit.to_string()),
            ("apiKey", api_key),
        ];

        let body = self.http.get_json(&self.search_url(), &query).await?;
        Ok(parse_hits(body))
    }

    async fn recipe_information(&self, id: i64) -> Result<RecipeInformation, RecipeSourceError> {
        let api_key = self.api_key()?;
        let body = self
            .http
            .get_json(&self.information_url(id), &[("apiKey", api_key)])
            .await?;

        serde_json::from_value(body).map_err(|e| RecipeSourceError::ParseError(e.to_string()))
    }
}
