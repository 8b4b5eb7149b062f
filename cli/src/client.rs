use anyhow::{Context, Result};
use pantry_core::FindRecipesResponse;

/// Thin client for the pantry HTTP API.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(server: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent("pantry-cli/0.1")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: server.trim_end_matches('/').to_string(),
        })
    }

    pub fn recipes_url(&self) -> String {
        format!("{}/api/recipes", self.base_url)
    }

    /// Call `GET /api/recipes`. Any non-2xx status or undecodable body is
    /// an error.
    pub async fn find_recipes(&self, ingredients: &str) -> Result<FindRecipesResponse> {
        let response = self
            .http
            .get(self.recipes_url())
            .query(&[("ingredients", ingredients)])
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", self.base_url))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Recipe search failed with status {}: {}", status, body);
        }

        response
            .json::<FindRecipesResponse>()
            .await
            .context("Failed to decode recipe response")
    }
}
