//! Google Gemini LLM provider.

use super::{LlmError, LlmProvider};
use crate::error::FetchError;
use crate::http::HttpClient;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Gemini `generateContent` provider.
pub struct GeminiProvider {
    http: Arc<dyn HttpClient>,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl GeminiProvider {
    /// Create a new GeminiProvider for the given model.
    pub fn new(
        http: Arc<dyn HttpClient>,
        base_url: &str,
        model: String,
        api_key: Option<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            api_key,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

/// Gemini API request format.
#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

/// Gemini API response format.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl From<FetchError> for LlmError {
    fn from(e: FetchError) -> Self {
        match e {
            FetchError::Status { status: 429, .. } => LlmError::RateLimited,
            FetchError::Status { status, url } => LlmError::ApiError {
                status,
                message: format!("request to {} failed", url),
            },
            FetchError::InvalidBody(message) => LlmError::ParseError(message),
            FetchError::NotConfigured(message) => LlmError::NotConfigured(message),
            other => LlmError::RequestFailed(other.to_string()),
        }
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let api_key = self
            .api_key
            .clone()
            .ok_or_else(|| LlmError::NotConfigured("GEMINI_KEY not set".to_string()))?;

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        };
        let body =
            serde_json::to_value(&request).map_err(|e| LlmError::RequestFailed(e.to_string()))?;

        let response = self
            .http
            .post_json(&self.endpoint(), &[("key", api_key)], &body)
            .await?;

        let response: GenerateResponse =
            serde_json::from_value(response).map_err(|e| LlmError::ParseError(e.to_string()))?;

        // First part of the first candidate, as the API documents for single-turn prompts
        let text = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .ok_or_else(|| LlmError::ParseError("No text content in response".to_string()))?;

        Ok(text)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
