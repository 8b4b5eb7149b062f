//! LLM provider abstraction for instruction generation and suggestions.
//!
//! This module provides a trait-based abstraction over text-generation
//! providers so the finder can be exercised against a deterministic fake.

mod fake;
mod gemini;

pub use fake::FakeProvider;
pub use gemini::GeminiProvider;

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use crate::config::AppConfig;
use crate::http::HttpClient;

/// Error type for LLM operations.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}

/// Trait for LLM providers.
///
/// Implementations should be stateless and thread-safe. The provider is responsible
/// for making API calls and returning the model's text response.
#[async_trait]
pub trait LlmProvider: Send + Sync + fmt::Debug {
    /// Send a prompt to the LLM and get a text response.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;

    /// Get the provider name (e.g., "gemini", "fake").
    fn provider_name(&self) -> &'static str;

    /// Get the model name (e.g., "gemini-2.0-pro").
    fn model_name(&self) -> &str;
}

/// Build the production provider from configuration.
///
/// A missing API key is not an error here; the provider reports
/// [`LlmError::NotConfigured`] on first use instead.
pub fn create_provider(config: &AppConfig, http: Arc<dyn HttpClient>) -> Arc<dyn LlmProvider> {
    Arc::new(GeminiProvider::new(
        http,
        &config.gemini_base_url,
        config.gemini_model.clone(),
        config.gemini_api_key.clone(),
    ))
}
