//! Fake LLM provider for testing.
//!
//! This provider returns deterministic responses based on prompt matching,
//! allowing tests to run without network access or API costs.

use super::{LlmError, LlmProvider};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

/// What a registered pattern produces.
#[derive(Debug, Clone)]
enum FakeReply {
    Text(String),
    Fail(String),
}

/// A fake LLM provider for testing.
///
/// Responses are matched by checking if the prompt contains a registered substring,
/// in registration order. If no match is found, returns a default response or error.
#[derive(Debug, Default)]
pub struct FakeProvider {
    /// (prompt substring, reply) pairs
    responses: RwLock<Vec<(String, FakeReply)>>,
    /// Default response if no match found
    default_response: Option<String>,
    calls: AtomicUsize,
}

impl FakeProvider {
    /// Create a new FakeProvider with no registered responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a FakeProvider that returns a specific response for prompts containing a substring.
    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        Self::new().and_response(prompt_contains, response)
    }

    /// Add a response for prompts containing a specific substring.
    pub fn and_response(self, prompt_contains: &str, response: &str) -> Self {
        self.register(prompt_contains, FakeReply::Text(response.to_string()))
    }

    /// Fail every prompt containing a specific substring.
    pub fn and_failure(self, prompt_contains: &str, message: &str) -> Self {
        self.register(prompt_contains, FakeReply::Fail(message.to_string()))
    }

    /// Set the default response when no pattern matches.
    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }

    /// Number of prompts received so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    fn register(self, prompt_contains: &str, reply: FakeReply) -> Self {
        if let Ok(mut responses) = self.responses.write() {
            responses.push((prompt_contains.to_lowercase(), reply));
        }
        self
    }
}

#[async_trait]
impl LlmProvider for FakeProvider {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::Relaxed);

        // Find first matching pattern (case-insensitive)
        let prompt_lower = prompt.to_lowercase();
        let matched = self.responses.read().ok().and_then(|responses| {
            responses
                .iter()
                .find(|(pattern, _)| prompt_lower.contains(pattern))
                .map(|(_, reply)| reply.clone())
        });

        match matched {
            Some(FakeReply::Text(response)) => Ok(response),
            Some(FakeReply::Fail(message)) => Err(LlmError::RequestFailed(message)),
            None => match &self.default_response {
                Some(response) => Ok(response.clone()),
                None => Err(LlmError::RequestFailed(format!(
                    "FakeProvider: No response configured for prompt (first 100 chars): {}",
                    prompt.chars().take(100).collect::<String>()
                ))),
            },
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fake_provider_matching() {
        let provider = FakeProvider::with_response("hello", "world");
        let result = provider.complete("Say hello to the user").await.unwrap();
        assert_eq!(result, "world");
    }

    #[tokio::test]
    async fn test_fake_provider_case_insensitive() {
        let provider = FakeProvider::with_response("HELLO", "world");
        let result = provider.complete("hello there").await.unwrap();
        assert_eq!(result, "world");
    }

    #[tokio::test]
    async fn test_fake_provider_no_match() {
        let provider = FakeProvider::new();
        let result = provider.complete("random prompt").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_fake_provider_default_response() {
        let provider = FakeProvider::new().with_default_response("default");
        let result = provider.complete("random prompt").await.unwrap();
        assert_eq!(result, "default");
    }

    #[tokio::test]
    async fn test_fake_provider_first_match_wins() {
        let provider = FakeProvider::with_response("step-by-step", "steps")
            .and_failure("autonomous", "boom");

        assert_eq!(
            provider.complete("Generate step-by-step text").await.unwrap(),
            "steps"
        );
        assert!(provider.complete("You are an autonomous cook").await.is_err());
        assert_eq!(provider.calls(), 2);
    }
}
