//! HTTP client trait and implementations.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::FetchError;

use super::redact_query;

/// Trait for HTTP clients, enabling mockability in tests.
///
/// Query parameters are passed separately from the URL so implementations
/// can encode them consistently.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// GET a URL and decode the body as JSON.
    async fn get_json(&self, url: &str, query: &[(&str, String)]) -> Result<Value, FetchError>;

    /// POST a JSON body and decode the response as JSON.
    async fn post_json(
        &self,
        url: &str,
        query: &[(&str, String)],
        body: &Value,
    ) -> Result<Value, FetchError>;
}

/// Configuration for ReqwestClient.
#[derive(Clone)]
pub struct ReqwestClientBuilder {
    timeout: Option<Duration>,
    user_agent: String,
}

impl Default for ReqwestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReqwestClientBuilder {
    /// Create a new builder with default settings.
    ///
    /// No timeout is applied unless one is set explicitly; requests are bounded
    /// only by reqwest's own defaults.
    pub fn new() -> Self {
        Self {
            timeout: None,
            user_agent: "Mozilla/5.0 (compatible; Pantry/0.1)".to_string(),
        }
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent string.
    pub fn user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }

    /// Build the ReqwestClient.
    pub fn build(self) -> Result<ReqwestClient, reqwest::Error> {
        let mut builder = reqwest::Client::builder().user_agent(&self.user_agent);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(ReqwestClient {
            inner: Arc::new(builder.build()?),
        })
    }
}

/// Production HTTP client backed by a shared reqwest connection pool.
#[derive(Clone)]
pub struct ReqwestClient {
    inner: Arc<reqwest::Client>,
}

impl ReqwestClient {
    /// Create a new ReqwestClient with default configuration.
    pub fn new() -> Result<Self, reqwest::Error> {
        ReqwestClientBuilder::new().build()
    }

    /// Get a builder for custom configuration.
    pub fn builder() -> ReqwestClientBuilder {
        ReqwestClientBuilder::new()
    }

    async fn decode(url: &str, response: reqwest::Response) -> Result<Value, FetchError> {
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(url = %redact_query(url), status = %status, "network: request failed");
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: redact_query(url),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| FetchError::InvalidBody(e.to_string()))
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get_json(&self, url: &str, query: &[(&str, String)]) -> Result<Value, FetchError> {
        let parsed = reqwest::Url::parse(url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;

        tracing::debug!(url = %redact_query(url), "network: GET");
        let response = self.inner.get(parsed).query(query).send().await?;
        Self::decode(url, response).await
    }

    async fn post_json(
        &self,
        url: &str,
        query: &[(&str, String)],
        body: &Value,
    ) -> Result<Value, FetchError> {
        let parsed = reqwest::Url::parse(url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;

        tracing::debug!(url = %redact_query(url), "network: POST");
        let response = self
            .inner
            .post(parsed)
            .query(query)
            .json(body)
            .send()
            .await?;
        Self::decode(url, response).await
    }
}

/// Mock response for testing.
#[derive(Clone)]
pub enum MockResponse {
    Json(Value),
    Status(u16),
    Error(String),
}

/// A request seen by [`MockClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl RecordedRequest {
    /// Look up a query parameter by name.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Mock HTTP client for testing.
///
/// Responses are keyed by URL without its query string. Every request is
/// recorded so tests can assert on what was (or wasn't) sent.
#[derive(Default)]
pub struct MockClient {
    responses: HashMap<String, MockResponse>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockClient {
    /// Create a new empty mock client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a response for a URL.
    pub fn with_response(mut self, url: &str, response: MockResponse) -> Self {
        self.responses.insert(redact_query(url), response);
        self
    }

    /// Add a JSON response for a URL.
    pub fn with_json(self, url: &str, json: Value) -> Self {
        self.with_response(url, MockResponse::Json(json))
    }

    /// Add a non-success status for a URL.
    pub fn with_status(self, url: &str, status: u16) -> Self {
        self.with_response(url, MockResponse::Status(status))
    }

    /// Add a transport error for a URL.
    pub fn with_error(self, url: &str, error: &str) -> Self {
        self.with_response(url, MockResponse::Error(error.to_string()))
    }

    /// All requests made so far, in order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    fn respond(
        &self,
        method: &'static str,
        url: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<Value, FetchError> {
        let key = redact_query(url);
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(RecordedRequest {
                method,
                url: key.clone(),
                query: query
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.clone()))
                    .collect(),
                body: body.cloned(),
            });
        }

        match self.responses.get(&key) {
            Some(MockResponse::Json(json)) => Ok(json.clone()),
            Some(MockResponse::Status(status)) => Err(FetchError::Status {
                status: *status,
                url: key,
            }),
            Some(MockResponse::Error(e)) => Err(FetchError::InvalidBody(e.clone())),
            None => Err(FetchError::InvalidUrl(format!(
                "No mock response for URL: {}",
                key
            ))),
        }
    }
}

#[async_trait]
impl HttpClient for MockClient {
    async fn get_json(&self, url: &str, query: &[(&str, String)]) -> Result<Value, FetchError> {
        self.respond("GET", url, query, None)
    }

    async fn post_json(
        &self,
        url: &str,
        query: &[(&str, String)],
        body: &Value,
    ) -> Result<Value, FetchError> {
        self.respond("POST", url, query, Some(body))
    }
}
