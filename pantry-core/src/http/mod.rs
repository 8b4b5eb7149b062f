//! Outbound JSON-over-HTTP plumbing.
//!
//! Upstream API clients talk to the network through the [`HttpClient`] trait so
//! tests can swap in [`MockClient`] and never touch the network.

mod client;

pub use client::{
    HttpClient, MockClient, MockResponse, RecordedRequest, ReqwestClient, ReqwestClientBuilder,
};

/// Strip the query string from a URL, leaving scheme, host and path.
///
/// Used for log lines and mock lookups so API keys passed as query
/// parameters never end up in either.
pub fn redact_query(url: &str) -> String {
    match url::Url::parse(url) {
        Ok(mut parsed) => {
            parsed.set_query(None);
            parsed.to_string()
        }
        Err(_) => url.split('?').next().unwrap_or(url).to_string(),
    }
}
