use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Upstream returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Invalid response body: {0}")]
    InvalidBody(String),

    #[error("Not configured: {0}")]
    NotConfigured(String),
}

/// Failure modes of [`crate::RecipeFinder::find_recipes`].
///
/// Per-candidate enrichment failures never show up here; they are logged and
/// replaced with placeholder values.
#[derive(Error, Debug)]
pub enum FindError {
    #[error("Missing ingredients")]
    InvalidRequest,

    #[error("Recipe search failed: {0}")]
    Upstream(#[source] crate::recipes::RecipeSourceError),
}
