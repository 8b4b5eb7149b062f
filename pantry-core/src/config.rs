//! Service configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 5000;

/// Default recipe search API base URL.
pub const DEFAULT_SPOONACULAR_BASE_URL: &str = "https://api.spoonacular.com";

/// Default generative-AI API base URL.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default generative-AI model.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-pro";

/// Number of candidates requested from the search API.
pub const DEFAULT_SEARCH_LIMIT: u32 = 5;

/// Default directory holding the browser bundle.
pub const DEFAULT_STATIC_DIR: &str = "frontend";

/// Everything the service needs from its environment.
///
/// API keys are optional here on purpose: a missing key is only noticed when
/// a request actually needs it.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub spoonacular_api_key: Option<String>,
    pub spoonacular_base_url: String,
    pub gemini_api_key: Option<String>,
    pub gemini_base_url: String,
    pub gemini_model: String,
    pub search_limit: u32,
    pub static_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            spoonacular_api_key: None,
            spoonacular_base_url: DEFAULT_SPOONACULAR_BASE_URL.to_string(),
            gemini_api_key: None,
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            search_limit: DEFAULT_SEARCH_LIMIT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// - `PORT`: listen port (default: 5000)
    /// - `SPOON_KEY`: recipe search API key
    /// - `GEMINI_KEY`: generative-AI API key
    /// - `PANTRY_SPOONACULAR_BASE_URL`: search API base URL
    /// - `PANTRY_GEMINI_BASE_URL`: AI API base URL
    /// - `PANTRY_GEMINI_MODEL`: AI model (default: "gemini-2.0-pro")
    /// - `PANTRY_SEARCH_LIMIT`: candidates per search (default: 5)
    /// - `PANTRY_STATIC_DIR`: browser bundle directory (default: "frontend")
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            port: non_empty("PORT")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.port),
            spoonacular_api_key: non_empty("SPOON_KEY"),
            spoonacular_base_url: non_empty("PANTRY_SPOONACULAR_BASE_URL")
                .unwrap_or(defaults.spoonacular_base_url),
            gemini_api_key: non_empty("GEMINI_KEY"),
            gemini_base_url: non_empty("PANTRY_GEMINI_BASE_URL")
                .unwrap_or(defaults.gemini_base_url),
            gemini_model: non_empty("PANTRY_GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            search_limit: non_empty("PANTRY_SEARCH_LIMIT")
                .and_then(|v| v.trim().parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.search_limit),
            static_dir: non_empty("PANTRY_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
        }
    }
}
