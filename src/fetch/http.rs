//! HTTP suggestion backend
//!
//! Sends `GET <base_url><path>?q=...` and decodes the JSON body.

use crate::constants::api::{BASE_URL, SUGGESTIONS_PATH};
use crate::error::{Error, Result};
use crate::fetch::{SuggestionPayload, SuggestionService};
use crate::query::SuggestionRequest;
use tracing::debug;

const USER_AGENT: &str = concat!("suggest-map/", env!("CARGO_PKG_VERSION"));

/// Suggestion service reached over HTTP
#[derive(Debug, Clone)]
pub struct HttpSuggestionService {
    client: reqwest::Client,
    base_url: String,
    path: String,
}

impl HttpSuggestionService {
    /// Create a backend for `base_url` using the default endpoint path
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_path(base_url, SUGGESTIONS_PATH)
    }

    /// Create a backend with a custom endpoint path
    pub fn with_path(base_url: impl Into<String>, path: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            path: path.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a request
    pub fn url_for(&self, request: &SuggestionRequest) -> String {
        format!("{}{}", self.base_url, request.path_and_query_at(&self.path))
    }
}

impl Default for HttpSuggestionService {
    fn default() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: BASE_URL.to_string(),
            path: SUGGESTIONS_PATH.to_string(),
        }
    }
}

impl SuggestionService for HttpSuggestionService {
    async fn fetch(&self, request: &SuggestionRequest) -> Result<SuggestionPayload> {
        let url = self.url_for(request);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Fetch(format!("Suggestion request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Fetch(format!(
                "Suggestion service returned status: {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Fetch(format!("Failed to read suggestion response: {}", e)))?;

        Ok(serde_json::from_str(&body)?)
    }
}
