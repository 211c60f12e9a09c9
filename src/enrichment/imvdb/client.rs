//! IMVDb HTTP client
//!
//! Handles communication with the IMVDb search API.
//! See: https://imvdb.com/developers/api
//!
//! Every request must carry the application key in the `X-Imvdb-App-Key`
//! header. Requests without a valid key are answered with 401/403.

use super::{adapter, dto};
use crate::enrichment::domain::{EnrichmentError, VideoCandidate};

const DEFAULT_BASE_URL: &str = "https://imvdb.com/api/v1";
const APP_KEY_HEADER: &str = "X-Imvdb-App-Key";

/// IMVDb API client
pub struct ImvdbClient {
    api_key: String,
    http_client: reqwest::Client,
    base_url: String,
}

impl ImvdbClient {
    /// Create a new client with the given application key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom base URL (mirrors, local test servers)
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            api_key: api_key.into(),
            http_client,
            base_url: base_url.into(),
        }
    }

    /// Search videos by free text, returning candidates in provider order
    pub async fn search(&self, query: &str) -> Result<Vec<VideoCandidate>, EnrichmentError> {
        if self.api_key.is_empty() {
            return Err(EnrichmentError::MissingApiKey("IMVDb"));
        }

        let response = self.send_search_request(query).await?;
        Ok(adapter::to_candidates(response))
    }

    fn search_url(&self, query: &str) -> String {
        format!(
            "{}/search/videos?q={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(query)
        )
    }

    /// Send the HTTP request and parse the response
    async fn send_search_request(&self, query: &str) -> Result<dto::SearchResponse, EnrichmentError> {
        let url = self.search_url(query);
        tracing::debug!(%url, "IMVDb search");

        let response = self
            .http_client
            .get(&url)
            .header(APP_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| EnrichmentError::Network(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(EnrichmentError::RateLimited);
        }

        if !status.is_success() {
            // Try to parse error response
            if let Ok(error) = response.json::<dto::ApiError>().await
                && let Some(message) = error.message.or(error.error)
            {
                return Err(EnrichmentError::ApiError(message));
            }
            return Err(EnrichmentError::Http {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        response
            .json::<dto::SearchResponse>()
            .await
            .map_err(|e| EnrichmentError::Parse(e.to_string()))
    }
}
