//! TheAudioDB HTTP client
//!
//! The API key is part of the URL path, not a header. Key `2` is the public
//! test key and is rate limited; premium keys lift that limit.
//! See: https://www.theaudiodb.com/free_music_api
//!
//! An empty search answers `{"track": null}` with HTTP 200, so "no match" is
//! only visible after parsing.

use super::{adapter, dto};
use crate::enrichment::domain::{AudioTrack, EnrichmentError};

const DEFAULT_BASE_URL: &str = "https://theaudiodb.com/api/v1/json";

/// Public test key
pub const DEFAULT_API_KEY: &str = "2";

/// TheAudioDB API client
pub struct AudioDbClient {
    api_key: String,
    http_client: reqwest::Client,
    base_url: String,
}

impl AudioDbClient {
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

        let api_key = api_key.into();
        Self {
            api_key: if api_key.is_empty() {
                DEFAULT_API_KEY.to_string()
            } else {
                api_key
            },
            http_client,
            base_url: base_url.into(),
        }
    }

    /// Search by artist and track title; returns the first hit, if any
    pub async fn search_track(
        &self,
        artist: &str,
        title: &str,
    ) -> Result<Option<AudioTrack>, EnrichmentError> {
        let response = self.send_search_request(artist, title).await?;
        Ok(adapter::first_track(response))
    }

    fn search_url(&self, artist: &str, title: &str) -> String {
        format!(
            "{}/{}/searchtrack.php?s={}&t={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(&self.api_key),
            urlencoding::encode(artist),
            urlencoding::encode(title)
        )
    }

    async fn send_search_request(
        &self,
        artist: &str,
        title: &str,
    ) -> Result<dto::SearchTrackResponse, EnrichmentError> {
        let url = self.search_url(artist, title);
        tracing::debug!(%url, "TheAudioDB search");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| EnrichmentError::Network(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(EnrichmentError::RateLimited);
        }

        if !status.is_success() {
            return Err(EnrichmentError::Http {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        // The API sometimes answers an empty body instead of {"track": null}
        let body = response
            .text()
            .await
            .map_err(|e| EnrichmentError::Network(e.to_string()))?;
        if body.trim().is_empty() {
            return Ok(dto::SearchTrackResponse::default());
        }

        serde_json::from_str(&body).map_err(|e| EnrichmentError::Parse(e.to_string()))
    }
}

impl Default for AudioDbClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = AudioDbClient::default();
        assert_eq!(client.api_key, "2");
        assert_eq!(client.base_url, "https://theaudiodb.com/api/v1/json");
    }

    #[test]
    fn test_empty_key_uses_public_key() {
        let client = AudioDbClient::new("");
        assert_eq!(client.api_key, DEFAULT_API_KEY);
    }

    #[test]
    fn test_search_url() {
        let client = AudioDbClient::with_base_url("2", "http://localhost:8080");
        assert_eq!(
            client.search_url("Daft Punk", "One More Time"),
            "http://localhost:8080/2/searchtrack.php?s=Daft%20Punk&t=One%20More%20Time"
        );
    }
}
