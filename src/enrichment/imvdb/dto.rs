//! IMVDb API Data Transfer Objects
//!
//! These types match what the IMVDb search endpoint returns.
//! DO NOT use these types outside the imvdb module - convert to domain types.
//!
//! API Reference: https://imvdb.com/developers/api/searching
//!
//! Example response (trimmed):
//! ```json
//! {
//!   "total_results": 1,
//!   "results": [{
//!     "id": 121779770452,
//!     "song_title": "One More Time",
//!     "year": 2000,
//!     "artists": [{"name": "Daft Punk", "slug": "daft-punk"}]
//!   }]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Top-level search response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResponse {
    pub total_results: Option<u64>,
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

/// A single video search result (one candidate)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResult {
    /// IMVDb video id (numeric in practice, string tolerated)
    pub id: Option<NumberOrString>,
    pub song_title: Option<String>,
    /// Release year; null for unreleased videos
    pub year: Option<NumberOrString>,
    /// Credited artists; may be null
    #[serde(default, deserialize_with = "null_as_empty")]
    pub artists: Vec<Artist>,
}

/// Artist credit on a search result
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Artist {
    pub name: Option<String>,
    pub slug: Option<String>,
}

/// JSON value that may be encoded either as a number or a string
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum NumberOrString {
    Number(i64),
    Text(String),
}

/// Error body returned by IMVDb on failures
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    pub error: Option<String>,
    pub message: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Artist>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<Artist>>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================

#[cfg(test)]
mod contract_tests {
    use super::*;

    #[test]
    fn test_parse_search_response() {
        let json = r#"{
            "total_results": 2,
            "current_page": 1,
            "per_page": 25,
            "total_pages": 1,
            "results": [{
                "id": 121779770452,
                "production_status": "r",
                "song_title": "One More Time",
                "song_slug": "one-more-time",
                "url": "https://imvdb.com/video/daft-punk/one-more-time",
                "multiple_versions": false,
                "version_name": null,
                "version_number": 1,
                "is_imvdb_pick": false,
                "year": 2000,
                "artists": [{
                    "name": "Daft Punk",
                    "slug": "daft-punk",
                    "url": "https://imvdb.com/n/daft-punk"
                }]
            }, {
                "id": "abc",
                "song_title": "Around the World",
                "year": "1997",
                "artists": null
            }]
        }"#;

        let response: SearchResponse =
            serde_json::from_str(json).expect("Should parse search response");

        assert_eq!(response.total_results, Some(2));
        assert_eq!(response.results.len(), 2);

        let first = &response.results[0];
        assert_eq!(first.id, Some(NumberOrString::Number(121779770452)));
        assert_eq!(first.song_title.as_deref(), Some("One More Time"));
        assert_eq!(first.year, Some(NumberOrString::Number(2000)));
        assert_eq!(first.artists[0].name.as_deref(), Some("Daft Punk"));
        assert_eq!(first.artists[0].slug.as_deref(), Some("daft-punk"));

        let second = &response.results[1];
        assert_eq!(second.id, Some(NumberOrString::Text("abc".to_string())));
        assert_eq!(second.year, Some(NumberOrString::Text("1997".to_string())));
        assert!(second.artists.is_empty());
    }

    #[test]
    fn test_parse_empty_results() {
        let response: SearchResponse =
            serde_json::from_str(r#"{"total_results": 0, "results": []}"#).unwrap();
        assert!(response.results.is_empty());

        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.results.is_empty());
    }

    #[test]
    fn test_parse_null_year() {
        let json = r#"{"results": [{"id": 1, "song_title": "Demo", "year": null}]}"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert!(response.results[0].year.is_none());
    }

    #[test]
    fn test_parse_error_response() {
        let json = r#"{"error": "Unauthorized", "message": "Invalid app key"}"#;
        let error: ApiError = serde_json::from_str(json).expect("Should parse error");
        assert_eq!(error.error.as_deref(), Some("Unauthorized"));
    }
}
