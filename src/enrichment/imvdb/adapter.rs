//! Adapter layer: Convert IMVDb DTOs to domain models
//!
//! This is the ONLY place where DTO types are converted to domain types.
//! This isolates API changes - if IMVDb changes their response format,
//! only this file and dto.rs need to change.

use super::dto;
use crate::enrichment::domain::{
    Scalar, UNIDENTIFIED_PLOT, VideoArtist, VideoCandidate, VideoTrack,
};

/// Convert a search response to candidates, preserving provider order
pub fn to_candidates(response: dto::SearchResponse) -> Vec<VideoCandidate> {
    response.results.into_iter().map(to_candidate).collect()
}

fn to_candidate(result: dto::SearchResult) -> VideoCandidate {
    VideoCandidate {
        id: result.id.and_then(to_scalar),
        song_title: result.song_title,
        year: result.year.and_then(to_scalar),
        artists: result
            .artists
            .into_iter()
            .map(|a| VideoArtist {
                name: a.name.unwrap_or_default(),
                slug: a.slug,
            })
            .collect(),
    }
}

/// Zero and empty strings mean "unknown" in IMVDb payloads
fn to_scalar(value: dto::NumberOrString) -> Option<Scalar> {
    match value {
        dto::NumberOrString::Number(0) => None,
        dto::NumberOrString::Number(n) => Some(Scalar::Number(n)),
        dto::NumberOrString::Text(s) if s.trim().is_empty() => None,
        dto::NumberOrString::Text(s) => Some(Scalar::Text(s)),
    }
}

/// Build the resolved track from the chosen candidate.
///
/// IMVDb search results carry no plot text, so the description is always
/// the fixed placeholder.
pub fn to_video_track(candidate: &VideoCandidate, query_title: &str) -> VideoTrack {
    let title = candidate
        .song_title
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or(query_title)
        .to_string();

    VideoTrack {
        id: candidate.id.clone(),
        title,
        year: candidate.year.clone(),
        artists: candidate.artists.clone(),
        description: UNIDENTIFIED_PLOT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_result(song_title: Option<&str>, year: Option<dto::NumberOrString>) -> dto::SearchResult {
        dto::SearchResult {
            id: Some(dto::NumberOrString::Number(42)),
            song_title: song_title.map(String::from),
            year,
            artists: vec![dto::Artist {
                name: Some("Daft Punk".to_string()),
                slug: Some("daft-punk".to_string()),
            }],
        }
    }

    #[test]
    fn test_convert_preserves_order() {
        let response = dto::SearchResponse {
            total_results: Some(2),
            results: vec![make_result(Some("First"), None), make_result(Some("Second"), None)],
        };

        let candidates = to_candidates(response);

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].song_title.as_deref(), Some("First"));
        assert_eq!(candidates[1].song_title.as_deref(), Some("Second"));
        assert_eq!(candidates[0].artists[0].name, "Daft Punk");
        assert_eq!(candidates[0].id, Some(Scalar::Number(42)));
    }

    #[test]
    fn test_zero_year_is_unknown() {
        let candidate = to_candidate(make_result(Some("Song"), Some(dto::NumberOrString::Number(0))));
        assert!(candidate.year.is_none());

        let candidate = to_candidate(make_result(
            Some("Song"),
            Some(dto::NumberOrString::Text("2001".to_string())),
        ));
        assert_eq!(candidate.year, Some(Scalar::Text("2001".to_string())));
    }

    #[test]
    fn test_video_track_title_falls_back_to_query() {
        let candidate = to_candidate(make_result(None, None));
        let track = to_video_track(&candidate, "One More Time");
        assert_eq!(track.title, "One More Time");
        assert_eq!(track.description, UNIDENTIFIED_PLOT);

        let candidate = to_candidate(make_result(Some("One More Time (Radio Edit)"), None));
        let track = to_video_track(&candidate, "One More Time");
        assert_eq!(track.title, "One More Time (Radio Edit)");
    }
}
