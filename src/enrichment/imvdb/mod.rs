//! IMVDb API integration
//!
//! The Internet Music Video Database is searched by free text
//! (`artist + " " + title`); the best result is picked by [`selection`].
//!
//! API docs: https://imvdb.com/developers/api

mod adapter;
mod client;
pub mod dto;
pub mod selection;

pub use adapter::{to_candidates, to_video_track};
pub use client::ImvdbClient;
pub use selection::{DEFAULT_TITLE_THRESHOLD, MatchKind, Selection};

use crate::enrichment::domain::{LookupOutcome, VideoTrack};
use crate::enrichment::traits::VideoDatabaseApi;

/// Search IMVDb for `artist title` and keep the best confident candidate.
pub async fn resolve<A>(
    api: &A,
    artist: &str,
    title: &str,
    title_threshold: f64,
) -> LookupOutcome<VideoTrack>
where
    A: VideoDatabaseApi + ?Sized,
{
    let query = format!("{} {}", artist, title);

    let candidates = match api.search_videos(&query).await {
        Ok(candidates) => candidates,
        Err(e) => {
            tracing::warn!("IMVDb search failed for {:?}: {}", query, e);
            return LookupOutcome::ProviderError(e);
        }
    };

    let selection = selection::select(&candidates, artist, title, title_threshold);
    tracing::debug!(?selection, results = candidates.len(), "IMVDb selection");

    match selection {
        Selection::Rejected { similarity, .. } => {
            tracing::info!(
                "IMVDb: best title match for {:?} only {:.2}% similar, rejecting",
                query,
                similarity
            );
            LookupOutcome::NotFound
        }
        other => match other.accepted() {
            Some(index) => LookupOutcome::Found(to_video_track(&candidates[index], title)),
            None => LookupOutcome::NotFound,
        },
    }
}
