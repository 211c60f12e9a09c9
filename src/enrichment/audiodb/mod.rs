//! TheAudioDB API integration
//!
//! Supplies album, genre/style, director, studio and description for a track
//! looked up by artist and title. The first result is trusted as-is.
//!
//! API docs: https://www.theaudiodb.com/free_music_api

mod adapter;
mod client;
pub mod dto;

pub use adapter::first_track;
pub use client::{AudioDbClient, DEFAULT_API_KEY};

use crate::enrichment::domain::{AudioTrack, LookupOutcome};
use crate::enrichment::traits::TrackDatabaseApi;

/// Look up a track; missing artist or title short-circuits to `NotFound`.
pub async fn resolve<A>(api: &A, artist: &str, title: &str) -> LookupOutcome<AudioTrack>
where
    A: TrackDatabaseApi + ?Sized,
{
    if artist.trim().is_empty() || title.trim().is_empty() {
        tracing::warn!("Missing artist or track name for TheAudioDB lookup");
        return LookupOutcome::NotFound;
    }

    match api.search_track(artist, title).await {
        Ok(Some(track)) => LookupOutcome::Found(track),
        Ok(None) => LookupOutcome::NotFound,
        Err(e) => {
            tracing::warn!("TheAudioDB lookup failed for {} - {}: {}", artist, title, e);
            LookupOutcome::ProviderError(e)
        }
    }
}
