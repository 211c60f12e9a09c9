//! Trait definitions for external API clients.
//!
//! These traits enable dependency injection and mocking for tests.
//! Production code uses the real client implementations, while tests
//! can substitute mock implementations.
//!
//! # Example
//!
//! ```ignore
//! use mvnfo::enrichment::traits::VideoDatabaseApi;
//!
//! // In production code:
//! async fn process<T: VideoDatabaseApi>(client: &T) {
//!     let candidates = client.search_videos("Daft Punk One More Time").await?;
//! }
//!
//! // In tests:
//! struct MockVideoDatabase { ... }
//! impl VideoDatabaseApi for MockVideoDatabase { ... }
//! ```

use async_trait::async_trait;

use super::domain::{AudioTrack, EnrichmentError, VideoCandidate};

/// Trait for free-text music video search (IMVDb).
///
/// Implement this trait to create mock implementations for testing.
#[async_trait]
pub trait VideoDatabaseApi: Send + Sync {
    /// Search videos and return the raw candidates in provider order.
    async fn search_videos(&self, query: &str) -> Result<Vec<VideoCandidate>, EnrichmentError>;
}

/// Trait for artist + title track lookup (TheAudioDB).
///
/// Implement this trait to create mock implementations for testing.
#[async_trait]
pub trait TrackDatabaseApi: Send + Sync {
    /// Look up a track and return the provider's first hit.
    async fn search_track(
        &self,
        artist: &str,
        title: &str,
    ) -> Result<Option<AudioTrack>, EnrichmentError>;
}

// Implement traits for real clients

#[async_trait]
impl VideoDatabaseApi for super::imvdb::ImvdbClient {
    async fn search_videos(&self, query: &str) -> Result<Vec<VideoCandidate>, EnrichmentError> {
        self.search(query).await
    }
}

#[async_trait]
impl TrackDatabaseApi for super::audiodb::AudioDbClient {
    async fn search_track(
        &self,
        artist: &str,
        title: &str,
    ) -> Result<Option<AudioTrack>, EnrichmentError> {
        self.search_track(artist, title).await
    }
}
