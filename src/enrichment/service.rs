//! Identification service - orchestrates both provider lookups for one video
//!
//! This is the high-level API for identifying a music video:
//! 1. Search IMVDb for `artist title` and pick the best candidate
//! 2. Look up the track on TheAudioDB, using IMVDb's artist when it has one
//! 3. Check the resolved artist against the folder the file lives in
//! 4. Merge both results into a [`MetadataRecord`]

use crate::enrichment::{
    audiodb::{self, AudioDbClient},
    domain::{IdentifyError, VideoFile},
    imvdb::{self, DEFAULT_TITLE_THRESHOLD, ImvdbClient},
    reconcile::{self, DEFAULT_ARTIST_THRESHOLD},
    traits::{TrackDatabaseApi, VideoDatabaseApi},
};
use crate::model::MetadataRecord;

/// Configuration for the identification service
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifyConfig {
    /// IMVDb API key (get one at https://imvdb.com/developers)
    pub imvdb_api_key: String,
    /// TheAudioDB API key (empty uses the public test key)
    pub audiodb_api_key: String,
    /// Minimum title similarity for a fuzzy IMVDb match (0 to 100)
    pub title_threshold: f64,
    /// Minimum folder/artist similarity to accept a result (0 to 100)
    pub artist_threshold: f64,
}

impl Default for IdentifyConfig {
    fn default() -> Self {
        Self {
            imvdb_api_key: String::new(),
            audiodb_api_key: audiodb::DEFAULT_API_KEY.to_string(),
            title_threshold: DEFAULT_TITLE_THRESHOLD,
            artist_threshold: DEFAULT_ARTIST_THRESHOLD,
        }
    }
}

/// A confidently identified video
#[derive(Debug, Clone, PartialEq)]
pub struct Identification {
    pub record: MetadataRecord,
    /// Folder/artist similarity that let the result through
    pub artist_similarity: f64,
    pub video_found: bool,
    pub audio_found: bool,
}

/// Service for identifying music videos against both providers
pub struct IdentificationService<V, T> {
    config: IdentifyConfig,
    video_db: V,
    track_db: T,
}

impl IdentificationService<ImvdbClient, AudioDbClient> {
    /// Create a service talking to the real IMVDb and TheAudioDB APIs
    pub fn new(config: IdentifyConfig) -> Self {
        Self {
            video_db: ImvdbClient::new(config.imvdb_api_key.clone()),
            track_db: AudioDbClient::new(config.audiodb_api_key.clone()),
            config,
        }
    }
}

impl<V, T> IdentificationService<V, T>
where
    V: VideoDatabaseApi,
    T: TrackDatabaseApi,
{
    /// Create a service over arbitrary provider clients
    pub fn with_clients(config: IdentifyConfig, video_db: V, track_db: T) -> Self {
        Self {
            config,
            video_db,
            track_db,
        }
    }

    #[cfg(test)]
    pub fn video_db(&self) -> &V {
        &self.video_db
    }

    #[cfg(test)]
    pub fn track_db(&self) -> &T {
        &self.track_db
    }

    /// Identify a video and build its metadata record.
    ///
    /// Provider errors degrade to "no result" for that provider. The file is
    /// rejected when neither provider matched or when the resolved artist is
    /// too far from the folder name.
    pub async fn identify(&self, file: &VideoFile) -> Result<Identification, IdentifyError> {
        let name = &file.name;

        let video = imvdb::resolve(
            &self.video_db,
            &name.artist,
            &name.title,
            self.config.title_threshold,
        )
        .await
        .found();

        let artist = reconcile::working_artist(file, video.as_ref());
        let audio = audiodb::resolve(&self.track_db, artist, &name.title)
            .await
            .found();

        tracing::debug!(
            file = %file.display_name(),
            video = video.is_some(),
            audio = audio.is_some(),
            "Provider lookups finished"
        );

        let verdict = reconcile::reconcile(
            file,
            video.as_ref(),
            audio.as_ref(),
            self.config.artist_threshold,
        );

        let (_, similarity) = verdict.into_result().inspect_err(|e| {
            tracing::warn!("Rejected {}: {}", file.display_name(), e);
        })?;

        let record = MetadataRecord::merge(video.as_ref(), audio.as_ref());
        tracing::info!(
            "Identified {} as {} - {}",
            file.display_name(),
            record.artist,
            record.title
        );

        Ok(Identification {
            record,
            artist_similarity: similarity,
            video_found: video.is_some(),
            audio_found: audio.is_some(),
        })
    }
}
