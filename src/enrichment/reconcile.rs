//! Cross-provider confidence gate.
//!
//! Each provider's fuzzy title matching can anchor on the wrong artist of the
//! same name. The folder a video is stored in is the ground truth for the
//! final decision: a file under `Artist X/` must resolve to Artist X.

use super::domain::{AudioTrack, IdentifyError, VideoFile, VideoTrack};
use crate::matching::artist_similarity;

/// Default minimum folder/artist similarity for acceptance
pub const DEFAULT_ARTIST_THRESHOLD: f64 = 80.0;

/// Outcome of reconciling both provider results against the file
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// Safe to build a record
    Accepted { artist: String, similarity: f64 },
    /// Neither provider produced anything
    NoMatch,
    /// Something was found, but for a different artist than the folder's
    ArtistMismatch {
        folder: String,
        resolved: String,
        similarity: f64,
    },
}

impl Verdict {
    /// Convert a rejection into the per-file error it is reported as.
    pub fn into_result(self) -> Result<(String, f64), IdentifyError> {
        match self {
            Self::Accepted { artist, similarity } => Ok((artist, similarity)),
            Self::NoMatch => Err(IdentifyError::NotFound),
            Self::ArtistMismatch {
                folder,
                resolved,
                similarity,
            } => Err(IdentifyError::ArtistMismatch {
                folder,
                resolved,
                similarity,
            }),
        }
    }
}

/// Artist name used for the second lookup and the gate.
///
/// The video database's first credited artist wins over the filename.
pub fn working_artist<'a>(file: &'a VideoFile, video: Option<&'a VideoTrack>) -> &'a str {
    video
        .and_then(VideoTrack::primary_artist)
        .unwrap_or(file.name.artist.as_str())
}

/// Decide whether the resolved metadata may be persisted.
pub fn reconcile(
    file: &VideoFile,
    video: Option<&VideoTrack>,
    audio: Option<&AudioTrack>,
    artist_threshold: f64,
) -> Verdict {
    if video.is_none() && audio.is_none() {
        return Verdict::NoMatch;
    }

    let artist = working_artist(file, video);
    let similarity = artist_similarity(&file.folder_artist, artist);

    if similarity < artist_threshold {
        return Verdict::ArtistMismatch {
            folder: file.folder_artist.clone(),
            resolved: artist.to_string(),
            similarity,
        };
    }

    Verdict::Accepted {
        artist: artist.to_string(),
        similarity,
    }
}
