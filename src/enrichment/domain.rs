//! Internal domain models for music-video identification.
//!
//! These types are OUR types - they don't change when external APIs change.
//! All external API responses get converted into these types via adapters.

use std::fmt;
use std::path::{Path, PathBuf};

/// Placeholder plot text used when no provider supplies a description.
pub const UNIDENTIFIED_PLOT: &str = "This Music Video could not be identified.";

/// Literal separator between artist and title in a video filename.
pub const NAME_SEPARATOR: &str = " - ";

/// Outcome of a single provider lookup.
///
/// Keeps "nothing matched" apart from "the provider could not be asked",
/// even though both degrade to "no result" for the file being processed.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome<T> {
    Found(T),
    NotFound,
    ProviderError(EnrichmentError),
}

impl<T> LookupOutcome<T> {
    /// The found value, if any.
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            _ => None,
        }
    }
}

/// Artist and title parsed from an `"Artist - Title.ext"` filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFileName {
    pub artist: String,
    pub title: String,
}

impl ParsedFileName {
    /// Split a file stem on the first `" - "`.
    ///
    /// Both halves are trimmed; everything after the first separator belongs
    /// to the title, so `"A - B - C"` parses as artist `A`, title `B - C`.
    pub fn parse(stem: &str) -> Result<Self, IdentifyError> {
        let invalid = || IdentifyError::InvalidName(stem.to_string());

        let (artist, title) = stem.split_once(NAME_SEPARATOR).ok_or_else(invalid)?;
        let (artist, title) = (artist.trim(), title.trim());

        if artist.is_empty() || title.is_empty() {
            return Err(invalid());
        }

        Ok(Self {
            artist: artist.to_string(),
            title: title.to_string(),
        })
    }
}

/// A video file on disk, with everything the engine derives from its path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoFile {
    pub path: PathBuf,
    pub name: ParsedFileName,
    /// Name of the directory that directly contains the file
    pub folder_artist: String,
}

impl VideoFile {
    pub fn from_path(path: &Path) -> Result<Self, IdentifyError> {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name = ParsedFileName::parse(&stem)?;

        let folder_artist = path
            .parent()
            .and_then(Path::file_name)
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self {
            path: path.to_path_buf(),
            name,
            folder_artist,
        })
    }

    /// Path of the sidecar NFO next to the video.
    pub fn nfo_path(&self) -> PathBuf {
        self.path.with_extension("nfo")
    }

    /// File name for reports and console output.
    pub fn display_name(&self) -> String {
        display_name(&self.path)
    }
}

/// File name component of a path, lossily converted.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// A value that providers send either as a JSON number or a string (ids, years).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scalar {
    Number(i64),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Artist credit on a video database result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoArtist {
    pub name: String,
    pub slug: Option<String>,
}

/// One raw search result from the video database, before selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoCandidate {
    pub id: Option<Scalar>,
    pub song_title: Option<String>,
    pub year: Option<Scalar>,
    pub artists: Vec<VideoArtist>,
}

/// Video metadata resolved from the video database (IMVDb)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoTrack {
    pub id: Option<Scalar>,
    pub title: String,
    pub year: Option<Scalar>,
    pub artists: Vec<VideoArtist>,
    pub description: String,
}

impl VideoTrack {
    /// First credited artist, if it has a name.
    pub fn primary_artist(&self) -> Option<&str> {
        self.artists
            .first()
            .map(|a| a.name.as_str())
            .filter(|name| !name.is_empty())
    }
}

/// Track metadata from the track database (TheAudioDB), taken verbatim
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudioTrack {
    pub track: Option<String>,
    pub album: Option<String>,
    pub genre: Option<String>,
    pub style: Option<String>,
    pub description_en: Option<String>,
    pub year_released: Option<String>,
    pub artist: Option<String>,
    pub director: Option<String>,
    pub studio: Option<String>,
}

/// Errors that can occur while talking to a metadata provider
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EnrichmentError {
    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {reason}")]
    Http { status: u16, reason: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Rate limited - try again later")]
    RateLimited,

    #[error("Missing API key for {0}")]
    MissingApiKey(&'static str),
}

/// Why a single file could not be turned into an NFO
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IdentifyError {
    #[error("Invalid name (expected \"Artist - Title\"): {0}")]
    InvalidName(String),

    #[error("No provider returned a confident match")]
    NotFound,

    #[error(
        "Artist mismatch: folder \"{folder}\" vs resolved \"{resolved}\" ({similarity:.2}% similar)"
    )]
    ArtistMismatch {
        folder: String,
        resolved: String,
        similarity: f64,
    },

    #[error("Failed to write NFO: {0}")]
    Write(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_file_name() {
        let parsed = ParsedFileName::parse("Daft Punk - One More Time").unwrap();
        assert_eq!(parsed.artist, "Daft Punk");
        assert_eq!(parsed.title, "One More Time");
    }

    #[test]
    fn test_parse_keeps_extra_separators_in_title() {
        let parsed = ParsedFileName::parse("Artist - Song - Live").unwrap();
        assert_eq!(parsed.artist, "Artist");
        assert_eq!(parsed.title, "Song - Live");
    }

    #[test]
    fn test_parse_rejects_missing_separator() {
        assert!(matches!(
            ParsedFileName::parse("Daft Punk One More Time"),
            Err(IdentifyError::InvalidName(_))
        ));
        // Hyphen without surrounding spaces is not a separator
        assert!(ParsedFileName::parse("Daft-Punk-One").is_err());
    }

    #[test]
    fn test_parse_rejects_empty_halves() {
        assert!(ParsedFileName::parse(" - Title").is_err());
        assert!(ParsedFileName::parse("Artist -  ").is_err());
    }

    #[test]
    fn test_video_file_from_path() {
        let file =
            VideoFile::from_path(Path::new("/videos/Daft Punk/Daft Punk - One More Time.mp4"))
                .unwrap();
        assert_eq!(file.folder_artist, "Daft Punk");
        assert_eq!(file.name.title, "One More Time");
        assert_eq!(
            file.nfo_path(),
            PathBuf::from("/videos/Daft Punk/Daft Punk - One More Time.nfo")
        );
        assert_eq!(file.display_name(), "Daft Punk - One More Time.mp4");
    }

    #[test]
    fn test_scalar_display() {
        assert_eq!(Scalar::Number(1999).to_string(), "1999");
        assert_eq!(Scalar::Text("abc".to_string()).to_string(), "abc");
    }

    #[test]
    fn test_primary_artist_skips_empty_name() {
        let track = VideoTrack {
            id: None,
            title: "Song".to_string(),
            year: None,
            artists: vec![VideoArtist {
                name: String::new(),
                slug: None,
            }],
            description: UNIDENTIFIED_PLOT.to_string(),
        };
        assert_eq!(track.primary_artist(), None);
    }
}
