//! The reconciled metadata record written to NFO files.
//!
//! [`MetadataRecord::merge`] is a field-by-field fallback: the video database
//! wins where it has data, the track database fills album-level fields, and
//! fixed literals cover whatever neither provider knows.

use crate::enrichment::domain::{AudioTrack, Scalar, UNIDENTIFIED_PLOT, VideoTrack};

/// Title used when neither provider knows one
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// Fully merged metadata for one music video
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataRecord {
    /// Video database id, empty when only the track database answered
    pub id: String,
    pub title: String,
    /// Four ASCII digits, or empty
    pub year: String,
    pub artist: String,
    pub album: String,
    /// Distinct trimmed values in first-seen order
    pub genres: Vec<String>,
    pub plot: String,
    pub director: String,
    pub studio: String,
}

impl MetadataRecord {
    /// Merge both provider results into one record.
    pub fn merge(video: Option<&VideoTrack>, audio: Option<&AudioTrack>) -> Self {
        let title = video
            .and_then(|v| non_empty(Some(v.title.as_str())))
            .or_else(|| audio.and_then(|a| non_empty(a.track.as_deref())))
            .unwrap_or(UNKNOWN_TITLE);

        let artist = video
            .and_then(VideoTrack::primary_artist)
            .or_else(|| audio.and_then(|a| non_empty(a.artist.as_deref())))
            .unwrap_or_default();

        let plot = video
            .and_then(|v| non_empty(Some(v.description.as_str())))
            .or_else(|| audio.and_then(|a| non_empty(a.description_en.as_deref())))
            .unwrap_or(UNIDENTIFIED_PLOT);

        let year = video
            .and_then(|v| v.year.as_ref())
            .and_then(year_from_scalar)
            .or_else(|| audio.and_then(|a| a.year_released.as_deref()).and_then(year_from_text))
            .unwrap_or_default();

        Self {
            id: video
                .and_then(|v| v.id.as_ref())
                .map(Scalar::to_string)
                .unwrap_or_default(),
            title: title.to_string(),
            year,
            artist: artist.to_string(),
            album: text(audio.and_then(|a| a.album.as_deref())),
            genres: audio.map(collect_genres).unwrap_or_default(),
            plot: plot.to_string(),
            director: text(audio.and_then(|a| a.director.as_deref())),
            studio: text(audio.and_then(|a| a.studio.as_deref())),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn text(value: Option<&str>) -> String {
    value.map(str::to_string).unwrap_or_default()
}

/// Numeric years are kept as-is; text years go through [`year_from_text`]
fn year_from_scalar(year: &Scalar) -> Option<String> {
    match year {
        Scalar::Number(n) if *n > 0 => Some(n.to_string()),
        Scalar::Number(_) => None,
        Scalar::Text(text) => year_from_text(text),
    }
}

/// First four characters of a date-like string, if they are all digits
fn year_from_text(text: &str) -> Option<String> {
    let year: String = text.trim().chars().take(4).collect();
    (year.len() == 4 && year.chars().all(|c| c.is_ascii_digit())).then_some(year)
}

/// Genre then style, trimmed, without empties or duplicates
fn collect_genres(audio: &AudioTrack) -> Vec<String> {
    let mut genres: Vec<String> = Vec::new();
    for value in [audio.genre.as_deref(), audio.style.as_deref()]
        .into_iter()
        .flatten()
    {
        let value = value.trim();
        if !value.is_empty() && !genres.iter().any(|g| g == value) {
            genres.push(value.to_string());
        }
    }
    genres
}
