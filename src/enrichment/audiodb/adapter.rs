//! Adapter layer: Convert TheAudioDB DTOs to domain models
//!
//! This is the ONLY place where DTO types are converted to domain types.

use super::dto;
use crate::enrichment::domain::AudioTrack;

/// First track of the response, verbatim.
///
/// No ranking: TheAudioDB's own relevance ordering is trusted.
pub fn first_track(response: dto::SearchTrackResponse) -> Option<AudioTrack> {
    response
        .track
        .and_then(|tracks| tracks.into_iter().next())
        .map(to_audio_track)
}

fn to_audio_track(track: dto::Track) -> AudioTrack {
    AudioTrack {
        track: track.str_track,
        album: track.str_album,
        genre: track.str_genre,
        style: track.str_style,
        description_en: track.str_description_en,
        year_released: track.int_year_released,
        artist: track.str_artist,
        director: track.str_music_vid_director,
        studio: track.str_music_vid_company,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_track(title: &str) -> dto::Track {
        dto::Track {
            str_track: Some(title.to_string()),
            str_genre: Some("Rock".to_string()),
            str_music_vid_company: Some("Studio".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_takes_first_track_verbatim() {
        let response = dto::SearchTrackResponse {
            track: Some(vec![make_track("First"), make_track("Second")]),
        };

        let track = first_track(response).expect("should have a track");

        assert_eq!(track.track.as_deref(), Some("First"));
        assert_eq!(track.genre.as_deref(), Some("Rock"));
        assert_eq!(track.studio.as_deref(), Some("Studio"));
    }

    #[test]
    fn test_empty_or_null_list_is_none() {
        assert!(first_track(dto::SearchTrackResponse { track: None }).is_none());
        assert!(first_track(dto::SearchTrackResponse { track: Some(vec![]) }).is_none());
    }
}
