//! TheAudioDB API Data Transfer Objects
//!
//! These types match what the `searchtrack.php` endpoint returns.
//! DO NOT use these types outside the audiodb module - convert to domain types.
//!
//! API Reference: https://www.theaudiodb.com/free_music_api
//!
//! Field names follow the API's Hungarian-style prefixes (`str`, `int`, `id`).
//! Every value is a string or null, including numeric ones.

use serde::{Deserialize, Serialize};

/// Top-level search response; `track` is null when nothing matched
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SearchTrackResponse {
    #[serde(default)]
    pub track: Option<Vec<Track>>,
}

/// A single track record
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id_track: Option<String>,
    pub str_track: Option<String>,
    pub id_album: Option<String>,
    pub str_album: Option<String>,
    pub id_artist: Option<String>,
    pub str_artist: Option<String>,
    pub str_genre: Option<String>,
    pub str_style: Option<String>,
    #[serde(rename = "strDescriptionEN")]
    pub str_description_en: Option<String>,
    pub int_year_released: Option<String>,
    pub int_duration: Option<String>,
    pub str_mood: Option<String>,
    pub str_theme: Option<String>,
    pub str_music_vid: Option<String>,
    pub str_music_vid_director: Option<String>,
    pub str_music_vid_company: Option<String>,
    #[serde(rename = "idIMVDB")]
    pub id_imvdb: Option<String>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================
