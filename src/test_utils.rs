//! Test utilities and fixtures for mvnfo tests.
//!
//! This module provides provider-result factories and on-disk library
//! helpers to reduce boilerplate in tests.
//!
//! # Example
//!
//! ```ignore
//! use mvnfo::test_utils::{video_file, video_track};
//!
//! #[test]
//! fn test_something() {
//!     let file = video_file("Daft Punk", "Daft Punk - One More Time.mp4");
//!     let video = video_track("Daft Punk", "One More Time");
//!     // ... test logic
//! }
//! ```

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::enrichment::domain::{
    AudioTrack, UNIDENTIFIED_PLOT, VideoArtist, VideoCandidate, VideoFile, VideoTrack,
};

fn artists(names: &[&str]) -> Vec<VideoArtist> {
    names
        .iter()
        .map(|name| VideoArtist {
            name: name.to_string(),
            slug: None,
        })
        .collect()
}

/// Creates a raw video database search result.
///
/// Customize using struct update syntax:
///
/// ```ignore
/// let candidate = VideoCandidate {
///     year: Some(Scalar::Number(2000)),
///     ..video_candidate(&["Daft Punk"], "One More Time")
/// };
/// ```
pub fn video_candidate(artist_names: &[&str], title: &str) -> VideoCandidate {
    VideoCandidate {
        id: None,
        song_title: Some(title.to_string()),
        year: None,
        artists: artists(artist_names),
    }
}

/// Creates a resolved video with a single credited artist.
pub fn video_track(artist: &str, title: &str) -> VideoTrack {
    VideoTrack {
        id: None,
        title: title.to_string(),
        year: None,
        artists: artists(&[artist]),
        description: UNIDENTIFIED_PLOT.to_string(),
    }
}

/// Creates a track database hit with only track and album set.
pub fn audio_track(track: &str, album: &str) -> AudioTrack {
    AudioTrack {
        track: Some(track.to_string()),
        album: Some(album.to_string()),
        ..Default::default()
    }
}

/// Creates a parsed video file under `/videos/<folder>/<file_name>`.
///
/// Panics if the name has no `" - "` separator.
pub fn video_file(folder: &str, file_name: &str) -> VideoFile {
    let path = Path::new("/videos").join(folder).join(file_name);
    VideoFile::from_path(&path).expect("fixture file name must be \"Artist - Title\"")
}

/// Creates empty files in a temporary library.
///
/// Each entry is a path relative to the library root; parent directories
/// are created as needed. Keep the `TempDir` alive for the duration of
/// your test.
///
/// ```ignore
/// let (dir, paths) = temp_library(&["Daft Punk/Daft Punk - One More Time.mp4"]);
/// ```
pub fn temp_library(files: &[&str]) -> (TempDir, Vec<PathBuf>) {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");

    let paths = files
        .iter()
        .map(|relative| {
            let path = dir.path().join(relative);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).expect("Failed to create library folder");
            }
            std::fs::write(&path, b"").expect("Failed to create library file");
            path
        })
        .collect();

    (dir, paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_candidate_defaults() {
        let candidate = video_candidate(&["A", "B"], "Song");
        assert_eq!(candidate.song_title.as_deref(), Some("Song"));
        assert_eq!(candidate.artists.len(), 2);
        assert!(candidate.id.is_none());
    }

    #[test]
    fn test_video_file_fixture() {
        let file = video_file("Daft Punk", "Daft Punk - One More Time.mp4");
        assert_eq!(file.folder_artist, "Daft Punk");
        assert_eq!(file.name.artist, "Daft Punk");
        assert_eq!(file.path, PathBuf::from("/videos/Daft Punk/Daft Punk - One More Time.mp4"));
    }

    #[test]
    fn test_temp_library_creates_files() {
        let (_dir, paths) = temp_library(&["A/A - B.mp4", "C/D/C - E.mkv"]);
        assert_eq!(paths.len(), 2);
        assert!(paths.iter().all(|p| p.is_file()));
    }
}
