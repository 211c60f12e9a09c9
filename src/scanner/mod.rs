//! Video file discovery.
//!
//! Walks a library root and returns the files worth identifying, in a
//! stable order.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Video container extensions picked up when none are configured
pub const DEFAULT_EXTENSIONS: &[&str] = &["mp4", "avi", "mpg", "mpeg", "mov", "mkv"];

/// Prefix of macOS AppleDouble resource files (`._Song.mp4`)
const APPLE_DOUBLE_PREFIX: &str = "._";

/// Scans the given root recursively for video files.
///
/// Extensions are compared case-insensitively. AppleDouble files and
/// unreadable entries are skipped. A root that is itself a matching file
/// yields just that file. Results are sorted so batches run in a stable
/// order.
pub fn discover(root: &Path, extensions: &[String]) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|path| is_video_file(path, extensions))
        .collect();

    paths.sort();
    tracing::debug!("Discovered {} video file(s) under {:?}", paths.len(), root);
    paths
}

/// Check if a path looks like a video we should identify
pub fn is_video_file(path: &Path, extensions: &[String]) -> bool {
    let hidden = path
        .file_name()
        .and_then(|s| s.to_str())
        .is_some_and(|name| name.starts_with(APPLE_DOUBLE_PREFIX));
    if hidden {
        return false;
    }

    let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
        return false;
    };
    extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(ext))
}

/// [`DEFAULT_EXTENSIONS`] as owned strings, for config defaults
pub fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect()
}
