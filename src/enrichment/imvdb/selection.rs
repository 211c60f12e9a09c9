//! Candidate selection for IMVDb search results.
//!
//! Every result is first classified against the query, then a single pick is
//! made by priority:
//!
//! 1. the first result matching both artist and title ([`MatchKind::Exact`]);
//! 2. otherwise the artist-only match whose title is most similar to the query
//!    title, accepted only at or above the title threshold;
//! 3. otherwise the first title-only match (weak fallback).
//!
//! Artist identity uses substring containment; title variation (live
//! versions, remix tags) is handled by edit-distance similarity.

use std::sync::LazyLock;

use regex::Regex;

use crate::enrichment::domain::VideoCandidate;
use crate::matching::{normalize, normalize_opt, similarity};

/// Minimum title similarity for a candidate picked on artist alone
pub const DEFAULT_TITLE_THRESHOLD: f64 = 70.0;

static PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(.*?\)").expect("valid parenthetical regex"));

static VERSION_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"version\s*\d+").expect("valid version regex"));

/// How a single search result relates to the query
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchKind {
    /// Artist and title both match
    Exact,
    /// Only the artist matches; carries the title similarity
    ArtistOnly { similarity: f64 },
    /// Only the title matches
    TitleOnly,
    Unmatched,
}

/// Result of the selection step, referring to candidates by index
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selection {
    Exact(usize),
    Fuzzy { index: usize, similarity: f64 },
    Weak(usize),
    /// Best artist-only candidate was not similar enough to trust
    Rejected { index: usize, similarity: f64 },
    None,
}

impl Selection {
    /// Index of the accepted candidate, if the selection is confident.
    pub fn accepted(&self) -> Option<usize> {
        match *self {
            Self::Exact(index) | Self::Fuzzy { index, .. } | Self::Weak(index) => Some(index),
            Self::Rejected { .. } | Self::None => None,
        }
    }
}

/// Classify and pick in one go.
pub fn select(
    candidates: &[VideoCandidate],
    artist: &str,
    title: &str,
    title_threshold: f64,
) -> Selection {
    pick(&classify(candidates, artist, title), title_threshold)
}

/// Classify every candidate against the query, in provider order.
pub fn classify(candidates: &[VideoCandidate], artist: &str, title: &str) -> Vec<MatchKind> {
    let artist_norm = normalize(artist);
    let title_norm = normalize(title);

    candidates
        .iter()
        .map(|candidate| {
            let artist_ok = artist_matches(candidate, &artist_norm);
            let title_ok = title_matches(candidate.song_title.as_deref(), &title_norm);

            match (artist_ok, title_ok) {
                (true, true) => MatchKind::Exact,
                (true, false) => MatchKind::ArtistOnly {
                    similarity: similarity(title, candidate.song_title.as_deref().unwrap_or_default()),
                },
                (false, true) => MatchKind::TitleOnly,
                (false, false) => MatchKind::Unmatched,
            }
        })
        .collect()
}

/// Pick one candidate from the classifications by priority.
///
/// A zero-similarity artist-only match does not count as a fuzzy candidate.
/// A low-similarity fuzzy candidate rejects the whole lookup rather than
/// falling back to a title-only match.
pub fn pick(kinds: &[MatchKind], title_threshold: f64) -> Selection {
    if let Some(index) = kinds.iter().position(|k| *k == MatchKind::Exact) {
        return Selection::Exact(index);
    }

    // Strict comparison keeps the first occurrence on ties
    let best_fuzzy = kinds
        .iter()
        .enumerate()
        .filter_map(|(index, kind)| match *kind {
            MatchKind::ArtistOnly { similarity } if similarity > 0.0 => Some((index, similarity)),
            _ => None,
        })
        .fold(None::<(usize, f64)>, |best, (index, similarity)| match best {
            Some((_, best_similarity)) if best_similarity >= similarity => best,
            _ => Some((index, similarity)),
        });

    if let Some((index, similarity)) = best_fuzzy {
        return if similarity >= title_threshold {
            Selection::Fuzzy { index, similarity }
        } else {
            Selection::Rejected { index, similarity }
        };
    }

    kinds
        .iter()
        .position(|k| *k == MatchKind::TitleOnly)
        .map_or(Selection::None, Selection::Weak)
}

/// Any credited artist equals or contains the normalized query artist
fn artist_matches(candidate: &VideoCandidate, artist_norm: &str) -> bool {
    candidate
        .artists
        .iter()
        .any(|a| normalize(&a.name).contains(artist_norm))
}

fn title_matches(song_title: Option<&str>, title_norm: &str) -> bool {
    let song = normalize_opt(song_title);
    if song.is_empty() {
        return false;
    }

    if overlaps(&song, title_norm) {
        return true;
    }

    let alt_song = strip_version_tags(&song);
    let alt_title = strip_version_tags(title_norm);
    !alt_song.is_empty() && !alt_title.is_empty() && overlaps(&alt_song, &alt_title)
}

/// Equal, or one contains the other
fn overlaps(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

/// Remove `(...)` groups and `version N` tags from a normalized title
fn strip_version_tags(title: &str) -> String {
    let without_parens = PARENTHETICAL.replace_all(title, "");
    VERSION_SUFFIX
        .replace_all(&without_parens, "")
        .trim()
        .to_string()
}
