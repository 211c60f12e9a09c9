//! Edit-distance similarity on a 0-100 scale.

use super::normalize::{artist_key, normalize};

/// Fuzzy similarity between two strings, in `[0, 100]`.
///
/// Both inputs are normalized first. Two empty strings are identical (100);
/// exactly one empty string scores 0. Otherwise the Levenshtein distance is
/// converted to a percentage of the longer string's length. Symmetric.
pub fn similarity(a: &str, b: &str) -> f64 {
    score_normalized(&normalize(a), &normalize(b))
}

/// Similarity between two artist names, ignoring a leading/trailing "The".
pub fn artist_similarity(a: &str, b: &str) -> f64 {
    score_normalized(&artist_key(a), &artist_key(b))
}

fn score_normalized(a: &str, b: &str) -> f64 {
    let len_a = a.chars().count();
    let len_b = b.chars().count();

    match (len_a, len_b) {
        (0, 0) => 100.0,
        (0, _) | (_, 0) => 0.0,
        _ => {
            let distance = strsim::levenshtein(a, b);
            let max_len = len_a.max(len_b);
            // Multiply before dividing so exact percentages (70, 65) stay exact
            let score = 100.0 * max_len.saturating_sub(distance) as f64 / max_len as f64;
            score.clamp(0.0, 100.0)
        }
    }
}
