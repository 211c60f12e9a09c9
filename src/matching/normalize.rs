//! Accent-insensitive, case-insensitive string canonicalization.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Canonicalize a string for comparison.
///
/// Lowercases, decomposes accented characters (NFD), drops the combining
/// marks and trims surrounding whitespace. Idempotent.
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// [`normalize`] for optional provider fields; absent values become `""`.
pub fn normalize_opt(s: Option<&str>) -> String {
    normalize(s.unwrap_or_default())
}

/// Normalized artist name with the English article removed.
///
/// Handles "The Beatles", "Beatles, The" and "Dandy Warhols (the)" so that
/// folder names and provider names written in different conventions compare
/// as equal. A name that is nothing but the article is kept as-is.
pub fn artist_key(name: &str) -> String {
    let normalized = normalize(name);

    let stripped = normalized
        .strip_prefix("the ")
        .or_else(|| normalized.strip_suffix(", the"))
        .or_else(|| normalized.strip_suffix(" (the)"))
        .map(str::trim);

    match stripped {
        Some(key) if !key.is_empty() => key.to_string(),
        _ => normalized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_diacritics_and_trims() {
        assert_eq!(normalize("Ôlá  "), "ola");
        assert_eq!(normalize("  Beyoncé "), "beyonce");
        assert_eq!(normalize("Sigur Rós"), "sigur ros");
    }

    #[test]
    fn test_absent_is_empty() {
        assert_eq!(normalize_opt(None), "");
        assert_eq!(normalize_opt(Some(" Ação ")), "acao");
    }

    #[test]
    fn test_keeps_inner_whitespace_and_punctuation() {
        assert_eq!(normalize("One More Time (Live)"), "one more time (live)");
    }

    #[test]
    fn test_artist_key_article_forms() {
        assert_eq!(artist_key("The Beatles"), "beatles");
        assert_eq!(artist_key("Beatles, The"), "beatles");
        assert_eq!(artist_key("Dandy Warhols (The)"), "dandy warhols");
        assert_eq!(artist_key("Theory of a Deadman"), "theory of a deadman");
        assert_eq!(artist_key("The"), "the");
    }
}
