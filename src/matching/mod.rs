//! Text canonicalization and fuzzy scoring shared by every matching decision.
//!
//! Raw strings are never compared directly: everything goes through
//! [`normalize`] first, and all approximate decisions reduce to a threshold
//! comparison against [`similarity`].

mod normalize;
mod similarity;

pub use normalize::{artist_key, normalize, normalize_opt};
pub use similarity::{artist_similarity, similarity};
