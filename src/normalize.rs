//! Text normalization: the shared comparison surface for all exact matching.
//!
//! Every string compared by the matcher goes through [`Normalizer::normalize`]
//! first, so "Café", "CAFE" and "cafe" all land on the same bytes:
//!
//! 1. NFD normalize (decompose characters into base + combining marks)
//! 2. Filter out combining marks (category Mn = Mark, Nonspacing)
//! 3. Lowercase
//! 4. Collapse whitespace runs to a single space, trim
//!
//! The function is idempotent: `normalize(normalize(x)) == normalize(x)`.
//!
//! Article fields are normalized once per search call but queried many times
//! over the engine's lifetime, so results are memoized in a raw→normalized
//! cache. The cache is unbounded (the collection is fixed-size and loaded
//! once) and explicitly clearable.

use parking_lot::RwLock;
use std::collections::HashMap;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Memoizing normalizer shared by one engine instance.
///
/// The cache sits behind an `RwLock` so the engine can expose `search` on
/// `&self`; on a single-threaded caller the lock is uncontended.
#[derive(Default)]
pub struct Normalizer {
    cache: RwLock<HashMap<String, String>>,
}

impl Normalizer {
    pub fn new() -> Self {
        Normalizer::default()
    }

    /// Normalize `value`, consulting the cache first.
    pub fn normalize(&self, value: &str) -> String {
        if let Some(hit) = self.cache.read().get(value) {
            return hit.clone();
        }
        let normalized = normalize_uncached(value);
        self.cache
            .write()
            .insert(value.to_string(), normalized.clone());
        normalized
    }

    /// Drop all memoized entries.
    pub fn clear_cache(&self) {
        self.cache.write().clear();
    }

    /// Number of memoized entries.
    pub fn cache_len(&self) -> usize {
        self.cache.read().len()
    }
}

/// Normalize a string without touching any cache.
///
/// Pure and deterministic; [`Normalizer::normalize`] returns exactly this
/// value for every input. Only category Mn (Mark, Nonspacing) characters
/// are stripped after decomposition, so scripts whose base letters live
/// near combining-mark blocks (Devanagari, Telugu) survive intact.
pub fn normalize_uncached(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
