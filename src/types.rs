//! The building blocks of the search engine.
//!
//! These types define what a collection holds ([`Article`]), what a search
//! returns ([`SearchResult`]), and how callers narrow a result set
//! ([`FilterSet`]).
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Article**: `article` numbers are unique within a loaded collection.
//!   [`crate::SearchEngine::new`] and the loader both reject duplicates.
//! - **Article**: immutable once loaded; `label` is derived exactly once at
//!   load time and never recomputed.
//! - **SearchResult**: `score` is an ordering key within a single query's
//!   result set, never a normalized relevance probability. `0.0` is a valid
//!   "matched, lowest tier" score.

use serde::{Deserialize, Serialize};

/// One indexed legal provision record.
///
/// `article` is the caller-assigned numeric identifier ("Article 25" has
/// `article: 25`). `label` is the derived display form, computed at load
/// time and skipped during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub article: u32,
    pub title: String,
    pub chapter: String,
    pub part: String,
    pub text: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "lawSource", default)]
    pub law_source: Option<String>,
    #[serde(skip_deserializing, default)]
    pub label: String,
}

impl Article {
    /// Derive the display label from the article number.
    pub fn derive_label(number: u32) -> String {
        format!("Article {}", number)
    }
}

/// Which matching path produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// The default classify/match/score path.
    Exact,
    /// The approximate-matching backend.
    Fuzzy,
}

/// Raw match detail reported by the fuzzy backend.
///
/// Only present on results from the fuzzy path. `positions` are character
/// indices into the article's concatenated raw fields, as reported by the
/// backend, and are meant for display-side highlighting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuzzyDetail {
    pub backend_score: u32,
    pub positions: Vec<u32>,
}

/// An [`Article`] ranked by a search call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub article: Article,
    pub score: f64,
    /// `None` for the browse prefix returned on a blank query.
    pub kind: Option<MatchKind>,
    pub fuzzy: Option<FuzzyDetail>,
}

impl SearchResult {
    pub(crate) fn exact(article: Article, score: f64) -> Self {
        SearchResult {
            article,
            score,
            kind: Some(MatchKind::Exact),
            fuzzy: None,
        }
    }

    pub(crate) fn fuzzy(article: Article, score: f64, detail: FuzzyDetail) -> Self {
        SearchResult {
            article,
            score,
            kind: Some(MatchKind::Fuzzy),
            fuzzy: Some(detail),
        }
    }

    pub(crate) fn browse(article: Article) -> Self {
        SearchResult {
            article,
            score: 0.0,
            kind: None,
            fuzzy: None,
        }
    }
}

/// Categorical predicates applied after ranking.
///
/// Present fields AND together; absent fields impose no constraint. The
/// default (all-`None`) set is the identity filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSet {
    /// Case-insensitive substring of the article's chapter.
    pub chapter: Option<String>,
    /// Case-insensitive substring of the article's part.
    pub part: Option<String>,
    /// Any-of: a candidate passes if any requested tag is a
    /// case-insensitive substring of any article tag.
    pub tags: Option<Vec<String>>,
    /// Exact equality against `law_source`. Articles without a source never
    /// match.
    #[serde(rename = "lawSource")]
    pub law_source: Option<String>,
}

impl FilterSet {
    /// True when no predicate is present.
    pub fn is_empty(&self) -> bool {
        self.chapter.is_none()
            && self.part.is_none()
            && self.tags.as_ref().map_or(true, |t| t.is_empty())
            && self.law_source.is_none()
    }
}
