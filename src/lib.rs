//! In-memory lexical search over a fixed collection of legal articles.
//!
//! A free-text query resolves to a ranked subset of the collection using
//! exact (non-fuzzy) matching semantics, with an optional fuzzy fallback
//! and structured post-filtering by categorical metadata.
//!
//! # Architecture
//!
//! ```text
//! raw query ──▶ query.rs ──▶ QueryDescriptor ──▶ matcher.rs ─┐
//!                (classify)                        (matches)  │ per article,
//!                                                             │ full scan
//!               normalize.rs ◀── field text       scoring.rs ─┘
//!               (memoized)                         (score)
//!                                                     │
//!                              sort desc ──▶ filter.rs ──▶ SearchResult[]
//! ```
//!
//! The engine ([`SearchEngine`]) holds the collection loaded once at
//! startup plus the normalization cache, and nothing else. The fuzzy path
//! bypasses the classifier/matcher/scorer entirely and delegates to the
//! `nucleo-matcher` backend.
//!
//! # Usage
//!
//! ```
//! use lexfind::{Article, FilterSet, SearchEngine};
//!
//! let articles: Vec<Article> = lexfind::parse_collection(r#"[
//!     {"article": 25, "title": "Right to a Fair Trial",
//!      "chapter": "Justice", "part": "II",
//!      "text": "Everyone is entitled to a fair and public hearing."}
//! ]"#).unwrap();
//!
//! let engine = SearchEngine::new(articles).unwrap();
//! let results = engine.search("fair hearing", &FilterSet::default(), false);
//! assert_eq!(results[0].article.article, 25);
//! ```

mod engine;
mod error;
mod filter;
mod loader;
mod matcher;
mod normalize;
mod query;
mod recent;
mod scoring;
mod types;

#[doc(hidden)]
pub mod testing;

// Re-exports for the public API
pub use engine::{SearchEngine, BROWSE_COUNT};
pub use error::LoadError;
pub use filter::apply_filters;
pub use loader::{load_collection, parse_collection};
pub use matcher::{matches, ArticleText};
pub use normalize::{normalize_uncached, Normalizer};
pub use query::{classify, QueryDescriptor, QueryMode};
pub use recent::{MemoryStore, QueryStore, RecentQueries, MAX_RECENT};
pub use scoring::score;
pub use types::{Article, FilterSet, FuzzyDetail, MatchKind, SearchResult};
