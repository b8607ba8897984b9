//! Orchestration: the search engine over one loaded collection.
//!
//! `search` is the front door: it short-circuits blank queries into the
//! browse prefix, dispatches the caller's fuzzy flag to one of two
//! independently usable strategies ([`SearchEngine::search_exact`] /
//! [`SearchEngine::search_fuzzy`]), and post-filters the ranked output.
//!
//! The exact path classifies the query once, then runs a full scan —
//! matcher plus scorer per article, no index. Collections here are a few
//! hundred provisions, so a scan beats maintaining index structures.
//!
//! The engine holds no other state than the collection and the
//! normalization cache; every call is independently pure. Cancellation and
//! debouncing of rapid-fire queries belong to the caller.

use crate::error::LoadError;
use crate::filter::apply_filters;
use crate::loader;
use crate::matcher::{self, ArticleText};
use crate::normalize::Normalizer;
use crate::query::{classify, QueryDescriptor};
use crate::scoring;
use crate::types::{Article, FilterSet, FuzzyDetail, SearchResult};
use nucleo_matcher::{Config, Matcher, Utf32String};

/// How many articles a blank query returns, in load order.
pub const BROWSE_COUNT: usize = 4;

/// In-memory search engine over an immutable article collection.
pub struct SearchEngine {
    articles: Vec<Article>,
    normalizer: Normalizer,
}

impl SearchEngine {
    /// Build an engine from already-parsed articles.
    ///
    /// Derives display labels and rejects duplicate article numbers;
    /// otherwise load order is preserved verbatim.
    pub fn new(mut articles: Vec<Article>) -> Result<Self, LoadError> {
        loader::finalize(&mut articles)?;
        Ok(SearchEngine {
            articles,
            normalizer: Normalizer::new(),
        })
    }

    /// Engine over an empty collection, for the load-failed state.
    ///
    /// Every search against it deterministically returns no results.
    pub fn empty() -> Self {
        SearchEngine {
            articles: Vec::new(),
            normalizer: Normalizer::new(),
        }
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Drop the memoized normalizations (they rebuild lazily).
    pub fn clear_cache(&self) {
        self.normalizer.clear_cache();
    }

    /// Classify a query the way a search call would.
    ///
    /// Exposed so display code (highlighting) can reuse the exact mode
    /// decision instead of re-deriving its own.
    pub fn classify_query(&self, query: &str) -> QueryDescriptor {
        classify(query, &self.normalizer)
    }

    /// Run one search call.
    ///
    /// A blank query returns the first [`BROWSE_COUNT`] articles in load
    /// order with filters NOT applied (the browse state is not a filtered
    /// search). Otherwise the fuzzy flag picks the strategy and `filters`
    /// prune the ranked output.
    pub fn search(&self, query: &str, filters: &FilterSet, use_fuzzy: bool) -> Vec<SearchResult> {
        if query.trim().is_empty() {
            return self
                .articles
                .iter()
                .take(BROWSE_COUNT)
                .cloned()
                .map(SearchResult::browse)
                .collect();
        }

        let results = if use_fuzzy {
            self.search_fuzzy(query)
        } else {
            self.search_exact(query)
        };
        apply_filters(results, filters)
    }

    /// Exact strategy: classify once, full scan with matcher and scorer,
    /// sort by score descending with article number as the tiebreak.
    pub fn search_exact(&self, query: &str) -> Vec<SearchResult> {
        let descriptor = classify(query, &self.normalizer);

        let mut results: Vec<SearchResult> = self
            .articles
            .iter()
            .filter_map(|article| {
                let text = ArticleText::new(article, &self.normalizer);
                if matcher::matches(&text, &descriptor) {
                    let score = scoring::score(&text, &descriptor);
                    Some(SearchResult::exact(article.clone(), score))
                } else {
                    None
                }
            })
            .collect();

        sort_ranked(&mut results);
        results
    }

    /// Fuzzy strategy: delegate entirely to the approximate-matching
    /// backend over the raw query. The classifier, matcher and scorer are
    /// bypassed; the backend's score becomes the ordering key and its match
    /// positions ride along for display.
    pub fn search_fuzzy(&self, query: &str) -> Vec<SearchResult> {
        let mut backend = Matcher::new(Config::DEFAULT);
        let needle = Utf32String::from(query);

        let mut results: Vec<SearchResult> = self
            .articles
            .iter()
            .filter_map(|article| {
                let haystack = Utf32String::from(fuzzy_haystack(article).as_str());
                let mut positions = Vec::new();
                backend
                    .fuzzy_indices(haystack.slice(..), needle.slice(..), &mut positions)
                    .map(|backend_score| {
                        SearchResult::fuzzy(
                            article.clone(),
                            f64::from(backend_score),
                            FuzzyDetail {
                                backend_score: u32::from(backend_score),
                                positions,
                            },
                        )
                    })
            })
            .collect();

        sort_ranked(&mut results);
        results
    }
}

/// Raw field concatenation for the fuzzy backend, same field order as the
/// exact path's searchable text. The backend does its own case folding and
/// unicode handling, so no normalizer here.
fn fuzzy_haystack(article: &Article) -> String {
    let mut fields = vec![
        article.title.as_str(),
        article.text.as_str(),
        article.chapter.as_str(),
        article.part.as_str(),
    ];
    fields.retain(|f| !f.is_empty());
    let tags = article.tags.join(" ");
    if !tags.is_empty() {
        return format!("{} {}", fields.join(" "), tags);
    }
    fields.join(" ")
}

/// Score descending, then article number ascending. Deterministic for a
/// fixed collection and query.
fn sort_ranked(results: &mut [SearchResult]) {
    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.article.article.cmp(&b.article.article))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::article;
    use crate::types::MatchKind;

    fn engine() -> SearchEngine {
        SearchEngine::new(vec![
            article(1, "Human Dignity", "Human dignity shall be inviolable."),
            article(2, "Right to Liberty", "Everyone has the right to liberty."),
            article(3, "Fair Procedure", "A fair trial is guaranteed to all."),
            article(25, "Right to a Fair Trial", "Everyone is entitled to a fair hearing."),
            article(30, "Final Provisions", "Nothing here permits destruction of rights."),
        ])
        .unwrap()
    }

    #[test]
    fn test_blank_query_returns_browse_prefix() {
        let engine = engine();
        let results = engine.search("   ", &FilterSet::default(), false);
        assert_eq!(results.len(), BROWSE_COUNT);
        let numbers: Vec<u32> = results.iter().map(|r| r.article.article).collect();
        assert_eq!(numbers, vec![1, 2, 3, 25]);
        assert!(results.iter().all(|r| r.kind.is_none()));
    }

    #[test]
    fn test_blank_query_ignores_filters() {
        let engine = engine();
        let filters = FilterSet {
            chapter: Some("no such chapter".to_string()),
            ..FilterSet::default()
        };
        assert_eq!(engine.search("", &filters, false).len(), BROWSE_COUNT);
    }

    #[test]
    fn test_exact_results_are_tagged_and_sorted() {
        let engine = engine();
        let results = engine.search("fair", &FilterSet::default(), false);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.kind == Some(MatchKind::Exact)));
        // Both have "fair" in the title, so the tie breaks on article number.
        assert_eq!(results[0].article.article, 3);
        assert_eq!(results[1].article.article, 25);
    }

    #[test]
    fn test_article_number_regression() {
        let engine = engine();
        let results = engine.search("25", &FilterSet::default(), false);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].article.article, 25);
        assert_eq!(results[0].score, crate::scoring::ID_EXACT);
    }

    #[test]
    fn test_empty_engine_never_errors() {
        let engine = SearchEngine::empty();
        assert!(engine.search("liberty", &FilterSet::default(), false).is_empty());
        assert!(engine.search("liberty", &FilterSet::default(), true).is_empty());
        assert!(engine.search("", &FilterSet::default(), false).is_empty());
    }

    #[test]
    fn test_fuzzy_results_carry_backend_detail() {
        let engine = engine();
        let results = engine.search("librty", &FilterSet::default(), true);
        assert!(!results.is_empty());
        let top = &results[0];
        assert_eq!(top.kind, Some(MatchKind::Fuzzy));
        let detail = top.fuzzy.as_ref().unwrap();
        assert!(detail.backend_score > 0);
        assert!(!detail.positions.is_empty());
        assert_eq!(top.article.article, 2);
    }

    #[test]
    fn test_fuzzy_respects_filters() {
        let engine = engine();
        let filters = FilterSet {
            chapter: Some("no such chapter".to_string()),
            ..FilterSet::default()
        };
        assert!(engine.search("librty", &filters, true).is_empty());
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let engine = engine();
        assert!(engine
            .search("zzzzquux", &FilterSet::default(), false)
            .is_empty());
    }

    #[test]
    fn test_duplicate_numbers_rejected() {
        let result = SearchEngine::new(vec![
            article(1, "A", "x"),
            article(1, "B", "y"),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cache_fills_and_clears() {
        let engine = engine();
        engine.search("liberty", &FilterSet::default(), false);
        engine.clear_cache();
        // Still correct after clearing.
        let results = engine.search("liberty", &FilterSet::default(), false);
        assert_eq!(results[0].article.article, 2);
    }
}
