//! Post-filtering: categorical predicates over an already-ranked result set.
//!
//! A pure, order-preserving pass. Filters never re-sort and never mutate
//! their input; they only drop entries. Present predicates AND together.
//! A predicate that matches nothing in the collection yields an empty result,
//! never an error.

use crate::types::{FilterSet, SearchResult};

/// Apply `filters` to `results`, preserving order.
pub fn apply_filters(results: Vec<SearchResult>, filters: &FilterSet) -> Vec<SearchResult> {
    if filters.is_empty() {
        return results;
    }
    results
        .into_iter()
        .filter(|result| passes(result, filters))
        .collect()
}

fn passes(result: &SearchResult, filters: &FilterSet) -> bool {
    let article = &result.article;

    if let Some(chapter) = &filters.chapter {
        if !contains_ci(&article.chapter, chapter) {
            return false;
        }
    }
    if let Some(part) = &filters.part {
        if !contains_ci(&article.part, part) {
            return false;
        }
    }
    if let Some(tags) = &filters.tags {
        if !tags.is_empty() {
            let any = tags
                .iter()
                .any(|wanted| article.tags.iter().any(|tag| contains_ci(tag, wanted)));
            if !any {
                return false;
            }
        }
    }
    if let Some(source) = &filters.law_source {
        if article.law_source.as_deref() != Some(source.as_str()) {
            return false;
        }
    }
    true
}

/// Case-insensitive substring containment.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
