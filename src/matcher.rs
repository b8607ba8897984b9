//! Match testing: does one article satisfy one classified query?
//!
//! Matching never looks at raw field text. [`ArticleText`] builds the
//! normalized view of an article once per search call — the title, the body,
//! and the concatenated searchable text in fixed field order (title, body,
//! chapter, part, tags) — and both the matcher and the scorer read from it.
//!
//! A failed predicate excludes the article outright. There is no fallback
//! from a stricter mode to a looser one inside the exact path; fuzzy
//! matching is a separate, caller-selected strategy.

use crate::normalize::Normalizer;
use crate::query::{QueryDescriptor, QueryMode};
use crate::types::Article;

/// Normalized view of one article, valid for the duration of one search
/// call.
pub struct ArticleText<'a> {
    pub article: &'a Article,
    pub title: String,
    pub body: String,
    /// Title, body, chapter, part, tags, normalized and joined by single
    /// spaces. The matching surface for every mode.
    pub searchable: String,
}

impl<'a> ArticleText<'a> {
    pub fn new(article: &'a Article, normalizer: &Normalizer) -> Self {
        let title = normalizer.normalize(&article.title);
        let body = normalizer.normalize(&article.text);
        let chapter = normalizer.normalize(&article.chapter);
        let part = normalizer.normalize(&article.part);
        let tags = normalizer.normalize(&article.tags.join(" "));

        let searchable = [&title, &body, &chapter, &part, &tags]
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        ArticleText {
            article,
            title,
            body,
            searchable,
        }
    }
}

/// Decide match/no-match for one article under one query mode.
pub fn matches(text: &ArticleText<'_>, descriptor: &QueryDescriptor) -> bool {
    match &descriptor.mode {
        QueryMode::ArticleNumber {
            number,
            text_pattern,
            ..
        } => text.article.article == *number || text_pattern.is_match(&text.searchable),
        QueryMode::Phrase { phrase } => {
            !phrase.is_empty() && text.searchable.contains(phrase.as_str())
        }
        QueryMode::Word { word, token } => !token.is_empty() && word.is_match(&text.searchable),
        QueryMode::AllWords { words, .. } => {
            words.iter().all(|word| word.is_match(&text.searchable))
        }
    }
}
