//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical constructors so fixtures stay consistent.

#![doc(hidden)]

use crate::types::Article;

/// Create a test article with default metadata.
///
/// Chapter and part are fixed non-empty strings so filter tests have
/// something to match; tags and law source start empty.
pub fn article(number: u32, title: &str, text: &str) -> Article {
    Article {
        article: number,
        title: title.to_string(),
        chapter: "General Principles".to_string(),
        part: "Part I".to_string(),
        text: text.to_string(),
        tags: vec![],
        law_source: None,
        label: Article::derive_label(number),
    }
}

/// Create a test article with explicit categorical metadata.
pub fn article_in(
    number: u32,
    title: &str,
    text: &str,
    chapter: &str,
    part: &str,
    tags: &[&str],
    law_source: Option<&str>,
) -> Article {
    Article {
        article: number,
        title: title.to_string(),
        chapter: chapter.to_string(),
        part: part.to_string(),
        text: text.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        law_source: law_source.map(str::to_string),
        label: Article::derive_label(number),
    }
}
