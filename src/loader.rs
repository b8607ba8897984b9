//! Collection loading: JSON in, validated articles out.
//!
//! The load is all-or-nothing: a single malformed record fails the whole
//! collection instead of being silently skipped, so a bad data file can
//! never silently undercount matches. Labels are derived here, once.
//!
//! The engine's boundary is "an ordered sequence of already-parsed
//! [`Article`]s"; where the bytes come from (file, network, embedded) is the
//! caller's concern. This module covers the common file/string cases.

use crate::error::LoadError;
use crate::types::Article;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Parse a JSON array of article records.
pub fn parse_collection(json: &str) -> Result<Vec<Article>, LoadError> {
    let mut articles: Vec<Article> = serde_json::from_str(json)?;
    finalize(&mut articles)?;
    Ok(articles)
}

/// Read and parse a collection file.
pub fn load_collection(path: &Path) -> Result<Vec<Article>, LoadError> {
    let json = fs::read_to_string(path)?;
    parse_collection(&json)
}

/// Derive labels and enforce article-number uniqueness, preserving input
/// order.
pub fn finalize(articles: &mut [Article]) -> Result<(), LoadError> {
    let mut seen = HashSet::with_capacity(articles.len());
    for article in articles.iter_mut() {
        if !seen.insert(article.article) {
            return Err(LoadError::DuplicateArticle(article.article));
        }
        article.label = Article::derive_label(article.article);
    }
    Ok(())
}
