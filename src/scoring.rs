//! Scoring: a fixed priority ladder per query mode.
//!
//! Scores are ordering keys within a single query's result set, never
//! compared across queries and never normalized. Each mode has its own
//! ladder; within every mode a title hit strictly outranks a body-only hit.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! ## TITLE_DOMINANCE
//! For every mode: the lowest title-tier score is strictly greater than the
//! highest body-tier score. With the current constants:
//!
//! ```text
//! ID_EXACT (100) > TITLE_PREFIX (75) > TITLE_HIT (50) > BODY_HIT (25)
//! TITLE_MATCH (60) > BODY_MATCH (30)
//! ```
//!
//! Ties after scoring break on ascending article number, so ranking is
//! fully deterministic for a fixed collection and query.

use crate::matcher::ArticleText;
use crate::query::{QueryDescriptor, QueryMode};

/// Article-number ladder: the query named this exact provision.
pub const ID_EXACT: f64 = 100.0;
/// Article-number ladder: title starts with the keyword form.
pub const TITLE_PREFIX: f64 = 75.0;
/// Article-number ladder: title contains the keyword form.
pub const TITLE_HIT: f64 = 50.0;
/// Article-number ladder: only the body mentions the keyword form.
pub const BODY_HIT: f64 = 25.0;

/// Phrase / word / all-words ladder: the title satisfies the predicate.
pub const TITLE_MATCH: f64 = 60.0;
/// Phrase / word / all-words ladder: only the body satisfies it.
pub const BODY_MATCH: f64 = 30.0;

/// Score one article that already passed [`crate::matcher::matches`] for the
/// same descriptor.
///
/// Calling this on a non-matching article yields the mode's floor tier; the
/// engine never does.
pub fn score(text: &ArticleText<'_>, descriptor: &QueryDescriptor) -> f64 {
    match &descriptor.mode {
        QueryMode::ArticleNumber {
            number,
            text_pattern,
            title_prefix,
        } => {
            if text.article.article == *number {
                ID_EXACT
            } else if title_prefix.is_match(&text.title) {
                TITLE_PREFIX
            } else if text_pattern.is_match(&text.title) {
                TITLE_HIT
            } else {
                BODY_HIT
            }
        }
        QueryMode::Phrase { phrase } => {
            if text.title.contains(phrase.as_str()) {
                TITLE_MATCH
            } else {
                BODY_MATCH
            }
        }
        QueryMode::Word { word, .. } => {
            if word.is_match(&text.title) {
                TITLE_MATCH
            } else {
                BODY_MATCH
            }
        }
        // Combined condition per field: ALL tokens in the title, or the
        // body tier. Not summed per token.
        QueryMode::AllWords { words, .. } => {
            if words.iter().all(|word| word.is_match(&text.title)) {
                TITLE_MATCH
            } else {
                BODY_MATCH
            }
        }
    }
}
