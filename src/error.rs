//! Error taxonomy.
//!
//! Only collection loading can fail. Data-driven conditions — odd query
//! text, zero matches, empty or unsatisfiable filters — are normal outcomes
//! and never surface as errors.

use thiserror::Error;

/// Failure while loading or validating a collection.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read collection: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse collection: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two records claimed the same article number. The whole load fails
    /// rather than silently keeping one of them.
    #[error("duplicate article number {0} in collection")]
    DuplicateArticle(u32),
}
