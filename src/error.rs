//! Error taxonomy shared by every operator.
//!
//! Operators either return a complete result or exactly one [`QueryError`].
//! Nothing is retried and nothing is partially applied, so a failure in a later
//! call of a chain leaves the sequences returned by earlier calls untouched.

use thiserror::Error;

/// Canonical result for query operators.
pub type Result<T> = std::result::Result<T, QueryError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// An argument was rejected before any iteration began.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("no element found: {0}")]
    NotFound(String),

    /// A uniqueness constraint (`single_*`) saw more than one match.
    #[error("expected exactly one matching element, found {count}")]
    MultipleMatches { count: usize },

    #[error("unsupported sequence shape: {0}")]
    UnsupportedShape(String),
}

impl QueryError {
    pub(crate) fn empty(op: &'static str) -> Self {
        QueryError::NotFound(format!("`{op}` called on an empty sequence"))
    }

    pub(crate) fn no_match(op: &'static str) -> Self {
        QueryError::NotFound(format!("no element satisfies the predicate passed to `{op}`"))
    }
}
