//! Error types for trie operations.
//!
//! Failures are local to a single call. [`TrieError`] is only produced for
//! precondition violations and strict removals; ordinary misses are reported
//! through `bool`/[`DeleteOutcome`](crate::DeleteOutcome) return values.

use thiserror::Error;

/// Errors produced by [`Trie`](crate::Trie) and [`PrefixTree`](crate::PrefixTree).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
    /// The value cannot be stored as a word.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The value is not stored as a word.
    #[error("not found: {0}")]
    NotFound(String),
}

impl TrieError {
    /// Create an [`TrieError::InvalidArgument`] error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        TrieError::InvalidArgument(msg.into())
    }

    /// Create a [`TrieError::NotFound`] error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        TrieError::NotFound(msg.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TrieError>;
