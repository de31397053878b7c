//! Error types for state-store operations.

use std::io;
use thiserror::Error;

/// Result type for state-store operations.
pub type StateResult<T> = Result<T, StateError>;

/// Errors that can occur during state-store operations.
#[derive(Debug, Error)]
pub enum StateError {
    /// An I/O error occurred in the backing store.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A selector document could not be parsed or evaluated.
    #[error("invalid selector: {message}")]
    InvalidSelector {
        /// Description of the problem.
        message: String,
    },

    /// An iterator was used after it was closed.
    #[error("iterator is closed")]
    IteratorClosed,

    /// A generic backend failure.
    #[error("backend error: {message}")]
    Backend {
        /// Description of the failure.
        message: String,
    },
}

impl StateError {
    /// Creates an invalid selector error.
    pub fn invalid_selector(message: impl Into<String>) -> Self {
        Self::InvalidSelector {
            message: message.into(),
        }
    }

    /// Creates a backend error.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}
