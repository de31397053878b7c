//! Error types for record operations.

use thiserror::Error;

/// Result type for record operations.
pub type TraceResult<T> = Result<T, TraceError>;

/// Errors that can occur in record operations.
///
/// Every error is returned immediately to the caller; the engine performs
/// no local recovery or retries. Whether a failed invocation's effects are
/// kept or discarded is decided by the platform's invocation boundary.
#[derive(Debug, Error)]
pub enum TraceError {
    /// The input document or filter mapping could not be parsed.
    #[error("invalid payload: {message}")]
    InvalidPayload {
        /// Description of the parse failure.
        message: String,
    },

    /// A required field is missing or empty.
    #[error("validation failed: {message}")]
    Validation {
        /// Description of the missing field.
        message: String,
    },

    /// A record with this id already exists.
    #[error("record already exists: {id}")]
    AlreadyExists {
        /// The conflicting record id.
        id: String,
    },

    /// No record exists under this id.
    #[error("record not found: {id}")]
    NotFound {
        /// The id that was looked up.
        id: String,
    },

    /// Stored bytes failed to parse against the record schema.
    ///
    /// This signals a data-integrity problem and is never silently
    /// skipped: one corrupt record aborts an entire listing.
    #[error("corrupt record at {key}: {message}")]
    CorruptRecord {
        /// The state key holding the corrupt bytes.
        key: String,
        /// Description of the parse failure.
        message: String,
    },

    /// The store or its result iterator failed during a query.
    #[error("query failed: {message}")]
    Query {
        /// Description of the failure.
        message: String,
    },

    /// A read or write against the state store failed.
    #[error("store error: {0}")]
    Store(#[from] trazarroz_state::StateError),

    /// Event emission failed after the state mutation was applied.
    #[error("event emission failed: {message}")]
    Notify {
        /// Description of the failure.
        message: String,
    },
}

impl TraceError {
    /// Creates an invalid payload error.
    pub fn invalid_payload(message: impl Into<String>) -> Self {
        Self::InvalidPayload {
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Creates an already-exists error.
    pub fn already_exists(id: impl Into<String>) -> Self {
        Self::AlreadyExists { id: id.into() }
    }

    /// Creates a not-found error.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Creates a corrupt-record error.
    pub fn corrupt_record(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CorruptRecord {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Creates a query error.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Creates a notify error.
    pub fn notify(message: impl Into<String>) -> Self {
        Self::Notify {
            message: message.into(),
        }
    }
}
