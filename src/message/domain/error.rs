//! Error types for message domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing message domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MessageDomainError {
    /// The message text is empty.
    #[error("message text must not be empty")]
    EmptyText,

    /// The message text exceeds the 300-character limit.
    #[error("message text exceeds {max} character limit ({actual} characters)")]
    TextTooLong {
        /// Maximum accepted length.
        max: usize,
        /// Length of the rejected text.
        actual: usize,
    },

    /// The identifier is not a valid UUID.
    #[error("invalid message identifier: {0}")]
    InvalidMessageId(String),

    /// A projection names a field that messages do not have.
    #[error("unknown message field: {0}")]
    UnknownField(String),

    /// A sort order other than `asc` or `desc` was requested.
    #[error("unknown sort order: {0}")]
    UnknownSortOrder(String),
}
