//! Repository port for message persistence and queries.

use crate::message::domain::{MessageId, MessageQuery, MessageRecord, MessageText};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for message repository operations.
pub type MessageStoreResult<T> = Result<T, MessageStoreError>;

/// Message persistence contract.
///
/// Implementations own identifier assignment and creation timestamps, and
/// must serialize writes so that identifiers stay unique and concurrent
/// updates of the same record are not lost.
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Persists a new message, assigning a fresh identifier and stamping the
    /// creation time.
    ///
    /// `now` is the caller's clock reading. Implementations never stamp a
    /// time earlier than a previously assigned creation time.
    ///
    /// # Errors
    ///
    /// Returns [`MessageStoreError::Persistence`] when the store fails.
    async fn insert(
        &self,
        text: MessageText,
        now: DateTime<Utc>,
    ) -> MessageStoreResult<MessageRecord>;

    /// Replaces the text of an existing message.
    ///
    /// # Errors
    ///
    /// Returns [`MessageStoreError::NotFound`] when no message has `id`.
    async fn update(&self, id: MessageId, text: MessageText) -> MessageStoreResult<MessageRecord>;

    /// Returns the messages selected by `query`.
    async fn find(&self, query: &MessageQuery) -> MessageStoreResult<Vec<MessageRecord>>;

    /// Returns the message with `id`, or `None` when it does not exist.
    async fn get(&self, id: MessageId) -> MessageStoreResult<Option<MessageRecord>>;
}

/// Errors returned by message repository implementations.
#[derive(Debug, Clone, Error)]
pub enum MessageStoreError {
    /// The message was not found.
    #[error("message not found: {0}")]
    NotFound(MessageId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl MessageStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
