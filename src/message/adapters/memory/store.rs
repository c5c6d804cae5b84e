//! In-memory implementation of the `MessageRepository` port.
//!
//! A single table guarded by an [`RwLock`]. All writes take the write lock,
//! which serializes identifier assignment and updates. Contents are lost when
//! the process exits, so this adapter suits development and demos only.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::message::{
    domain::{MessageId, MessageQuery, MessageRecord, MessageText},
    ports::{MessageRepository, MessageStoreError, MessageStoreResult},
};

/// Thread-safe in-memory message store.
///
/// # Example
///
/// ```
/// use guestbook::message::adapters::memory::InMemoryMessageStore;
///
/// let store = InMemoryMessageStore::new();
/// assert!(store.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryMessageStore {
    state: Arc<RwLock<InMemoryStoreState>>,
}

#[derive(Debug, Default)]
struct InMemoryStoreState {
    /// Records in insertion order.
    records: Vec<MessageRecord>,
    index: HashMap<MessageId, usize>,
    last_created_at: Option<DateTime<Utc>>,
}

impl InMemoryStoreState {
    fn fresh_id(&self) -> MessageId {
        loop {
            let candidate = MessageId::new();
            if !self.index.contains_key(&candidate) {
                return candidate;
            }
        }
    }
}

impl InMemoryMessageStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored messages.
    ///
    /// Returns `0` if the internal lock is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state
            .read()
            .map(|guard| guard.records.len())
            .unwrap_or(0)
    }

    /// Returns `true` if no messages are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageStore {
    async fn insert(
        &self,
        text: MessageText,
        now: DateTime<Utc>,
    ) -> MessageStoreResult<MessageRecord> {
        let mut state = self.state.write().map_err(|err| {
            MessageStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let id = state.fresh_id();
        let created_at = state.last_created_at.map_or(now, |last| last.max(now));
        let record = MessageRecord::new(id, text, created_at);

        let position = state.records.len();
        state.records.push(record.clone());
        state.index.insert(id, position);
        state.last_created_at = Some(created_at);
        Ok(record)
    }

    async fn update(&self, id: MessageId, text: MessageText) -> MessageStoreResult<MessageRecord> {
        let mut state = self.state.write().map_err(|err| {
            MessageStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let position = *state.index.get(&id).ok_or(MessageStoreError::NotFound(id))?;
        let record = state
            .records
            .get_mut(position)
            .ok_or(MessageStoreError::NotFound(id))?;
        record.replace_text(text);
        Ok(record.clone())
    }

    async fn find(&self, query: &MessageQuery) -> MessageStoreResult<Vec<MessageRecord>> {
        let state = self.state.read().map_err(|err| {
            MessageStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(query.apply(&state.records))
    }

    async fn get(&self, id: MessageId) -> MessageStoreResult<Option<MessageRecord>> {
        let state = self.state.read().map_err(|err| {
            MessageStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let record = state
            .index
            .get(&id)
            .and_then(|&position| state.records.get(position))
            .cloned();
        Ok(record)
    }
}
