//! Service layer exposing the public guestbook operations.
//!
//! [`GuestbookService`] authorizes every call through an [`AccessPolicy`]
//! before delegating to a [`MessageRepository`].

use crate::access::{AccessPolicy, Session};
use crate::message::{
    domain::{
        Message, MessageDomainError, MessageFields, MessageId, MessageQuery, ProjectedMessage,
    },
    ports::{MessageRepository, MessageStoreError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Operation names reported in authorization errors.
const OP_SAVE: &str = "save";
const OP_FIND: &str = "find";
const OP_LOAD: &str = "load";

/// Service-level errors for guestbook operations.
#[derive(Debug, Error)]
pub enum GuestbookError {
    /// The message text violates its constraints.
    #[error(transparent)]
    Validation(#[from] MessageDomainError),

    /// The caller lacks standing for the operation.
    #[error("not authorized to {operation} this message")]
    Authorization {
        /// Name of the denied operation.
        operation: &'static str,
    },

    /// No message has the requested identifier.
    #[error("message not found: {0}")]
    NotFound(MessageId),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(MessageStoreError),
}

impl From<MessageStoreError> for GuestbookError {
    fn from(err: MessageStoreError) -> Self {
        match err {
            MessageStoreError::NotFound(id) => Self::NotFound(id),
            other @ MessageStoreError::Persistence(_) => Self::Repository(other),
        }
    }
}

/// Result type for guestbook service operations.
pub type GuestbookResult<T> = Result<T, GuestbookError>;

/// Guestbook operations with authorization and validation.
pub struct GuestbookService<R, P, C>
where
    R: MessageRepository,
    P: AccessPolicy,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    policy: Arc<P>,
    clock: Arc<C>,
}

impl<R, P, C> Clone for GuestbookService<R, P, C>
where
    R: MessageRepository,
    P: AccessPolicy,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            policy: Arc::clone(&self.policy),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, P, C> GuestbookService<R, P, C>
where
    R: MessageRepository,
    P: AccessPolicy,
    C: Clock + Send + Sync,
{
    /// Creates a new guestbook service.
    #[must_use]
    pub const fn new(repository: Arc<R>, policy: Arc<P>, clock: Arc<C>) -> Self {
        Self {
            repository,
            policy,
            clock,
        }
    }

    /// Returns the access policy in use.
    #[must_use]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Saves `message`, creating it when new and updating its text otherwise.
    ///
    /// Returns the persisted message with identifier and creation time set.
    ///
    /// # Errors
    ///
    /// Returns [`GuestbookError::Authorization`] when the caller has neither
    /// creator nor admin standing, [`GuestbookError::Validation`] when the
    /// text is invalid, [`GuestbookError::NotFound`] when an existing
    /// message's identifier is unknown, or [`GuestbookError::Repository`]
    /// when persistence fails.
    pub async fn save(&self, message: &Message, session: &Session) -> GuestbookResult<Message> {
        if !self.policy.can_save(message, session) {
            warn!(message_id = ?message.id(), "save denied");
            return Err(GuestbookError::Authorization { operation: OP_SAVE });
        }

        let text = message.validated_text()?;
        let roles = self.policy.roles(message, session);

        let record = match message.id() {
            None => self.repository.insert(text, self.clock.utc()).await?,
            Some(id) => self.repository.update(id, text).await?,
        };

        info!(
            message_id = %record.id(),
            created = message.is_new(),
            roles = ?roles,
            "message saved"
        );
        Ok(record.into())
    }

    /// Lists messages selected by `query`, projected onto `fields`.
    ///
    /// # Errors
    ///
    /// Returns [`GuestbookError::Authorization`] when the policy denies
    /// listing, or [`GuestbookError::Repository`] when the lookup fails.
    pub async fn find(
        &self,
        query: &MessageQuery,
        fields: MessageFields,
        session: &Session,
    ) -> GuestbookResult<Vec<ProjectedMessage>> {
        if !self.policy.can_find(session) {
            return Err(GuestbookError::Authorization { operation: OP_FIND });
        }

        let records = self.repository.find(query).await?;
        debug!(count = records.len(), limit = query.limit(), "messages listed");
        Ok(records.iter().map(|record| fields.project(record)).collect())
    }

    /// Loads the message with `id`, projected onto `fields`.
    ///
    /// # Errors
    ///
    /// Returns [`GuestbookError::Authorization`] when the policy denies
    /// loading, [`GuestbookError::NotFound`] when no message has `id`, or
    /// [`GuestbookError::Repository`] when the lookup fails.
    pub async fn get(
        &self,
        id: MessageId,
        fields: MessageFields,
        session: &Session,
    ) -> GuestbookResult<ProjectedMessage> {
        if !self.policy.can_load(session) {
            return Err(GuestbookError::Authorization { operation: OP_LOAD });
        }

        let record = self
            .repository
            .get(id)
            .await?
            .ok_or(GuestbookError::NotFound(id))?;
        debug!(message_id = %id, "message loaded");
        Ok(fields.project(&record))
    }
}
