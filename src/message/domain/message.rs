//! Guestbook message entity.

use super::{MessageDomainError, MessageId, MessageText};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A message as held by a caller, possibly not yet persisted.
///
/// A freshly constructed message has neither an identifier nor a creation
/// timestamp; both are assigned by the store on first save and never change
/// afterwards. Only the text is mutable, and it is validated on every save
/// rather than on assignment so that a form can hold work in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<MessageId>,
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime<Utc>>,
}

impl Message {
    /// Creates a new, unsaved message.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: None,
            text: text.into(),
            created_at: None,
        }
    }

    /// Creates an edit candidate for an already persisted message.
    ///
    /// The creation timestamp is not client-settable, so it is left empty;
    /// the store reports the authoritative value on save.
    #[must_use]
    pub fn existing(id: MessageId, text: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            text: text.into(),
            created_at: None,
        }
    }

    /// Returns the identifier, if the message has been persisted.
    #[must_use]
    pub const fn id(&self) -> Option<MessageId> {
        self.id
    }

    /// Returns the current text, validated or not.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the creation timestamp, if known.
    #[must_use]
    pub const fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Returns `true` while the message has no persisted identity.
    #[must_use]
    pub const fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Replaces the text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Validates the current text.
    ///
    /// # Errors
    ///
    /// Returns [`MessageDomainError`] when the text is empty or too long.
    pub fn validated_text(&self) -> Result<MessageText, MessageDomainError> {
        MessageText::new(self.text.clone())
    }
}

impl From<MessageRecord> for Message {
    fn from(record: MessageRecord) -> Self {
        Self {
            id: Some(record.id),
            text: record.text.into(),
            created_at: Some(record.created_at),
        }
    }
}

/// A persisted message row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRecord {
    id: MessageId,
    text: MessageText,
    created_at: DateTime<Utc>,
}

impl MessageRecord {
    /// Creates a record from store-assigned identity and validated text.
    #[must_use]
    pub const fn new(id: MessageId, text: MessageText, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text,
            created_at,
        }
    }

    /// Returns the identifier.
    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    /// Returns the text.
    #[must_use]
    pub const fn text(&self) -> &MessageText {
        &self.text
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replaces the text, leaving identity and timestamp untouched.
    pub fn replace_text(&mut self, text: MessageText) {
        self.text = text;
    }
}
