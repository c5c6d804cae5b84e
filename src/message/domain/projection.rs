//! Field projections for message queries.

use super::{MessageDomainError, MessageId, MessageRecord};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A projectable message attribute. The identifier is always returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageField {
    /// The message body.
    Text,
    /// The creation timestamp.
    CreatedAt,
}

impl MessageField {
    /// Returns the wire name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::CreatedAt => "createdAt",
        }
    }
}

impl fmt::Display for MessageField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageField {
    type Err = MessageDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "text" => Ok(Self::Text),
            "createdAt" | "created_at" => Ok(Self::CreatedAt),
            other => Err(MessageDomainError::UnknownField(other.to_owned())),
        }
    }
}

/// Set of attributes a query should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageFields {
    text: bool,
    created_at: bool,
}

impl MessageFields {
    /// Selects every attribute.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            text: true,
            created_at: true,
        }
    }

    /// Selects only the identifier.
    #[must_use]
    pub const fn id_only() -> Self {
        Self {
            text: false,
            created_at: false,
        }
    }

    /// Adds `field` to the selection.
    #[must_use]
    pub const fn with(mut self, field: MessageField) -> Self {
        match field {
            MessageField::Text => self.text = true,
            MessageField::CreatedAt => self.created_at = true,
        }
        self
    }

    /// Returns whether `field` is selected.
    #[must_use]
    pub const fn includes(self, field: MessageField) -> bool {
        match field {
            MessageField::Text => self.text,
            MessageField::CreatedAt => self.created_at,
        }
    }

    /// Parses a comma-separated field list such as `text,createdAt`.
    ///
    /// Blank entries are ignored, so an empty list selects only the
    /// identifier.
    ///
    /// # Errors
    ///
    /// Returns [`MessageDomainError::UnknownField`] for an unrecognised name.
    pub fn parse_list(list: &str) -> Result<Self, MessageDomainError> {
        list.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .try_fold(Self::id_only(), |fields, name| {
                Ok(fields.with(name.parse()?))
            })
    }

    /// Projects `record` onto the selected attributes.
    #[must_use]
    pub fn project(self, record: &MessageRecord) -> ProjectedMessage {
        ProjectedMessage {
            id: record.id(),
            text: self.text.then(|| record.text().as_str().to_owned()),
            created_at: self.created_at.then(|| record.created_at()),
        }
    }
}

impl Default for MessageFields {
    fn default() -> Self {
        Self::all()
    }
}

/// A message restricted to the requested attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedMessage {
    id: MessageId,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime<Utc>>,
}

impl ProjectedMessage {
    /// Returns the identifier.
    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    /// Returns the text when it was requested.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Returns the creation timestamp when it was requested.
    #[must_use]
    pub const fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}
