//! Validated message text.

use super::MessageDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of characters in a message.
pub const MAX_TEXT_LENGTH: usize = 300;

/// Message body between 1 and [`MAX_TEXT_LENGTH`] characters.
///
/// Length is counted in Unicode scalar values and the input is kept verbatim;
/// whitespace is neither trimmed nor rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MessageText(String);

impl MessageText {
    /// Creates validated message text.
    ///
    /// # Errors
    ///
    /// Returns [`MessageDomainError::EmptyText`] when the value is empty or
    /// [`MessageDomainError::TextTooLong`] when it exceeds
    /// [`MAX_TEXT_LENGTH`] characters.
    pub fn new(value: impl Into<String>) -> Result<Self, MessageDomainError> {
        let text = value.into();
        if text.is_empty() {
            return Err(MessageDomainError::EmptyText);
        }
        let length = text.chars().count();
        if length > MAX_TEXT_LENGTH {
            return Err(MessageDomainError::TextTooLong {
                max: MAX_TEXT_LENGTH,
                actual: length,
            });
        }
        Ok(Self(text))
    }

    /// Returns the text as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for MessageText {
    type Error = MessageDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MessageText> for String {
    fn from(value: MessageText) -> Self {
        value.0
    }
}

impl AsRef<str> for MessageText {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for MessageText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
