//! Domain model for guestbook messages.
//!
//! A [`Message`] is the in-memory candidate a client edits; it has no
//! identifier until the store persists it. A [`MessageRecord`] is the
//! persisted row, whose text is always a validated [`MessageText`].

mod error;
mod ids;
mod message;
mod projection;
mod query;
mod text;

pub use error::MessageDomainError;
pub use ids::MessageId;
pub use message::{Message, MessageRecord};
pub use projection::{MessageField, MessageFields, ProjectedMessage};
pub use query::{DEFAULT_LIMIT, MAX_LIMIT, MessageFilter, MessageQuery, SortOrder};
pub use text::{MAX_TEXT_LENGTH, MessageText};
