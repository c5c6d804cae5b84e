//! Port contracts for message persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the guestbook
//! service, so a durable store can replace the in-memory table without
//! changing the service or the access policy.

pub mod repository;

pub use repository::{MessageRepository, MessageStoreError, MessageStoreResult};
