//! Guestbook messages: the record store bounded context.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use guestbook::access::{Session, SharedSecretPolicy};
//! use guestbook::message::{
//!     adapters::memory::InMemoryMessageStore, domain::Message, services::GuestbookService,
//! };
//! use mockable::DefaultClock;
//!
//! # tokio::runtime::Builder::new_current_thread().build().map(|rt| rt.block_on(async {
//! let service = GuestbookService::new(
//!     Arc::new(InMemoryMessageStore::new()),
//!     Arc::new(SharedSecretPolicy::without_admin()),
//!     Arc::new(DefaultClock),
//! );
//! let saved = service
//!     .save(&Message::new("Hello!"), &Session::anonymous())
//!     .await;
//! assert!(saved.is_ok_and(|message| message.id().is_some()));
//! # }))?;
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
