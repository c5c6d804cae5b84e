//! Shared application state for request handlers.

use super::ServerConfig;
use crate::access::SharedSecretPolicy;
use crate::message::{adapters::memory::InMemoryMessageStore, services::GuestbookService};
use mockable::DefaultClock;
use std::sync::Arc;

/// Guestbook service wired to the in-memory store and shared-secret policy.
pub type AppService = GuestbookService<InMemoryMessageStore, SharedSecretPolicy, DefaultClock>;

/// State cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    /// The guestbook operations.
    pub service: AppService,
}

impl AppState {
    /// Creates state around an existing service.
    #[must_use]
    pub const fn new(service: AppService) -> Self {
        Self { service }
    }

    /// Creates state with an empty store and the configured admin secret.
    #[must_use]
    pub fn from_config(config: &ServerConfig) -> Self {
        let policy = SharedSecretPolicy::new(config.admin_secret.clone());
        Self::new(GuestbookService::new(
            Arc::new(InMemoryMessageStore::new()),
            Arc::new(policy),
            Arc::new(DefaultClock),
        ))
    }
}
