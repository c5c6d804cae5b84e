//! Shared world state for guestbook BDD scenarios.

use std::sync::Arc;

use guestbook::{
    access::{AdminSecret, SharedSecretPolicy},
    message::{
        adapters::memory::InMemoryMessageStore,
        domain::Message,
        services::{GuestbookResult, GuestbookService},
    },
};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestGuestbookService =
    GuestbookService<InMemoryMessageStore, SharedSecretPolicy, DefaultClock>;

/// Scenario world for guestbook behaviour tests.
pub struct GuestbookWorld {
    /// The guestbook service under test.
    pub service: TestGuestbookService,
    /// Last successfully posted message.
    pub last_posted: Option<Message>,
    /// Result of the last post attempt.
    pub last_post_result: Option<GuestbookResult<Message>>,
    /// Result of the last edit attempt.
    pub last_edit_result: Option<GuestbookResult<Message>>,
}

impl GuestbookWorld {
    /// Creates a world whose guestbook has no admin secret.
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: build_service(None),
            last_posted: None,
            last_post_result: None,
            last_edit_result: None,
        }
    }
}

impl Default for GuestbookWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> GuestbookWorld {
    GuestbookWorld::default()
}

/// Builds an empty guestbook checking sessions against `admin_secret`.
pub fn build_service(admin_secret: Option<AdminSecret>) -> TestGuestbookService {
    GuestbookService::new(
        Arc::new(InMemoryMessageStore::new()),
        Arc::new(SharedSecretPolicy::new(admin_secret)),
        Arc::new(DefaultClock),
    )
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
