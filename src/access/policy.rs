//! Authorization predicates for guestbook operations.

use super::{AdminSecret, Role, Session};
use crate::message::domain::Message;

/// Decides, per operation, whether a caller may proceed.
///
/// Every predicate is side-effect free and degrades to `false` when the
/// session lacks the state it needs.
pub trait AccessPolicy: Send + Sync {
    /// Returns whether the caller has creator standing for `candidate`.
    fn can_create(&self, candidate: &Message) -> bool;

    /// Returns whether the caller holds admin standing.
    fn is_admin(&self, session: &Session) -> bool;

    /// Returns whether `message` may be saved by the caller.
    fn can_save(&self, message: &Message, session: &Session) -> bool {
        self.can_create(message) || self.is_admin(session)
    }

    /// Returns whether the caller may list messages.
    fn can_find(&self, _session: &Session) -> bool {
        true
    }

    /// Returns whether the caller may load a single message.
    fn can_load(&self, _session: &Session) -> bool {
        true
    }

    /// Resolves every role the caller holds for `message`.
    fn roles(&self, message: &Message, session: &Session) -> Vec<Role> {
        let mut roles = Vec::with_capacity(2);
        if self.can_create(message) {
            roles.push(Role::Creator);
        }
        if self.is_admin(session) {
            roles.push(Role::Admin);
        }
        roles
    }
}

/// Policy granting creator standing to unsaved records and admin standing to
/// holders of a shared secret.
///
/// Creator standing is inferred from the record having no identifier, so any
/// caller may claim it for a brand-new record. Admin standing is never granted
/// when no secret is configured.
#[derive(Debug, Clone, Default)]
pub struct SharedSecretPolicy {
    admin_secret: Option<AdminSecret>,
}

impl SharedSecretPolicy {
    /// Creates a policy checking sessions against `admin_secret`.
    #[must_use]
    pub const fn new(admin_secret: Option<AdminSecret>) -> Self {
        Self { admin_secret }
    }

    /// Creates a policy under which nobody holds admin standing.
    #[must_use]
    pub const fn without_admin() -> Self {
        Self { admin_secret: None }
    }

    /// Returns whether an admin secret is configured.
    #[must_use]
    pub const fn has_admin_secret(&self) -> bool {
        self.admin_secret.is_some()
    }
}

impl AccessPolicy for SharedSecretPolicy {
    fn can_create(&self, candidate: &Message) -> bool {
        candidate.is_new()
    }

    fn is_admin(&self, session: &Session) -> bool {
        match (&self.admin_secret, session.secret()) {
            (Some(expected), Some(presented)) => expected.matches(presented),
            _ => false,
        }
    }
}
