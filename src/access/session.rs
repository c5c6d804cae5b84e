//! Per-request caller context.

use std::fmt;

/// Request header carrying the caller's session secret.
pub const SECRET_HEADER: &str = "x-guestbook-secret";

/// Ephemeral caller context used solely to evaluate admin standing.
///
/// A session is never persisted. On the server it lives for one request; a
/// client keeps its secret in local storage and presents it on every call.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Session {
    secret: Option<String>,
}

impl Session {
    /// Creates a session without a secret.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { secret: None }
    }

    /// Creates a session presenting `secret`.
    #[must_use]
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            secret: Some(secret.into()),
        }
    }

    /// Creates a session from an optional secret, treating an empty value as
    /// absent.
    #[must_use]
    pub fn from_optional(secret: Option<String>) -> Self {
        Self {
            secret: secret.filter(|value| !value.is_empty()),
        }
    }

    /// Returns the presented secret, if any.
    #[must_use]
    pub fn secret(&self) -> Option<&str> {
        self.secret.as_deref()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secret = if self.secret.is_some() {
            "<redacted>"
        } else {
            "<none>"
        };
        f.debug_struct("Session").field("secret", &secret).finish()
    }
}
