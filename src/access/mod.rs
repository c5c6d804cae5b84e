//! Access control for guestbook operations.
//!
//! Authorization is a pure predicate over the candidate record and the
//! caller's [`Session`]. Two disjoint standings grant write access:
//!
//! - **Creator**: the record has not been persisted yet, so whoever holds it
//!   may save it for the first time.
//! - **Admin**: the session carries the configured [`AdminSecret`].
//!
//! Reads are public. The [`AccessPolicy`] trait keeps the check swappable so
//! a real credential mechanism can replace [`SharedSecretPolicy`] without
//! touching the record store.

mod policy;
mod role;
mod secret;
mod session;

pub use policy::{AccessPolicy, SharedSecretPolicy};
pub use role::Role;
pub use secret::{AdminSecret, AdminSecretError};
pub use session::{SECRET_HEADER, Session};

#[cfg(test)]
mod tests;
