//! Configured administrative secret.

use sha2::{Digest, Sha256};
use std::fmt;
use thiserror::Error;

/// Errors returned while constructing an [`AdminSecret`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AdminSecretError {
    /// The configured secret is empty.
    #[error("admin secret must not be empty")]
    Empty,
}

/// Shared secret that grants admin standing to any caller presenting it.
///
/// Only the SHA-256 digest of the configured value is retained, and
/// candidates are compared digest to digest.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminSecret {
    digest: [u8; 32],
}

impl AdminSecret {
    /// Creates an admin secret from its configured value.
    ///
    /// # Errors
    ///
    /// Returns [`AdminSecretError::Empty`] when the value is empty.
    pub fn new(value: impl AsRef<str>) -> Result<Self, AdminSecretError> {
        let raw = value.as_ref();
        if raw.is_empty() {
            return Err(AdminSecretError::Empty);
        }
        Ok(Self {
            digest: digest_of(raw),
        })
    }

    /// Returns whether `candidate` equals the configured secret exactly.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        if candidate.is_empty() {
            return false;
        }
        let other = digest_of(candidate);
        self.digest
            .iter()
            .zip(other.iter())
            .fold(0_u8, |acc, (left, right)| acc | (left ^ right))
            == 0
    }
}

impl fmt::Debug for AdminSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AdminSecret(<redacted>)")
    }
}

fn digest_of(value: &str) -> [u8; 32] {
    Sha256::digest(value.as_bytes()).into()
}
