//! Roles resolved for a caller against a record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Standing a caller holds with respect to a particular record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// The record is new and the caller is saving it for the first time.
    Creator,
    /// The caller presented the configured admin secret.
    Admin,
}

impl Role {
    /// Returns the canonical name of the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Creator => "creator",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
