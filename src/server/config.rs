//! Server configuration, loaded from environment variables at startup.

use crate::access::AdminSecret;
use std::net::{AddrParseError, SocketAddr};
use thiserror::Error;

/// Address the server binds when `GUESTBOOK_BIND` is unset.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3210";

const BIND_VAR: &str = "GUESTBOOK_BIND";
const ADMIN_SECRET_VAR: &str = "ADMIN_SECRET";
const LOG_VAR: &str = "GUESTBOOK_LOG";
const LOG_JSON_VAR: &str = "GUESTBOOK_LOG_JSON";
const CORS_ORIGINS_VAR: &str = "GUESTBOOK_CORS_ORIGINS";

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The bind address is not a valid socket address.
    #[error("GUESTBOOK_BIND='{value}' is not a valid socket address: {source}")]
    InvalidBindAddress {
        /// The rejected value.
        value: String,
        /// Parse failure.
        #[source]
        source: AddrParseError,
    },
}

/// Runtime configuration for the guestbook server.
///
/// Every field has a default so the server starts without any environment
/// variables set. Without `ADMIN_SECRET`, existing messages cannot be edited.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP address to bind.
    pub bind_address: SocketAddr,
    /// Shared secret granting admin standing.
    pub admin_secret: Option<AdminSecret>,
    /// `tracing` filter string, e.g. `"info"` or `"debug,tower_http=warn"`.
    pub log_level: String,
    /// Emit log records as newline-delimited JSON.
    pub log_json: bool,
    /// Origins allowed by CORS; `None` allows any origin.
    pub cors_allowed_origins: Option<Vec<String>>,
}

impl ServerConfig {
    /// Builds the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBindAddress`] when `GUESTBOOK_BIND` does
    /// not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBindAddress`] when the bind address does
    /// not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_bind = lookup(BIND_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_owned());
        let bind_address = raw_bind
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddress {
                value: raw_bind.clone(),
                source,
            })?;

        let admin_secret = lookup(ADMIN_SECRET_VAR).and_then(|value| AdminSecret::new(value).ok());
        let log_level = lookup(LOG_VAR).unwrap_or_else(|| "info".to_owned());
        let log_json = lookup(LOG_JSON_VAR)
            .is_some_and(|value| value == "1" || value.eq_ignore_ascii_case("true"));
        let cors_allowed_origins = lookup(CORS_ORIGINS_VAR)
            .map(|list| {
                list.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_owned)
                    .collect::<Vec<_>>()
            })
            .filter(|origins| !origins.is_empty());

        Ok(Self {
            bind_address,
            admin_secret,
            log_level,
            log_json,
            cors_allowed_origins,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([0, 0, 0, 0], 3210)),
            admin_secret: None,
            log_level: "info".to_owned(),
            log_json: false,
            cors_allowed_origins: None,
        }
    }
}
