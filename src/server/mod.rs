//! HTTP transport for the guestbook.
//!
//! Exposes the guestbook operations over JSON:
//!
//! - `GET /health`
//! - `GET /messages` lists messages (`fields`, `order`, `limit`, `contains`,
//!   `before` query parameters)
//! - `GET /messages/{id}` loads one message (`fields`)
//! - `POST /messages` creates a message
//! - `PUT /messages/{id}` edits a message's text
//!
//! The caller's session secret travels in the
//! [`SECRET_HEADER`](crate::access::SECRET_HEADER) request header.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;
pub use routes::build_router;
pub use state::{AppService, AppState};

#[cfg(test)]
mod tests;
