//! Mapping of guestbook errors onto HTTP responses.
//!
//! Handlers return `Result<T, ApiError>`. Client-facing failures carry their
//! message; repository failures are logged in full and answered with a
//! generic message so internal detail never reaches the caller.

use crate::message::services::GuestbookError;
use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// All errors a guestbook handler can return.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Propagated from the guestbook service.
    #[error(transparent)]
    Guestbook(#[from] GuestbookError),

    /// The request's query, path, or body could not be interpreted.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The path names an identifier no message can have.
    #[error("message not found: {0}")]
    UnknownId(String),
}

impl ApiError {
    /// Returns the status code and machine-readable kind for this error.
    #[must_use]
    pub const fn classify(&self) -> (StatusCode, &'static str) {
        match self {
            Self::Guestbook(GuestbookError::Validation(_)) => {
                (StatusCode::BAD_REQUEST, "validation")
            }
            Self::Guestbook(GuestbookError::Authorization { .. }) => {
                (StatusCode::FORBIDDEN, "authorization")
            }
            Self::Guestbook(GuestbookError::NotFound(_)) | Self::UnknownId(_) => {
                (StatusCode::NOT_FOUND, "not_found")
            }
            Self::Guestbook(GuestbookError::Repository(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal")
            }
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind) = self.classify();
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(error = %self, "guestbook request failed");
            "internal server error".to_owned()
        } else {
            self.to_string()
        };
        (status, Json(json!({ "error": kind, "message": message }))).into_response()
    }
}
