//! Unified error handling.
//!
//! Provides a unified `AppError` type for route handlers that can fail.
//! Server-side failures are captured to Sentry before responding; client
//! errors are only logged.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mock_github_core::NotFoundMessage;
use thiserror::Error;

use crate::store::StoreError;

/// Application-level error type for the mock server.
#[derive(Debug, Error)]
pub enum AppError {
    /// Issue lookup missed.
    #[error(transparent)]
    NotFound(#[from] StoreError),

    /// Issue number path parameter missing or not an integer.
    #[error("Malformed issue number: {0}")]
    MalformedIdentifier(String),

    /// A handler failed in a way the client cannot fix (e.g. a panic).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Clients parse this body the way they parse the real 404.
            Self::NotFound(StoreError::IssueNotFound(_)) => {
                (StatusCode::NOT_FOUND, Json(NotFoundMessage::issue())).into_response()
            }
            Self::MalformedIdentifier(_) => {
                tracing::debug!(error = %self, "Rejected request");
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
            Self::Internal(_) => {
                let event_id = sentry::capture_error(&self);
                tracing::error!(
                    error = %self,
                    sentry_event_id = %event_id,
                    "Request error"
                );
                // Don't expose internal details
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
