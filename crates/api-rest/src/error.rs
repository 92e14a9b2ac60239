//! HTTP error mapping.
//!
//! Every error response has the body `{"error": "<message>"}`. Validation
//! and not-found outcomes are ordinary return values carrying their own
//! message; anything unexpected takes the 500 path, where the message is
//! redacted in production mode.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use utoipa::ToSchema;

use notes_core::NotesError;

/// JSON body of every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable description of what went wrong.
    pub error: String,
}

/// Error type returned by every request handler.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed payload or path parameter (400).
    Validation(String),
    /// Unknown note id or unmatched route (404).
    NotFound(String),
    /// Anything unexpected (500). `expose` is false in production mode, in
    /// which case the message is replaced with a generic one.
    Internal { message: String, expose: bool },
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>, expose: bool) -> Self {
        ApiError::Internal {
            message: message.into(),
            expose,
        }
    }

    /// Maps a core error to its HTTP shape.
    ///
    /// Persistence errors never reach handlers (the service swallows them),
    /// so any remaining variant besides `InvalidInput` and `NotFound` is an
    /// unexpected failure.
    pub fn from_notes_error(err: NotesError, expose: bool) -> Self {
        match err {
            NotesError::InvalidInput(msg) => ApiError::Validation(msg),
            NotesError::NotFound(_) => ApiError::NotFound(err.to_string()),
            other => ApiError::internal(other.to_string(), expose),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::Internal { message, expose } => {
                tracing::error!(error = %message, "unhandled request error");
                let message = if expose {
                    message
                } else {
                    "Internal error".to_string()
                };
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
