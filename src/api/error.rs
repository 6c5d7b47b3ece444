//! HTTP error taxonomy and response bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Error response body, `{"error": "..."}` on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    pub error: String,
}

/// Application error type for HTTP handlers.
///
/// Every failure surfaces directly to the caller as a status code plus a
/// minimal JSON body; nothing is retried or recovered internally.
#[derive(Debug)]
pub enum AppError {
    /// No credential presented
    Unauthorized(String),
    /// Credential presented but wrong
    Forbidden(String),
    /// Malformed input (bad machine number, missing code)
    BadRequest(String),
    /// Upstream answered with an unexpected payload shape
    Unavailable(String),
    /// Upstream unreachable or the OAuth exchange failed
    Upstream(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Unavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            AppError::Upstream(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(ApiError { error: message })).into_response()
    }
}
