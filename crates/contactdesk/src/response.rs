//! JSON error responses.

use axum::Json;
use axum::http::StatusCode;
use serde::Serialize;

/// Body of every error response: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

fn error(status: StatusCode, message: impl Into<String>) -> (StatusCode, Json<ErrorBody>) {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
}

pub fn bad_request(message: impl Into<String>) -> (StatusCode, Json<ErrorBody>) {
    error(StatusCode::BAD_REQUEST, message)
}

pub fn internal_error(message: impl Into<String>) -> (StatusCode, Json<ErrorBody>) {
    error(StatusCode::INTERNAL_SERVER_ERROR, message)
}
