use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::timeout::TimeoutLayer;

use crate::handlers;
use crate::llm::Assistant;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub assistant: Assistant,
}

pub fn build_app(state: AppState, request_timeout_secs: u64) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/livez", get(handlers::livez))
        .route("/readyz", get(handlers::readyz))
        .route("/api/analyze", post(handlers::analyze))
        .with_state(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(request_timeout_secs),
        ))
}
