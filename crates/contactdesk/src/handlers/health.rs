use axum::extract::State;
use axum::http::StatusCode;

use crate::server::AppState;

pub async fn livez() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}

/// Not ready until a provider credential is configured.
pub async fn readyz(State(state): State<AppState>) -> (StatusCode, &'static str) {
    if state.assistant.is_configured() {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "no AI provider configured")
    }
}
