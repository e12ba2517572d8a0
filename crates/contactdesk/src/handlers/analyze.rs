//! Customer message analysis handler.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::llm::{Assistant, LLMError};
use crate::prompt;
use crate::response;
use crate::server::AppState;
use crate::submission::Submission;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisResult {
    pub summary: String,
    pub reply: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/analyze
///
/// Reads the body leniently: a body that is not a JSON object is treated as
/// an empty submission and fails validation.
pub async fn analyze(State(state): State<AppState>, body: Bytes) -> Response {
    let submission = match Submission::from_json(&body) {
        Ok(submission) => submission,
        Err(e) => return response::bad_request(e.to_string()).into_response(),
    };

    match run_analysis(&state.assistant, &submission).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => {
            warn!(error = %e, model = %state.assistant.model(), "AI analysis failed");
            response::internal_error(format!("AI error: {e}")).into_response()
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Summary first, then reply. A failed summary skips the reply call.
async fn run_analysis(
    assistant: &Assistant,
    submission: &Submission,
) -> Result<AnalysisResult, LLMError> {
    let summary = assistant.complete(&prompt::summary_prompt(submission)).await?;
    debug!(chars = summary.len(), "Summary generated");

    let reply = assistant.complete(&prompt::reply_prompt(submission)).await?;
    debug!(chars = reply.len(), "Reply generated");

    Ok(AnalysisResult { summary, reply })
}
