//! Test doubles for provider calls.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::extract::State;
use axum::{Json, Router};
use axum::http::{HeaderMap, StatusCode, header};
use axum::routing::post;
use serde_json::Value;
use tokio::net::TcpListener;

use super::error::LLMError;
use super::provider::LLMProvider;
use super::types::{ChatRequest, ChatResponse};

// ============================================================================
// ScriptedProvider
// ============================================================================

/// In-process provider that answers from a queue and records every request.
#[derive(Default)]
pub(crate) struct ScriptedProvider {
    replies: Mutex<VecDeque<Result<ChatResponse, LLMError>>>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedProvider {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queue a completion whose first choice carries `content`.
    pub(crate) fn reply(self, content: &str) -> Self {
        let body = serde_json::json!({ "choices": [{ "message": { "content": content } }] });
        self.raw(&body.to_string())
    }

    /// Queue a completion parsed from a raw JSON body.
    pub(crate) fn raw(self, body: &str) -> Self {
        let response = serde_json::from_str(body).expect("scripted body must parse");
        self.replies.lock().unwrap().push_back(Ok(response));
        self
    }

    pub(crate) fn fail(self, err: LLMError) -> Self {
        self.replies.lock().unwrap().push_back(Err(err));
        self
    }

    pub(crate) fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LLMProvider for ScriptedProvider {
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, LLMError> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(LLMError::MalformedResponse("no scripted reply".to_string())))
    }
}

// ============================================================================
// Upstream HTTP server
// ============================================================================

#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct UpstreamState {
    replies: Arc<Mutex<VecDeque<(StatusCode, String)>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// A local chat-completion endpoint answering from a fixed script.
pub(crate) struct Upstream {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl Upstream {
    pub(crate) fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

pub(crate) async fn spawn_upstream(replies: Vec<(StatusCode, String)>) -> Upstream {
    let state = UpstreamState {
        replies: Arc::new(Mutex::new(replies.into())),
        requests: Arc::new(Mutex::new(Vec::new())),
    };
    let requests = state.requests.clone();

    let app = Router::new()
        .route("/v1/chat/completions", post(record))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Upstream {
        base_url: format!("http://{addr}/v1"),
        requests,
    }
}

async fn record(
    State(state): State<UpstreamState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, String) {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state
        .requests
        .lock()
        .unwrap()
        .push(RecordedRequest { authorization, body });

    let next = state.replies.lock().unwrap().pop_front();
    next.unwrap_or((StatusCode::INTERNAL_SERVER_ERROR, "no scripted reply".to_string()))
}
