#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, Request, StatusCode, header};
use axum::routing::post;
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::Value;
use tokio::net::TcpListener;
use tower::ServiceExt;

use contactdesk::llm::{Assistant, OpenAICompatibleProvider, build_http_client};
use contactdesk::server::{AppState, build_app};

/// A request the fake provider received.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct UpstreamState {
    replies: Arc<Mutex<VecDeque<(StatusCode, String)>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Local stand-in for an OpenAI-compatible chat-completion API.
pub struct FakeProvider {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeProvider {
    pub async fn start(replies: Vec<(StatusCode, String)>) -> Self {
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

        Self {
            base_url: format!("http://{addr}/v1"),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Build the service router wired to this provider.
    pub fn app(&self, api_key: &str, model: &str) -> Router {
        let provider = OpenAICompatibleProvider::new(
            build_http_client().unwrap(),
            self.base_url.clone(),
            api_key,
        );
        let state = AppState {
            assistant: Assistant::new(Some(Arc::new(provider)), model),
        };
        build_app(state, 60)
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

/// A 200 completion body whose first choice carries `content`.
pub fn completion(content: &str) -> (StatusCode, String) {
    let body = serde_json::json!({
        "id": "chatcmpl-test",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    });
    (StatusCode::OK, body.to_string())
}

pub async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}
