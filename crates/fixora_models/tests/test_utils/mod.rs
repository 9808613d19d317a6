//! Test utilities for Gemini client tests.
//!
//! Provides a throwaway axum server that answers with a canned response and
//! reports the first request it received.

#![allow(dead_code)]

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use fixora_core::GenerateRequest;
use serde_json::json;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// A request as seen by [`OneShotServer`].
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: String,
}

impl CapturedRequest {
    /// Header value by name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Body parsed as JSON.
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is JSON")
    }
}

#[derive(Clone)]
struct ServerState {
    status: StatusCode,
    body: String,
    sender: Arc<Mutex<Option<oneshot::Sender<CapturedRequest>>>>,
}

async fn capture(
    State(state): State<ServerState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    let captured = CapturedRequest {
        method,
        path: uri.path().to_string(),
        headers,
        body,
    };
    if let Some(sender) = state.sender.lock().expect("sender lock").take() {
        let _ = sender.send(captured);
    }
    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body,
    )
}

/// Local server answering requests with a canned response and reporting
/// the first one it received.
pub struct OneShotServer {
    /// Base URL to hand to `GeminiClient::with_base_url`
    pub base_url: String,
    receiver: oneshot::Receiver<CapturedRequest>,
    handle: JoinHandle<()>,
}

impl OneShotServer {
    /// Start a server that replies with `status` and `body`.
    pub async fn start(status: u16, body: impl Into<String>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("listener address");

        let (sender, receiver) = oneshot::channel();
        let state = ServerState {
            status: StatusCode::from_u16(status).expect("valid status code"),
            body: body.into(),
            sender: Arc::new(Mutex::new(Some(sender))),
        };
        let app = Router::new().fallback(capture).with_state(state);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve test app");
        });

        Self {
            base_url: format!("http://{addr}/v1beta"),
            receiver,
            handle,
        }
    }

    /// Wait for the served request.
    pub async fn captured(mut self) -> CapturedRequest {
        (&mut self.receiver).await.expect("request captured")
    }
}

impl Drop for OneShotServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// A `generateContent` success body whose first candidate says `text`.
pub fn candidate_body(text: &str) -> String {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }],
        "usageMetadata": { "promptTokenCount": 100, "candidatesTokenCount": 50, "totalTokenCount": 150 }
    })
    .to_string()
}

/// Small JSON-output request.
pub fn test_request(model: Option<&str>) -> GenerateRequest {
    GenerateRequest::new(
        "You are a script writer.",
        "Create a short video concept based on the following idea: \"a dog learns to surf\"",
        json!({
            "type": "OBJECT",
            "properties": { "style": { "type": "STRING" } },
            "required": ["style"]
        }),
    )
    .with_model(model.map(str::to_string))
}
