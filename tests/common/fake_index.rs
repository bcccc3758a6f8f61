//! Fake vector index served over real HTTP.
//!
//! Listens on an ephemeral port and implements `POST /query`, capturing the
//! `Authorization` header and JSON body of every call. The response is
//! configurable per instance.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use storefront_core::SearchHit;
use tokio::sync::Mutex;

#[derive(Debug, Clone)]
pub struct CapturedQuery {
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct FakeIndexState {
    status: StatusCode,
    response: Value,
    captured: Arc<Mutex<Vec<CapturedQuery>>>,
}

pub struct FakeIndex {
    pub addr: SocketAddr,
    captured: Arc<Mutex<Vec<CapturedQuery>>>,
}

impl FakeIndex {
    /// Serve `{ "result": hits }` with 200 for every query.
    pub async fn answering(hits: &[SearchHit]) -> Self {
        Self::spawn(StatusCode::OK, json!({ "result": hits })).await
    }

    /// Serve the given status and raw JSON body for every query.
    pub async fn spawn(status: StatusCode, response: Value) -> Self {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let state = FakeIndexState { status, response, captured: captured.clone() };
        let router = Router::new().route("/query", post(handle_query)).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self { addr, captured }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn captured(&self) -> Vec<CapturedQuery> {
        self.captured.lock().await.clone()
    }
}

async fn handle_query(
    State(state): State<FakeIndexState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let authorization = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.captured.lock().await.push(CapturedQuery { authorization, body });
    (state.status, Json(state.response.clone()))
}
