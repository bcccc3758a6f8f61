//! Helpers for driving the products router in-process or over TCP.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;
use storefront::api::create_router;
use storefront::api::handlers::AppState;
use storefront_core::config::RankingConfig;
use storefront_remote::SearchBackend;
use tower::ServiceExt;

/// Router over `backend` with default ranking and split error statuses.
pub fn router_for<B: SearchBackend>(backend: Arc<B>) -> Router {
    create_router(AppState::new(backend, RankingConfig::default(), false))
}

/// Router that reports every failure as a generic 500.
pub fn flattened_router_for<B: SearchBackend>(backend: Arc<B>) -> Router {
    create_router(AppState::new(backend, RankingConfig::default(), true))
}

/// Send one request through the router with `oneshot` and decode the JSON
/// response body (or `Value::Null` when it is not JSON).
pub async fn call(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub fn post_products(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/products")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub fn post_json(value: &Value) -> Request<Body> {
    post_products(serde_json::to_vec(value).unwrap())
}

/// Serve the router on an ephemeral port and return its base URL.
pub async fn spawn_app(router: Router) -> (SocketAddr, String) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    (addr, format!("http://{addr}"))
}
