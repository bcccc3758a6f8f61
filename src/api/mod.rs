//! HTTP API: the products endpoint that sits on the trust boundary.

pub mod errors;
pub mod handlers;

use axum::routing::{get, post};
use axum::Router;
use handlers::AppState;
use storefront_remote::SearchBackend;

pub use errors::ApiError;

/// Build the router for a given search backend.
pub fn create_router<B: SearchBackend>(state: AppState<B>) -> Router {
    Router::new()
        .route("/api/products", post(handlers::products::<B>))
        .route("/healthz", get(handlers::health))
        .with_state(state)
}
