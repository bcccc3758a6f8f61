//! HTTP request handlers and shared application state.

use crate::api::errors::ApiError;
use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use std::sync::Arc;
use storefront_core::config::RankingConfig;
use storefront_core::validator::{self, ValidationError};
use storefront_core::{ranking, SearchHit};
use storefront_remote::SearchBackend;

/// Shared application state passed to every handler via Axum's `State` extractor.
pub struct AppState<B> {
    pub backend: Arc<B>,
    pub ranking: Arc<RankingConfig>,
    /// Report validation failures as 500 instead of 400.
    pub flatten_errors: bool,
}

impl<B> AppState<B> {
    pub fn new(backend: Arc<B>, ranking: RankingConfig, flatten_errors: bool) -> Self {
        Self { backend, ranking: Arc::new(ranking), flatten_errors }
    }
}

impl<B> Clone for AppState<B> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
            ranking: self.ranking.clone(),
            flatten_errors: self.flatten_errors,
        }
    }
}

/// `GET /healthz`
pub async fn health() -> &'static str {
    "ok"
}

/// `POST /api/products`
///
/// Validates the body, compiles the filter and ranking vector, and returns the
/// index's hits unchanged.
pub async fn products<B: SearchBackend>(
    State(state): State<AppState<B>>,
    body: Bytes,
) -> Result<Json<Vec<SearchHit>>, ApiError> {
    match search(&state, &body).await {
        Ok(hits) => Ok(Json(hits)),
        Err(err) => {
            tracing::warn!(status = %err.status(), error = ?err, "products request failed");
            Err(if state.flatten_errors { err.flattened() } else { err })
        }
    }
}

async fn search<B: SearchBackend>(state: &AppState<B>, body: &[u8]) -> Result<Vec<SearchHit>, ApiError> {
    let payload: serde_json::Value =
        serde_json::from_slice(body).map_err(|e| ValidationError::malformed(&e))?;
    let filter = validator::validate_request(&payload)?;

    let request = ranking::search_request(&filter, &state.ranking);
    tracing::debug!(
        sort = %filter.sort,
        predicate = request.predicate.as_deref().unwrap_or("<none>"),
        "compiled products query"
    );

    let hits = state.backend.query(&request).await?;
    tracing::info!(hits = hits.len(), "products query served");
    Ok(hits)
}
