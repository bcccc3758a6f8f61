//! Client for the hosted vector index.
//!
//! Speaks the index's REST dialect: `POST {url}/query` with
//! `{ topK, vector, includeMetadata, filter? }`, answered by
//! `{ "result": [ { id, score, metadata? }, … ] }`.

use crate::error::RemoteError;
use crate::transport::JsonClient;
use crate::SearchBackend;
use serde::Deserialize;
use std::time::Duration;
use storefront_core::config::IndexConfig;
use storefront_core::{SearchHit, SearchRequest};

#[derive(Debug, Deserialize)]
struct QueryResponse {
    result: Vec<SearchHit>,
}

#[derive(Clone)]
pub struct VectorIndex {
    client: JsonClient,
    query_url: String,
    token: Option<String>,
}

impl VectorIndex {
    pub fn new(cfg: &IndexConfig) -> Self {
        let client = JsonClient::new(Duration::from_millis(cfg.timeout_ms));
        Self::with_client(client, &cfg.url, &cfg.token)
    }

    pub fn with_client(client: JsonClient, base_url: &str, token: &str) -> Self {
        Self {
            client,
            query_url: format!("{}/query", base_url.trim_end_matches('/')),
            token: (!token.is_empty()).then(|| token.to_string()),
        }
    }

    pub fn query_url(&self) -> &str {
        &self.query_url
    }
}

impl SearchBackend for VectorIndex {
    async fn query(&self, request: &SearchRequest) -> Result<Vec<SearchHit>, RemoteError> {
        tracing::debug!(
            top_k = request.result_limit,
            vector = ?request.ranking_vector,
            filter = request.predicate.as_deref().unwrap_or("<none>"),
            "querying vector index"
        );
        let response: QueryResponse = self
            .client
            .post_json(&self.query_url, self.token.as_deref(), request)
            .await?;
        tracing::debug!(hits = response.result.len(), "vector index answered");
        Ok(response.result)
    }
}
