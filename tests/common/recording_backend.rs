//! In-process [`SearchBackend`] that records every compiled request.
//!
//! Used by the API harness to assert on exactly what the products endpoint
//! forwards to the index, without any network.

use axum::http::StatusCode;
use std::sync::Mutex;
use storefront_core::{SearchHit, SearchRequest};
use storefront_remote::{RemoteError, SearchBackend};

#[derive(Default)]
pub struct RecordingBackend {
    hits: Vec<SearchHit>,
    failing: bool,
    requests: Mutex<Vec<SearchRequest>>,
}

impl RecordingBackend {
    /// A backend that answers every query with `hits`.
    pub fn answering(hits: Vec<SearchHit>) -> Self {
        Self { hits, ..Self::default() }
    }

    /// A backend whose every query fails as if the index were down.
    pub fn failing() -> Self {
        Self { failing: true, ..Self::default() }
    }

    pub fn requests(&self) -> Vec<SearchRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The single request received. Panics if there were zero or several.
    pub fn only_request(&self) -> SearchRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one backend query: {requests:?}");
        requests.into_iter().next().unwrap()
    }
}

impl SearchBackend for RecordingBackend {
    async fn query(&self, request: &SearchRequest) -> Result<Vec<SearchHit>, RemoteError> {
        self.requests.lock().unwrap().push(request.clone());
        if self.failing {
            return Err(RemoteError::Status {
                status: StatusCode::SERVICE_UNAVAILABLE,
                body: "index token expired".to_string(),
            });
        }
        Ok(self.hits.clone())
    }
}
