//! Errors raised while talking to a remote HTTP service.

use hyper::StatusCode;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("invalid endpoint URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: hyper::http::uri::InvalidUri,
    },

    #[error("could not build request: {0}")]
    Request(#[from] hyper::http::Error),

    #[error("connection failed: {0}")]
    Connect(#[from] hyper_util::client::legacy::Error),

    #[error("failed reading response body: {0}")]
    Body(#[from] hyper::Error),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("remote returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("could not encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("could not decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}
