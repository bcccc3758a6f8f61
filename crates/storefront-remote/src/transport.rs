//! JSON-over-HTTP transport built on the hyper-util legacy client.
//!
//! One [`JsonClient`] is created per process and cloned where needed; clones
//! share the underlying connection pool.

use crate::error::RemoteError;
use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::header::{HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use hyper::{Method, Request, Uri};
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;

#[derive(Clone)]
pub struct JsonClient {
    inner: Client<HttpConnector, Full<Bytes>>,
    timeout: Duration,
}

impl JsonClient {
    /// Every exchange (connect, send, read body) is bounded by `timeout`.
    pub fn new(timeout: Duration) -> Self {
        let inner = Client::builder(TokioExecutor::new()).build_http();
        Self { inner, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// POST `body` as JSON to `url` and decode a JSON response.
    ///
    /// Non-2xx responses become [`RemoteError::Status`] carrying the raw body
    /// text so callers can extract service-specific error messages.
    pub async fn post_json<Req, Resp>(
        &self,
        url: &str,
        bearer: Option<&str>,
        body: &Req,
    ) -> Result<Resp, RemoteError>
    where
        Req: Serialize + Sync + ?Sized,
        Resp: DeserializeOwned,
    {
        let uri: Uri = url.parse().map_err(|source| RemoteError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        let payload = serde_json::to_vec(body).map_err(RemoteError::Encode)?;

        let mut builder = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .header(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = bearer {
            builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = builder.body(Full::new(Bytes::from(payload)))?;

        tracing::trace!(url, "POST");
        let exchange = async {
            let response = self.inner.request(request).await?;
            let status = response.status();
            let bytes = response.into_body().collect().await?.to_bytes();
            Ok::<_, RemoteError>((status, bytes))
        };
        let (status, bytes) = tokio::time::timeout(self.timeout, exchange)
            .await
            .map_err(|_| RemoteError::Timeout(self.timeout))??;

        if !status.is_success() {
            return Err(RemoteError::Status {
                status,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        serde_json::from_slice(&bytes).map_err(RemoteError::Decode)
    }
}
