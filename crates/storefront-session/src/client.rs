//! Products endpoint client.
//!
//! [`ProductsApi`] is the dispatcher's view of the server; [`HttpProductsApi`]
//! is the real implementation posting to `/api/products`.

use serde::Deserialize;
use std::future::Future;
use std::time::Duration;
use storefront_core::{ProductFilter, ProductsRequest, SearchHit};
use storefront_remote::{JsonClient, RemoteError};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server answered with an error status and a `{ message }` body.
    #[error("server rejected the query ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error(transparent)]
    Remote(RemoteError),
}

impl From<RemoteError> for ClientError {
    fn from(err: RemoteError) -> Self {
        #[derive(Deserialize)]
        struct ErrorBody {
            message: String,
        }

        match err {
            RemoteError::Status { status, body } => {
                match serde_json::from_str::<ErrorBody>(&body) {
                    Ok(parsed) => ClientError::Rejected {
                        status: status.as_u16(),
                        message: parsed.message,
                    },
                    Err(_) => ClientError::Remote(RemoteError::Status { status, body }),
                }
            }
            other => ClientError::Remote(other),
        }
    }
}

/// Source of ranked products for a filter.
pub trait ProductsApi: Send + Sync + 'static {
    fn search(
        &self,
        filter: &ProductFilter,
    ) -> impl Future<Output = Result<Vec<SearchHit>, ClientError>> + Send;
}

#[derive(Clone)]
pub struct HttpProductsApi {
    client: JsonClient,
    endpoint: String,
}

impl HttpProductsApi {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            client: JsonClient::new(timeout),
            endpoint: format!("{}/api/products", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ProductsApi for HttpProductsApi {
    async fn search(&self, filter: &ProductFilter) -> Result<Vec<SearchHit>, ClientError> {
        let body = ProductsRequest { filter: filter.clone() };
        let hits = self.client.post_json(&self.endpoint, None, &body).await?;
        Ok(hits)
    }
}
