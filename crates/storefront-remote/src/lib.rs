//! storefront-remote: HTTP adapters for storefront.
//!
//! [`transport::JsonClient`] is the shared JSON-over-HTTP client. On top of it,
//! [`index::VectorIndex`] implements [`SearchBackend`], the seam through which
//! the products endpoint reaches the hosted vector index.

pub mod error;
pub mod index;
pub mod transport;

pub use error::RemoteError;
pub use index::VectorIndex;
pub use transport::JsonClient;

use std::future::Future;
use storefront_core::{SearchHit, SearchRequest};

/// A nearest-neighbor search primitive over the product catalog.
///
/// Implemented by [`VectorIndex`] for the hosted index; tests substitute
/// in-process fakes.
pub trait SearchBackend: Send + Sync + 'static {
    /// Run one query and return the ranked hits, best first.
    fn query(
        &self,
        request: &SearchRequest,
    ) -> impl Future<Output = Result<Vec<SearchHit>, RemoteError>> + Send;
}
