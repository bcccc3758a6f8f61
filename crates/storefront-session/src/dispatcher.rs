//! Query dispatcher: ties facet transitions to debounced product queries.
//!
//! ```text
//! apply(event) ──► FacetStore ──► Debouncer::schedule ──(quiet)──► dispatch ──► QueryCache
//! refetch()    ───────────────────────────────────────────────────► dispatch ──► QueryCache
//! ```
//!
//! Every dispatch is one round trip through [`ProductsApi`]. Results are
//! applied in issue order, never completion order.

use crate::cache::QueryCache;
use crate::client::ProductsApi;
use crate::debounce::Debouncer;
use crate::facets::{FacetEvent, FacetSelection, FacetStore};
use std::sync::Arc;
use std::time::Duration;
use storefront_core::ProductFilter;
use tokio::task::JoinHandle;

pub struct Dispatcher<A: ProductsApi> {
    store: FacetStore,
    api: Arc<A>,
    cache: Arc<QueryCache>,
    debouncer: Debouncer,
}

impl<A: ProductsApi> Dispatcher<A> {
    /// Start from the default selection.
    pub fn new(api: Arc<A>, cache: Arc<QueryCache>, quiet: Duration) -> Self {
        Self::with_selection(api, cache, quiet, FacetSelection::default())
    }

    pub fn with_selection(
        api: Arc<A>,
        cache: Arc<QueryCache>,
        quiet: Duration,
        initial: FacetSelection,
    ) -> Self {
        Self {
            store: FacetStore::new(initial),
            api,
            cache,
            debouncer: Debouncer::new(quiet),
        }
    }

    pub fn selection(&self) -> &FacetSelection {
        self.store.snapshot()
    }

    pub fn cache(&self) -> &Arc<QueryCache> {
        &self.cache
    }

    /// Apply a facet transition and schedule a debounced re-query.
    pub fn apply(&mut self, event: FacetEvent) -> FacetSelection {
        let snapshot = self.store.apply(event);
        self.schedule_refetch();
        snapshot
    }

    /// Re-query after the quiet interval, replacing any re-query still waiting.
    pub fn schedule_refetch(&mut self) {
        let filter = self.store.snapshot().to_filter();
        let api = self.api.clone();
        let cache = self.cache.clone();
        tracing::debug!(quiet = ?self.debouncer.quiet(), "re-query scheduled");
        self.debouncer.schedule(move || async move {
            let seq = cache.issue();
            dispatch(api, cache, seq, filter).await;
        });
    }

    /// Query now with the current selection. Cancels any waiting re-query,
    /// since this one already reflects the latest state.
    pub fn refetch(&mut self) -> JoinHandle<()> {
        if self.debouncer.cancel_pending() {
            tracing::debug!("pending re-query folded into immediate refetch");
        }
        let filter = self.store.snapshot().to_filter();
        let seq = self.cache.issue();
        tokio::spawn(dispatch(self.api.clone(), self.cache.clone(), seq, filter))
    }

    pub fn cancel_pending(&mut self) -> bool {
        self.debouncer.cancel_pending()
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }
}

async fn dispatch<A: ProductsApi>(api: Arc<A>, cache: Arc<QueryCache>, seq: u64, filter: ProductFilter) {
    tracing::debug!(seq, ?filter, "dispatching products query");
    match api.search(&filter).await {
        Ok(hits) => {
            let count = hits.len();
            if cache.apply(seq, hits) {
                tracing::info!(seq, count, "results updated");
            } else {
                tracing::debug!(seq, "superseded result discarded");
            }
        }
        Err(err) => {
            tracing::warn!(seq, error = %err, "products query failed; keeping previous results");
        }
    }
}
