//! Request cache: the latest authoritative result set for a session.
//!
//! One `QueryCache` is created when a session starts and shared (`Arc`) with
//! everything that issues queries. Each dispatch takes an issue number from
//! [`QueryCache::issue`] before it goes out; [`QueryCache::apply`] only
//! accepts a result whose issue number is newer than the one on display. The
//! previous result stays visible while newer requests are in flight and after
//! they fail.

use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use storefront_core::SearchHit;
use tokio::sync::watch;

/// A result set together with the issue number of the request that produced it.
#[derive(Debug, Clone)]
pub struct ResultSnapshot {
    pub seq: u64,
    pub hits: Arc<Vec<SearchHit>>,
    pub fetched_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct QueryCache {
    issued: AtomicU64,
    latest: watch::Sender<Option<ResultSnapshot>>,
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryCache {
    pub fn new() -> Self {
        let (latest, _) = watch::channel(None);
        Self { issued: AtomicU64::new(0), latest }
    }

    /// Reserve the next issue number. Numbers start at 1 and never repeat.
    pub fn issue(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn last_issued(&self) -> u64 {
        self.issued.load(Ordering::SeqCst)
    }

    /// Store `hits` if `seq` is newer than the displayed result.
    /// Returns `false` when the result was superseded and discarded.
    pub fn apply(&self, seq: u64, hits: Vec<SearchHit>) -> bool {
        self.latest.send_if_modified(|slot| {
            if slot.as_ref().is_some_and(|current| current.seq >= seq) {
                return false;
            }
            *slot = Some(ResultSnapshot {
                seq,
                hits: Arc::new(hits),
                fetched_at: Utc::now(),
            });
            true
        })
    }

    /// The result currently on display, if any request has succeeded yet.
    pub fn latest(&self) -> Option<ResultSnapshot> {
        self.latest.borrow().clone()
    }

    /// Watch the displayed result; the receiver is notified on every accepted
    /// [`apply`](Self::apply).
    pub fn subscribe(&self) -> watch::Receiver<Option<ResultSnapshot>> {
        self.latest.subscribe()
    }
}
