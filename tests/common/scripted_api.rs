//! In-process [`ProductsApi`] with scripted latency and outcomes.
//!
//! Each call to `search` pops the next script entry (or falls back to an
//! immediate empty result), records the filter it was called with, sleeps for
//! the scripted delay and returns the scripted outcome. Under
//! `#[tokio::test(start_paused = true)]` the delays are virtual, so arrival
//! order is fully deterministic.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;
use storefront_core::{ProductFilter, SearchHit};
use storefront_session::{ClientError, ProductsApi};
use tokio::time::Instant;

#[derive(Debug, Clone)]
pub enum Outcome {
    Hits(Vec<SearchHit>),
    Rejected { status: u16, message: String },
}

#[derive(Debug, Clone)]
struct Script {
    delay: Duration,
    outcome: Outcome,
}

/// One recorded call.
#[derive(Debug, Clone)]
pub struct Call {
    pub at: Instant,
    pub filter: ProductFilter,
}

#[derive(Default)]
pub struct ScriptedProductsApi {
    scripts: Mutex<VecDeque<Script>>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedProductsApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a call that answers `hits` after `delay`.
    pub fn respond_after(self, delay: Duration, hits: Vec<SearchHit>) -> Self {
        self.push(delay, Outcome::Hits(hits));
        self
    }

    /// Queue a call that fails with a `{ message }` error after `delay`.
    pub fn fail_after(self, delay: Duration, status: u16, message: &str) -> Self {
        self.push(
            delay,
            Outcome::Rejected { status, message: message.to_string() },
        );
        self
    }

    pub fn push(&self, delay: Duration, outcome: Outcome) {
        self.scripts
            .lock()
            .unwrap()
            .push_back(Script { delay, outcome });
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl ProductsApi for ScriptedProductsApi {
    async fn search(&self, filter: &ProductFilter) -> Result<Vec<SearchHit>, ClientError> {
        let script = self.scripts.lock().unwrap().pop_front().unwrap_or(Script {
            delay: Duration::ZERO,
            outcome: Outcome::Hits(vec![]),
        });
        self.calls.lock().unwrap().push(Call {
            at: Instant::now(),
            filter: filter.clone(),
        });

        tokio::time::sleep(script.delay).await;
        match script.outcome {
            Outcome::Hits(hits) => Ok(hits),
            Outcome::Rejected { status, message } => Err(ClientError::Rejected { status, message }),
        }
    }
}
