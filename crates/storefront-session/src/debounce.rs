//! Delay-and-coalesce scheduler.
//!
//! [`Debouncer::schedule`] arms a timer; when it fires after the quiet
//! interval the trigger runs. Scheduling again before it fires cancels the
//! earlier trigger, so a burst of schedules yields exactly one run.

use std::future::Future;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Quiet interval between the last facet edit and the dispatch it triggers.
pub const DEFAULT_QUIET: Duration = Duration::from_millis(400);

#[derive(Debug)]
pub struct Debouncer {
    quiet: Duration,
    pending: Option<CancellationToken>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET)
    }
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self { quiet, pending: None }
    }

    pub fn quiet(&self) -> Duration {
        self.quiet
    }

    /// Arm the timer for `trigger`, replacing any trigger still waiting.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F, Fut>(&mut self, trigger: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        if self.cancel_pending() {
            tracing::trace!("pending trigger superseded");
        }

        let token = CancellationToken::new();
        self.pending = Some(token.clone());
        let quiet = self.quiet;

        tokio::spawn(async move {
            tokio::select! {
                // A cancel that lands on the tick the timer expires must win.
                biased;
                _ = token.cancelled() => return,
                _ = tokio::time::sleep(quiet) => {}
            }
            // Mark as fired so a later cancel_pending reports nothing pending.
            token.cancel();
            trigger().await;
        });
    }

    /// Cancel the waiting trigger, if any. Returns whether one was waiting.
    /// A trigger that has already fired is not interrupted.
    pub fn cancel_pending(&mut self) -> bool {
        match self.pending.take() {
            Some(token) if !token.is_cancelled() => {
                token.cancel();
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|t| !t.is_cancelled())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
