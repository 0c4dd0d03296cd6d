//! Per-run request pacing
//!
//! Uses the governor crate with a burst of one: the first `wait` in a run
//! returns immediately, every later one gates on the configured interval.
//! Each pagination run constructs its own pacer, so concurrent runs never
//! serialize against each other.

use governor::clock::DefaultClock;
use governor::middleware::NoOpMiddleware;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as Governor};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

/// Minimum-interval gate for one pagination run
#[derive(Clone)]
pub struct RunPacer {
    limiter: Option<Arc<Governor<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>>>,
}

impl RunPacer {
    /// Create a pacer enforcing at least `interval` between consecutive
    /// waits. A zero interval disables pacing entirely.
    pub fn new(interval: Duration) -> Self {
        let limiter = Quota::with_period(interval).map(|quota| {
            let quota = quota.allow_burst(NonZeroU32::MIN);
            Arc::new(Governor::direct(quota))
        });

        Self { limiter }
    }

    /// Suspend until the next request may be issued.
    ///
    /// Immediate on the first call of a run; at least the configured
    /// interval after the previous call otherwise.
    pub async fn wait(&self) {
        if let Some(ref limiter) = self.limiter {
            limiter.until_ready().await;
        }
    }

    /// Whether pacing is active
    pub fn is_enabled(&self) -> bool {
        self.limiter.is_some()
    }
}

impl std::fmt::Debug for RunPacer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunPacer")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
