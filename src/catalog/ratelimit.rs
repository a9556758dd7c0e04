//! Spacing out requests against the catalogue.
//!
//! The site is a shared resource with no API quota of its own, so the
//! client keeps a minimum distance between consecutive requests.

use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{sleep, Instant};

pub struct RateLimiter {
    min_interval: Duration,
    last_call: Mutex<Option<Instant>>,
}

impl RateLimiter {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_call: Mutex::new(None),
        }
    }

    /// Sleep until at least `min_interval` has passed since the previous
    /// call, then claim the slot. Holding the lock across the sleep keeps
    /// concurrent callers spaced out too.
    pub async fn wait(&self) {
        if self.min_interval.is_zero() {
            return;
        }
        let mut last_call = self.last_call.lock().await;
        if let Some(previous) = *last_call {
            let ready_at = previous + self.min_interval;
            let now = Instant::now();
            if ready_at > now {
                sleep(ready_at - now).await;
            }
        }
        *last_call = Some(Instant::now());
    }
}
