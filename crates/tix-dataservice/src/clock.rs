//! Wall-clock and sleep abstraction for the retry loop.
//!
//! [`SystemClock`] is the real thing. [`ManualClock`] never waits: sleeping
//! just moves its time forward, so a 20-hour retry budget runs instantly in
//! tests.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};

/// Source of wall-clock time and delays.
#[allow(async_fn_in_trait)]
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    async fn sleep(&self, duration: Duration);
}

/// Real time, real sleeping.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Simulated time that only advances when slept on.
#[derive(Debug)]
pub struct ManualClock {
    start: DateTime<Utc>,
    elapsed_ms: AtomicU64,
}

impl ManualClock {
    #[must_use]
    pub const fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            start,
            elapsed_ms: AtomicU64::new(0),
        }
    }

    /// Total simulated time slept so far.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        Duration::from_millis(self.elapsed_ms.load(Ordering::SeqCst))
    }

    /// Move time forward without sleeping.
    pub fn advance(&self, duration: Duration) {
        let ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self.elapsed_ms.fetch_add(ms, Ordering::SeqCst);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::starting_at(DateTime::UNIX_EPOCH)
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        let elapsed = TimeDelta::from_std(self.elapsed()).unwrap_or(TimeDelta::MAX);
        self.start + elapsed
    }

    async fn sleep(&self, duration: Duration) {
        self.advance(duration);
    }
}
