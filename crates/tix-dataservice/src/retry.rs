//! Retry budget for a data-service call.
//!
//! Failures are retried after a fixed backoff until a wall-clock deadline
//! measured from the first attempt. There is no exponential growth: the
//! service's queries take minutes to hours, and a failed one is usually
//! still warming up.

use std::time::Duration;

/// 20 hours.
pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(72_000);

/// 5 minutes.
pub const DEFAULT_BACKOFF: Duration = Duration::from_secs(300);

/// Deadline and fixed backoff for the resilient fetcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Stop retrying once this much time has passed since the first attempt.
    pub deadline: Duration,
    /// Wait between a failed attempt and the next one.
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            deadline: DEFAULT_DEADLINE,
            backoff: DEFAULT_BACKOFF,
        }
    }
}

impl RetryPolicy {
    #[must_use]
    pub const fn from_secs(deadline_secs: u64, backoff_secs: u64) -> Self {
        Self {
            deadline: Duration::from_secs(deadline_secs),
            backoff: Duration::from_secs(backoff_secs),
        }
    }

    /// Upper bound on attempts: `ceil(deadline / backoff)`.
    ///
    /// Every failed attempt is followed by one backoff, so no more attempts
    /// than this can start before the deadline.
    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        let backoff = self.backoff.as_millis();
        if backoff == 0 {
            return u32::MAX;
        }
        let attempts = self.deadline.as_millis().div_ceil(backoff);
        u32::try_from(attempts).unwrap_or(u32::MAX)
    }
}
