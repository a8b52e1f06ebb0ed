//! Retry budget for long-running data-service calls.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// 20 hours.
const fn default_deadline_secs() -> u64 {
    72_000
}

/// 5 minutes.
const fn default_backoff_secs() -> u64 {
    300
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RetryConfig {
    /// Give up this many seconds after the first attempt.
    #[serde(default = "default_deadline_secs")]
    pub deadline_secs: u64,

    /// Fixed wait between a failed attempt and the next one.
    #[serde(default = "default_backoff_secs")]
    pub backoff_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            deadline_secs: default_deadline_secs(),
            backoff_secs: default_backoff_secs(),
        }
    }
}

impl RetryConfig {
    /// Reject a zero backoff, which would turn the retry loop into a busy spin.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for `backoff_secs = 0`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.backoff_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "retry.backoff_secs",
                reason: "must be at least 1 second".into(),
            });
        }
        Ok(())
    }
}
