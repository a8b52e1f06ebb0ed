//! Deadline-bounded retry loop around a data-service call.

use chrono::TimeDelta;

use crate::{DataServiceApi, RequestBody, clock::Clock, frame::FetchResult, retry::RetryPolicy};

/// Calls one data-service API until it succeeds or the retry deadline passes.
///
/// Failures never surface as errors: each one is logged and followed by a
/// fixed backoff. When the deadline passes the buffer is returned as-is.
/// Rows from a response are committed only after the whole response parsed,
/// so a retried call never duplicates rows.
pub struct ResilientFetcher<A, C> {
    api: A,
    clock: C,
    policy: RetryPolicy,
    queue: String,
    body: RequestBody,
}

impl<A: DataServiceApi, C: Clock> ResilientFetcher<A, C> {
    /// Fetcher with an empty queue. Every call sends the fixed empty request body.
    pub fn new(api: A, clock: C, policy: RetryPolicy) -> Self {
        Self {
            api,
            clock,
            policy,
            queue: String::new(),
            body: RequestBody::default(),
        }
    }

    #[must_use]
    pub fn with_queue(mut self, queue: impl Into<String>) -> Self {
        self.queue = queue.into();
        self
    }

    pub const fn clock(&self) -> &C {
        &self.clock
    }

    pub const fn api(&self) -> &A {
        &self.api
    }

    /// Fetch every record of `api_abbr` at `version`.
    pub async fn fetch(&self, api_abbr: &str, version: &str) -> FetchResult {
        let mut buffer = FetchResult::default();
        let deadline = TimeDelta::from_std(self.policy.deadline).unwrap_or(TimeDelta::MAX);
        let start = self.clock.now();

        tracing::info!(api_abbr, version, "retrieving data");

        for attempt in 1..=self.policy.max_attempts() {
            if self.clock.now() - start >= deadline {
                break;
            }

            let outcome = self
                .api
                .call(api_abbr, version, &self.queue, &self.body)
                .await
                .and_then(|response| FetchResult::from_response(&response));

            match outcome {
                Ok(staged) => {
                    buffer.append(staged);
                    tracing::info!(api_abbr, attempt, rows = buffer.len(), "retrieved data");
                    return buffer;
                }
                Err(error) => {
                    tracing::warn!(at = %self.clock.now(), api_abbr, attempt, %error, "data service call failed");
                    self.clock.sleep(self.policy.backoff).await;
                }
            }
        }

        tracing::error!(
            api_abbr,
            deadline_secs = self.policy.deadline.as_secs(),
            "retry deadline elapsed without a successful call"
        );
        buffer
    }
}
