//! # tix-dataservice
//!
//! Client for the analytics data service plus the resilient fetcher that
//! wraps it.
//!
//! Data-service queries run on a shared OLAP cluster and fail often while it
//! is busy. [`ResilientFetcher`] retries a call on a fixed backoff until a
//! wall-clock deadline (20 hours by default) and returns whatever it has,
//! possibly nothing, instead of an error. Time comes from a [`Clock`] so the
//! whole budget can be exercised instantly with [`ManualClock`].

mod client;
mod clock;
mod error;
mod fetcher;
mod frame;
mod retry;

pub use client::DataServiceClient;
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::DataServiceError;
pub use fetcher::ResilientFetcher;
pub use frame::{FetchResult, Row, VALUES_KEY};
pub use retry::{DEFAULT_BACKOFF, DEFAULT_DEADLINE, RetryPolicy};

use serde::Serialize;
use serde_json::Value;

/// Request body sent with every call: filter expressions for the query.
///
/// Empty expressions select the API's full result.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RequestBody {
    pub expressions: Vec<Value>,
}

/// One call to a published data-service API.
#[allow(async_fn_in_trait)]
pub trait DataServiceApi {
    /// Run `api_abbr` at `version` and return the raw response: a sequence of
    /// groups, each a sequence of `{"values": {...}}` records.
    async fn call(
        &self,
        api_abbr: &str,
        version: &str,
        queue: &str,
        body: &RequestBody,
    ) -> Result<Value, DataServiceError>;
}
