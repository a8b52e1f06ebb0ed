//! Data-service error types.

use thiserror::Error;

/// Errors from a single data-service call or from writing its result.
///
/// Inside the resilient fetcher every variant except the output ones counts
/// as a failed attempt and is retried.
#[derive(Debug, Error)]
pub enum DataServiceError {
    /// HTTP transport error, including request timeouts.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The data service returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the data service.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The data service is throttling this app key.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds the service asked us to wait.
        retry_after_secs: u64,
    },

    /// The response was not valid JSON.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A response record had no `values` object.
    #[error("record at {path} has no `values` object")]
    MissingValues {
        /// Position of the record in the response, e.g. `[0][3]`.
        path: String,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
