//! Board-service error types.

use thiserror::Error;

/// Errors that can occur when talking to the board service.
#[derive(Debug, Error)]
pub enum BoardError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API key or token was rejected.
    #[error("board service rejected the credentials: {0}")]
    Unauthorized(String),

    /// The requested board, list or card does not exist or is not visible.
    #[error("not found: {0}")]
    NotFound(String),

    /// The board service returned another non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the board service.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The response body did not have the expected shape.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The token can see no boards at all.
    #[error("no boards are visible to this token")]
    NoBoards,

    /// The board service returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },
}
