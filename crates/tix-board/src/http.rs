//! Status handling shared by every board-service request.
//!
//! The board service answers `401` with a plain-text reason (`invalid key`,
//! `invalid token`) and `404` with `"The requested resource was not found."`,
//! so bodies are kept as text in the error.

use crate::error::BoardError;

/// Fallback wait when a 429 carries no usable `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 10;

/// Map an HTTP response to [`BoardError`] unless it succeeded.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, BoardError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(BoardError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }

    let url = resp.url().path().to_string();
    let body = resp.text().await.unwrap_or_default();
    Err(match status {
        reqwest::StatusCode::UNAUTHORIZED => BoardError::Unauthorized(body.trim().to_string()),
        reqwest::StatusCode::NOT_FOUND => BoardError::NotFound(url),
        _ => BoardError::Api {
            status: status.as_u16(),
            message: body,
        },
    })
}

/// Parse the `Retry-After` header as seconds.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}
