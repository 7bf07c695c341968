//! Error types for the product API client.

use reqwest::StatusCode;
use thiserror::Error;

/// Result type for product API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors that can occur while fetching from the product API.
///
/// All three variants surface identically to callers as a failed fetch; the
/// client does not retry or recover. Views catch the error, log it, and
/// render a localized retry affordance.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The network call itself failed (connection refused, DNS, timeout).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success HTTP status.
    #[error("server returned {status}")]
    Status { status: StatusCode },

    /// The response body was not the JSON shape we expected.
    #[error("malformed response body: {0}")]
    Decode(#[source] serde_json::Error),
}
