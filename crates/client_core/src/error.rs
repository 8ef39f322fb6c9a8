//! Failures of a single student lookup request.

use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("invalid base url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("failed to build http client: {0}")]
    ClientBuild(#[source] reqwest::Error),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP error! status: {status} - {message}")]
    Status { status: u16, message: String },
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
}
