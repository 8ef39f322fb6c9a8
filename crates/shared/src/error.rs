use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message used when a failed response carries no readable error body.
pub const UNKNOWN_SERVICE_ERROR: &str = "An unknown error occurred.";

/// Body the data service may attach to a non-2xx response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ServiceErrorBody {
    /// Decode a response body, falling back to the generic message.
    pub fn message_from_bytes(body: &[u8]) -> String {
        serde_json::from_slice::<ServiceErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.message)
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_SERVICE_ERROR.to_string())
    }
}

/// Search input that trims to nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("student name must not be empty")]
pub struct EmptyName;
