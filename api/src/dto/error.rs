//! Standard JSON error body returned by the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable machine-readable error code
    pub error: String,

    /// Human-readable message
    pub message: String,

    /// Time the error was produced
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Creates an error response stamped with the current time.
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}
