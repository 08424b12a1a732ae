//! API utility functions
//!
//! Shared response types used by the handlers.

use serde::Serialize;

/// Generic acknowledgement response
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// Human-readable message
    pub message: String,
    /// Status indicator (e.g., "ok")
    pub status: String,
}

impl StatusResponse {
    /// Successful acknowledgement with the given message
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: "ok".to_string(),
        }
    }
}
