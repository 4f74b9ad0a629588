//! Shared error response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Standard error response structure used at the service boundary
///
/// Carries a stable machine code, the HTTP status the error classifies to,
/// and a human-readable message, so transports can be chosen without
/// inspecting message text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for client identification
    pub error: String,

    /// HTTP status the error kind maps to
    pub status: u16,

    /// Human-readable error message
    pub message: String,

    /// Additional error details (field errors, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, status: u16, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            status,
            message: message.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Add a detail field to the error response
    pub fn add_detail(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        let details = self.details.get_or_insert_with(HashMap::new);
        if let Ok(json_value) = serde_json::to_value(value) {
            details.insert(key.into(), json_value);
        }
        self
    }
}

/// Common error codes used across the application
pub mod error_codes {
    /// External identifier is not a valid UUID
    pub const INVALID_EXTERNAL_ID: &str = "INVALID_EXTERNAL_ID";
    /// Requested record does not exist
    pub const NOT_FOUND: &str = "NOT_FOUND";
    /// Operation invoked on a record missing required state
    pub const PRECONDITION_FAILED: &str = "PRECONDITION_FAILED";
    /// A non-domain value was passed where a domain entity was required
    pub const TYPE_MISMATCH: &str = "TYPE_MISMATCH";
    /// Storage backend failure
    pub const DATABASE_ERROR: &str = "DATABASE_ERROR";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_carries_code_and_status() {
        let response = ErrorResponse::new(error_codes::NOT_FOUND, 404, "availability not found");
        assert_eq!(response.error, "NOT_FOUND");
        assert_eq!(response.status, 404);
        assert!(response.details.is_none());
    }

    #[test]
    fn details_accumulate() {
        let response = ErrorResponse::new(error_codes::INVALID_EXTERNAL_ID, 400, "bad id")
            .add_detail("received", "not-a-uuid")
            .add_detail("field", "uuid");
        let details = response.details.unwrap();
        assert_eq!(details["received"], "not-a-uuid");
        assert_eq!(details["field"], "uuid");
    }
}
