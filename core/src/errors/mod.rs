//! Classified error types for the repository layer.
//!
//! Every failure carries its classification from construction: the variant
//! chosen fixes the [`ErrorKind`], which in turn fixes the machine code and
//! the transport status. The boundary layer maps errors to responses without
//! inspecting message text.

use agenda_shared::errors::{error_codes, ErrorResponse};
use thiserror::Error;

/// Classification of a repository failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed caller-supplied input (external identifier format)
    InvalidInput,
    /// Lookup yielded no matching record
    NotFound,
    /// Operation invoked on a record missing required state
    Precondition,
    /// A non-domain value was passed where a domain entity was required;
    /// a caller bug, not a client-classified failure
    TypeMismatch,
    /// Storage backend failure
    Database,
}

/// Repository layer errors
///
/// Raised eagerly at the call site and never retried or recovered within
/// this layer; recovery is entirely the caller's responsibility.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("invalid external id: {reason}")]
    InvalidInput { reason: String },

    #[error("{resource} not found")]
    NotFound { resource: &'static str },

    #[error("precondition failed: {message}")]
    Precondition { message: String },

    #[error("expected an availability record, received {received}")]
    TypeMismatch { received: &'static str },

    #[error("database error: {message}")]
    Database { message: String },
}

impl RepositoryError {
    /// Convenience constructor for backend failures
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }

    /// Classification of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput { .. } => ErrorKind::InvalidInput,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Precondition { .. } => ErrorKind::Precondition,
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::Database { .. } => ErrorKind::Database,
        }
    }

    /// Stable machine code for the boundary layer
    pub fn error_code(&self) -> &'static str {
        match self.kind() {
            ErrorKind::InvalidInput => error_codes::INVALID_EXTERNAL_ID,
            ErrorKind::NotFound => error_codes::NOT_FOUND,
            ErrorKind::Precondition => error_codes::PRECONDITION_FAILED,
            ErrorKind::TypeMismatch => error_codes::TYPE_MISMATCH,
            ErrorKind::Database => error_codes::DATABASE_ERROR,
        }
    }

    /// HTTP status the error kind maps to
    ///
    /// Precondition failures are a server-side contract violation, not the
    /// end user's fault; they map to 500 alongside type mismatches and
    /// backend failures.
    pub fn http_status(&self) -> u16 {
        match self.kind() {
            ErrorKind::InvalidInput => 400,
            ErrorKind::NotFound => 404,
            ErrorKind::Precondition | ErrorKind::TypeMismatch | ErrorKind::Database => 500,
        }
    }
}

impl From<&RepositoryError> for ErrorResponse {
    fn from(err: &RepositoryError) -> Self {
        ErrorResponse::new(err.error_code(), err.http_status(), err.to_string())
    }
}

pub type DomainResult<T> = Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_is_fixed_by_the_variant() {
        let err = RepositoryError::NotFound {
            resource: "availability",
        };
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.http_status(), 404);
        assert_eq!(err.error_code(), "NOT_FOUND");
    }

    #[test]
    fn classification_maps_to_transport_statuses() {
        let cases = [
            (
                RepositoryError::InvalidInput {
                    reason: "bad uuid".into(),
                },
                400,
            ),
            (
                RepositoryError::Precondition {
                    message: "no id".into(),
                },
                500,
            ),
            (RepositoryError::TypeMismatch { received: "room" }, 500),
            (RepositoryError::database("connection refused"), 500),
        ];
        for (err, status) in cases {
            assert_eq!(err.http_status(), status);
        }
    }

    #[test]
    fn converts_to_boundary_response_without_text_inspection() {
        let err = RepositoryError::InvalidInput {
            reason: "\"abc\" is not a UUID".into(),
        };
        let response: ErrorResponse = (&err).into();
        assert_eq!(response.error, "INVALID_EXTERNAL_ID");
        assert_eq!(response.status, 400);
        assert!(response.message.contains("invalid external id"));
    }
}
