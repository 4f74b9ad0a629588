//! Validation guards for availability repository operations.
//!
//! Pure predicate functions with no shared state, callable independently of
//! the repository. Each either returns normally or fails with an error whose
//! classification is fixed at construction.

use uuid::Uuid;

use crate::domain::entities::{Availability, DomainRecord};
use crate::errors::RepositoryError;

/// Validate that a record carries an internal id and may be updated
///
/// A record without an id has never been persisted; passing it to update is
/// a server-side contract violation.
pub fn ensure_updatable(availability: &Availability) -> Result<i64, RepositoryError> {
    availability.id.ok_or_else(|| RepositoryError::Precondition {
        message: "availability has no internal id and cannot be updated".to_string(),
    })
}

/// Validate that a value is present
///
/// Generic presence check used on lookup results; absence classifies as
/// not-found rather than as a fatal error.
pub fn ensure_found<T>(value: Option<T>, resource: &'static str) -> Result<T, RepositoryError> {
    value.ok_or(RepositoryError::NotFound { resource })
}

/// Validate that an externally-supplied identifier has UUID text format
///
/// Accepts the general textual formats the `uuid` crate parses (hyphenated,
/// simple, braced, URN). Runs before any storage access.
pub fn ensure_external_id(raw: &str) -> Result<Uuid, RepositoryError> {
    Uuid::parse_str(raw).map_err(|e| RepositoryError::InvalidInput {
        reason: format!("{:?} is not a valid UUID: {}", raw, e),
    })
}

/// Validate that a record is an Availability
///
/// A failure here indicates a caller bug, not bad client input: propagate
/// immediately, do not catch-and-continue.
pub fn ensure_availability<R>(record: &R) -> Result<&Availability, RepositoryError>
where
    R: DomainRecord + ?Sized,
{
    record
        .as_availability()
        .ok_or_else(|| RepositoryError::TypeMismatch {
            received: record.record_type(),
        })
}
