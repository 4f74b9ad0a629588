//! Storage backend trait for availability persistence.
//!
//! This module defines the capability set the repository consumes from its
//! storage collaborator. Implementations handle the actual database
//! operations while the repository keeps the validation and classification
//! logic; isolation, atomicity, and ordering are entirely the backend's
//! concern.

use async_trait::async_trait;

use agenda_shared::types::{Filters, Page};

use crate::domain::entities::Availability;
use crate::errors::DomainResult;

/// Storage backend contract for Availability records
///
/// The backend call is the repository's sole suspension point; no operation
/// here holds shared mutable state across it.
#[async_trait]
pub trait AvailabilityStore: Send + Sync {
    /// Write the full current state of a record
    ///
    /// Insert-vs-update is determined by the presence of the internal
    /// identifier. Returns the canonical post-write representation so
    /// generated columns (identifiers, defaults) are reflected back to the
    /// caller. This is a blind overwrite: no idempotence or optimistic
    /// concurrency guarantee is added at this level.
    ///
    /// # Returns
    /// * `Ok(Availability)` - The persisted record with its internal id populated
    /// * `Err(RepositoryError)` - `NotFound` when updating a vanished id, `Database` otherwise
    async fn save(&self, availability: Availability) -> DomainResult<Availability>;

    /// Find records matching all provided filter fields
    ///
    /// Filter fields combine with logical AND; an empty map matches
    /// everything. The associated consultation request is eagerly loaded on
    /// every returned record. Order is backend-defined. Zero matches is not
    /// an error.
    ///
    /// # Arguments
    /// * `filters` - Field name to exact-match value, forwarded verbatim
    /// * `page` - Offset/limit window; unrestricted by default
    async fn find(&self, filters: &Filters, page: Page) -> DomainResult<Vec<Availability>>;

    /// Count records matching all provided filter fields
    ///
    /// Counts the full result set; pagination windows never apply to counts.
    async fn count(&self, filters: &Filters) -> DomainResult<u64>;
}
