//! Validation-guarded CRUD facade over an availability storage backend.

use std::sync::Arc;

use agenda_shared::types::{Filters, Page};

use crate::domain::entities::{Availability, DomainRecord};
use crate::errors::{DomainResult, RepositoryError};

use super::guards;
use super::r#trait::AvailabilityStore;

/// Repository for Availability records
///
/// Stateless apart from its immutable backend handle: every operation runs
/// the applicable guards and then delegates to the injected store, so
/// concurrent invocations are independent. The store is passed in at
/// construction, never resolved through any ambient registry.
pub struct AvailabilityRepository {
    store: Option<Arc<dyn AvailabilityStore>>,
}

impl AvailabilityRepository {
    /// Create a repository backed by the given store
    pub fn new(store: Arc<dyn AvailabilityStore>) -> Self {
        Self { store: Some(store) }
    }

    /// Create a repository with no backing store
    ///
    /// Legal to construct; every operation on it fails fast with a
    /// `Database`-kind error instead of silently no-opping.
    pub fn detached() -> Self {
        Self { store: None }
    }

    fn store(&self) -> DomainResult<&dyn AvailabilityStore> {
        self.store
            .as_deref()
            .ok_or_else(|| RepositoryError::database("no storage backend configured"))
    }

    /// Persist a new availability record
    ///
    /// Requires only type conformance: creation must succeed even when the
    /// record has no internal id yet. The guard failing means the caller
    /// passed a non-availability record, which never reaches the backend.
    ///
    /// # Returns
    /// The persisted record with its internal id populated by the backend.
    pub async fn create<R>(&self, record: &R) -> DomainResult<Availability>
    where
        R: DomainRecord + ?Sized,
    {
        let availability = guards::ensure_availability(record)?;
        self.persist(availability.clone()).await
    }

    /// Persist changes to an already-persisted availability record
    ///
    /// Requires the record to carry an internal id; a record that was never
    /// persisted fails the precondition guard without reaching the backend.
    pub async fn update(&self, availability: &Availability) -> DomainResult<Availability> {
        guards::ensure_updatable(availability)?;
        self.persist(availability.clone()).await
    }

    /// Shared write primitive behind create and update
    ///
    /// Writes the full current state and returns the backend's canonical
    /// post-write representation. Blind overwrite: concurrent updates to the
    /// same record race unless the backend enforces its own concurrency
    /// control.
    async fn persist(&self, availability: Availability) -> DomainResult<Availability> {
        self.store()?.save(availability).await
    }

    /// Find records matching the given filters within a pagination window
    ///
    /// Filters combine with logical AND; an empty map matches everything.
    /// The consultation-request relation is eagerly included. Zero matches
    /// returns an empty sequence, never an error; ordering is
    /// backend-defined.
    pub async fn find(&self, filters: &Filters, page: Page) -> DomainResult<Vec<Availability>> {
        self.store()?.find(filters, page).await
    }

    /// Find records using the `limit`-carrying filter convention
    ///
    /// The filter map must include a `limit` entry holding a `[skip, take]`
    /// pair; it is extracted as the pagination window and the remaining
    /// fields are forwarded unchanged as the sole filters. A missing or
    /// malformed `limit` fails the calling-convention precondition.
    pub async fn get(&self, mut filters: Filters) -> DomainResult<Vec<Availability>> {
        let page = filters.take_limit().ok_or_else(missing_limit)?;
        self.find(&filters, page).await
    }

    /// Look up exactly one record by its external identifier
    ///
    /// The identifier format is validated before any storage access. A
    /// lookup with no match fails as not-found. External ids are expected to
    /// be unique; if the backend nevertheless returns several matches, the
    /// first is returned and the duplication is logged.
    pub async fn by_external_id_or_fail(&self, raw: &str) -> DomainResult<Availability> {
        let uuid = guards::ensure_external_id(raw)?;

        let filters = Filters::new().eq("uuid", uuid.to_string());
        let matches = self.find(&filters, Page::unrestricted()).await?;
        if matches.len() > 1 {
            tracing::warn!(
                %uuid,
                matches = matches.len(),
                "external id matched more than one availability, returning the first"
            );
        }

        guards::ensure_found(matches.into_iter().next(), "availability")
    }

    /// Count records matching the given filters
    ///
    /// Uses the same `limit`-carrying convention as [`get`](Self::get), but
    /// the extracted window is discarded: the count is always of the full
    /// result set, never of a page.
    pub async fn count(&self, mut filters: Filters) -> DomainResult<u64> {
        filters.take_limit().ok_or_else(missing_limit)?;
        self.store()?.count(&filters).await
    }
}

fn missing_limit() -> RepositoryError {
    RepositoryError::Precondition {
        message: "filters must carry a `limit` entry of the form [skip, take]".to_string(),
    }
}
