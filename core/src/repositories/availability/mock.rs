//! In-memory implementation of AvailabilityStore for testing.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use agenda_shared::types::{Filters, Page};

use crate::domain::entities::Availability;
use crate::errors::{DomainResult, RepositoryError};

use super::r#trait::AvailabilityStore;

/// In-memory availability store
///
/// Assigns sequential internal ids on insert and matches filters against the
/// serialized record, so field names behave like backend column names. The
/// relation filter field (`nid_interconsulta`) matches the embedded
/// consultation request's id, mirroring a foreign-key column.
pub struct MockAvailabilityStore {
    records: Arc<RwLock<Vec<Availability>>>,
    next_id: AtomicI64,
}

impl MockAvailabilityStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Check whether the store holds no records
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    fn matches(record: &Availability, filters: &Filters) -> bool {
        let doc = match serde_json::to_value(record) {
            Ok(doc) => doc,
            Err(_) => return false,
        };

        filters.iter().all(|(field, expected)| {
            let actual = match field {
                // foreign-key column: match the embedded relation's id
                "nid_interconsulta" => doc.get(field).and_then(|rel| rel.get("id")),
                _ => doc.get(field),
            };
            actual == Some(expected)
        })
    }

    fn window(records: Vec<Availability>, page: Page) -> Vec<Availability> {
        let skip = page.skip.unwrap_or(0) as usize;
        let take = page.take.map(|take| take as usize).unwrap_or(usize::MAX);
        records.into_iter().skip(skip).take(take).collect()
    }
}

impl Default for MockAvailabilityStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AvailabilityStore for MockAvailabilityStore {
    async fn save(&self, mut availability: Availability) -> DomainResult<Availability> {
        let mut records = self.records.write().await;

        match availability.id {
            None => {
                availability.id = Some(self.next_id.fetch_add(1, Ordering::SeqCst));
                records.push(availability.clone());
                Ok(availability)
            }
            Some(id) => {
                let slot = records
                    .iter_mut()
                    .find(|existing| existing.id == Some(id))
                    .ok_or(RepositoryError::NotFound {
                        resource: "availability",
                    })?;
                *slot = availability.clone();
                Ok(availability)
            }
        }
    }

    async fn find(&self, filters: &Filters, page: Page) -> DomainResult<Vec<Availability>> {
        let records = self.records.read().await;
        let matching = records
            .iter()
            .filter(|record| Self::matches(record, filters))
            .cloned()
            .collect();
        Ok(Self::window(matching, page))
    }

    async fn count(&self, filters: &Filters) -> DomainResult<u64> {
        let records = self.records.read().await;
        let count = records
            .iter()
            .filter(|record| Self::matches(record, filters))
            .count();
        Ok(count as u64)
    }
}
