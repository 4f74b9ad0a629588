//! Unit tests for the validation-guarded availability repository
//!
//! Uses a call-recording store wrapped around the in-memory mock so the
//! "guard failures never reach the backend" properties can be asserted
//! directly.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use serde_json::json;

use agenda_shared::types::{filter::LIMIT_FIELD, Filters, Page};

use crate::domain::entities::{Availability, ConsultationRequest, Room};
use crate::errors::{DomainResult, ErrorKind};
use crate::repositories::availability::{
    AvailabilityRepository, AvailabilityStore, MockAvailabilityStore,
};

/// Store wrapper that counts backend calls and captures find arguments
struct RecordingStore {
    inner: MockAvailabilityStore,
    save_calls: AtomicUsize,
    find_calls: AtomicUsize,
    count_calls: AtomicUsize,
    last_find: Mutex<Option<(Filters, Page)>>,
}

impl RecordingStore {
    fn new() -> Self {
        Self {
            inner: MockAvailabilityStore::new(),
            save_calls: AtomicUsize::new(0),
            find_calls: AtomicUsize::new(0),
            count_calls: AtomicUsize::new(0),
            last_find: Mutex::new(None),
        }
    }

    fn save_calls(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }

    fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }

    fn last_find(&self) -> Option<(Filters, Page)> {
        self.last_find.lock().unwrap().clone()
    }
}

#[async_trait]
impl AvailabilityStore for RecordingStore {
    async fn save(&self, availability: Availability) -> DomainResult<Availability> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.save(availability).await
    }

    async fn find(&self, filters: &Filters, page: Page) -> DomainResult<Vec<Availability>> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_find.lock().unwrap() = Some((filters.clone(), page));
        self.inner.find(filters, page).await
    }

    async fn count(&self, filters: &Filters) -> DomainResult<u64> {
        self.count_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.count(filters).await
    }
}

fn slot(consultation_id: i64) -> Availability {
    Availability::new(
        NaiveDate::from_ymd_opt(2026, 3, 16).unwrap(),
        NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        ConsultationRequest {
            id: consultation_id,
            folio: format!("INT-2026-{:04}", consultation_id),
        },
    )
}

fn repository() -> (AvailabilityRepository, Arc<RecordingStore>) {
    let store = Arc::new(RecordingStore::new());
    (AvailabilityRepository::new(store.clone()), store)
}

#[tokio::test]
async fn create_persists_a_new_record_and_assigns_an_id() {
    let (repo, store) = repository();

    let created = repo.create(&slot(1)).await.unwrap();

    assert_eq!(created.id, Some(1));
    assert_eq!(store.save_calls(), 1);
}

#[tokio::test]
async fn create_rejects_a_room_before_reaching_the_backend() {
    let (repo, store) = repository();

    let err = repo.create(&Room::new("A", "101")).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    assert_eq!(store.save_calls(), 0);
}

#[tokio::test]
async fn update_without_id_fails_precondition_before_reaching_the_backend() {
    let (repo, store) = repository();

    let err = repo.update(&slot(1)).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Precondition);
    assert_eq!(store.save_calls(), 0);
}

#[tokio::test]
async fn update_with_id_persists_exactly_once() {
    let (repo, store) = repository();
    let mut persisted = repo.create(&slot(1)).await.unwrap();
    persisted.end_time = NaiveTime::from_hms_opt(11, 30, 0).unwrap();

    let updated = repo.update(&persisted).await.unwrap();

    assert_eq!(updated, persisted);
    assert_eq!(store.save_calls(), 2); // one create, one update
}

#[tokio::test]
async fn by_external_id_rejects_malformed_ids_before_any_storage_access() {
    let (repo, store) = repository();

    let err = repo.by_external_id_or_fail("not-a-uuid").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert_eq!(store.find_calls(), 0);
}

#[tokio::test]
async fn by_external_id_with_no_match_is_not_found() {
    let (repo, _store) = repository();

    let err = repo
        .by_external_id_or_fail("550e8400-e29b-41d4-a716-446655440000")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn by_external_id_returns_the_single_match() {
    let (repo, _store) = repository();
    let persisted = repo.create(&slot(1)).await.unwrap();
    repo.create(&slot(2)).await.unwrap();

    let found = repo
        .by_external_id_or_fail(&persisted.uuid.to_string())
        .await
        .unwrap();

    assert_eq!(found, persisted);
}

#[tokio::test]
async fn by_external_id_returns_the_first_of_duplicate_matches() {
    let (repo, _store) = repository();
    let first = repo.create(&slot(1)).await.unwrap();
    let mut duplicate = slot(2);
    duplicate.uuid = first.uuid;
    repo.create(&duplicate).await.unwrap();

    let found = repo
        .by_external_id_or_fail(&first.uuid.to_string())
        .await
        .unwrap();

    assert_eq!(found.id, first.id);
}

#[tokio::test]
async fn get_forwards_the_window_and_the_remaining_filters() {
    let (repo, store) = repository();

    let filters = Filters::new()
        .eq(LIMIT_FIELD, json!([0, 10]))
        .eq("edificio", "A");
    repo.get(filters).await.unwrap();

    let (forwarded, page) = store.last_find().unwrap();
    assert_eq!(forwarded, Filters::new().eq("edificio", "A"));
    assert_eq!(page, Page::window(0, 10));
}

#[tokio::test]
async fn get_without_a_limit_entry_fails_the_calling_convention() {
    let (repo, store) = repository();

    let err = repo
        .get(Filters::new().eq("edificio", "A"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Precondition);
    assert_eq!(store.find_calls(), 0);
}

#[tokio::test]
async fn find_with_empty_filters_on_an_empty_backend_returns_empty() {
    let (repo, _store) = repository();

    let found = repo
        .find(&Filters::new(), Page::unrestricted())
        .await
        .unwrap();

    assert!(found.is_empty());
}

#[tokio::test]
async fn count_is_of_the_full_result_set_not_the_page() {
    let (repo, _store) = repository();
    for consultation_id in 1..=5 {
        repo.create(&slot(consultation_id)).await.unwrap();
    }

    let filters = Filters::new().eq(LIMIT_FIELD, json!([0, 1]));
    assert_eq!(repo.count(filters).await.unwrap(), 5);
}

#[tokio::test]
async fn count_requires_the_limit_entry() {
    let (repo, _store) = repository();

    let err = repo.count(Filters::new()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Precondition);
}

#[tokio::test]
async fn detached_repository_fails_fast_on_every_operation() {
    let repo = AvailabilityRepository::detached();

    let err = repo.create(&slot(1)).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Database);

    let err = repo
        .find(&Filters::new(), Page::unrestricted())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Database);

    let err = repo
        .count(Filters::new().eq(LIMIT_FIELD, json!([0, 10])))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Database);
}
