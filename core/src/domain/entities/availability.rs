//! Availability entity: a schedulable time slot offered for a consultation request.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reference to the consultation request an availability slot belongs to
///
/// Carried embedded in every availability returned from a read; the storage
/// layer loads the relation eagerly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultationRequest {
    /// Internal identifier of the consultation request
    pub id: i64,

    /// Human-facing tracking number
    pub folio: String,
}

/// Availability entity representing a schedulable time slot
///
/// A record is "new" until its first successful persistence assigns the
/// internal identifier; only persisted records may be updated. The external
/// identifier (`uuid`) is generated in memory at construction and is the
/// handle used for lookups from outside the storage boundary.
///
/// Serialized field names follow the storage column names (`dia`,
/// `hora_inicio`, `hora_fin`, `nid_interconsulta`) so filter fields line up
/// with what backends expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    /// Internal identifier, assigned by the backend on first persistence
    pub id: Option<i64>,

    /// External identifier used for lookups from outside the storage boundary
    pub uuid: Uuid,

    /// Day of the slot
    #[serde(rename = "dia")]
    pub day: NaiveDate,

    /// Start of the slot
    #[serde(rename = "hora_inicio")]
    pub start_time: NaiveTime,

    /// End of the slot
    #[serde(rename = "hora_fin")]
    pub end_time: NaiveTime,

    /// Associated consultation request, eagerly loaded on every read
    #[serde(rename = "nid_interconsulta")]
    pub consultation: ConsultationRequest,
}

impl Availability {
    /// Creates a new, not-yet-persisted Availability
    pub fn new(
        day: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        consultation: ConsultationRequest,
    ) -> Self {
        Self {
            id: None,
            uuid: Uuid::new_v4(),
            day,
            start_time,
            end_time,
            consultation,
        }
    }

    /// Checks whether the record has been persisted
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn consultation() -> ConsultationRequest {
        ConsultationRequest {
            id: 42,
            folio: "INT-2026-0042".to_string(),
        }
    }

    #[test]
    fn new_availability_is_not_persisted() {
        let availability = Availability::new(
            NaiveDate::from_ymd_opt(2026, 3, 16).unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            consultation(),
        );

        assert!(availability.id.is_none());
        assert!(!availability.is_persisted());
        assert_eq!(availability.consultation.id, 42);
    }

    #[test]
    fn each_new_availability_gets_a_distinct_external_id() {
        let day = NaiveDate::from_ymd_opt(2026, 3, 16).unwrap();
        let start = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        let end = NaiveTime::from_hms_opt(10, 0, 0).unwrap();

        let first = Availability::new(day, start, end, consultation());
        let second = Availability::new(day, start, end, consultation());
        assert_ne!(first.uuid, second.uuid);
    }

    #[test]
    fn serializes_with_storage_column_names() {
        let availability = Availability::new(
            NaiveDate::from_ymd_opt(2026, 3, 16).unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            consultation(),
        );

        let doc = serde_json::to_value(&availability).unwrap();
        assert!(doc.get("dia").is_some());
        assert!(doc.get("hora_inicio").is_some());
        assert_eq!(doc["nid_interconsulta"]["id"], 42);
    }
}
