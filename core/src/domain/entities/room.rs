//! Room entity: a passive room assignment record.

use serde::{Deserialize, Serialize};

/// Room assignment record
///
/// A pure storage shape with no behavior: no guards and no update or
/// lookup-by-id code path exist for rooms. Serialized field names follow the
/// storage column names (`edificio`, `no_asignacion`, `nota`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Internal identifier, assigned by the backend
    pub id: Option<i64>,

    /// Building the room is in
    #[serde(rename = "edificio")]
    pub building: String,

    /// Assignment code within the building
    #[serde(rename = "no_asignacion")]
    pub assignment_code: String,

    /// Optional free-form note
    #[serde(rename = "nota")]
    pub note: Option<String>,
}

impl Room {
    /// Creates a new, not-yet-persisted Room
    pub fn new(building: impl Into<String>, assignment_code: impl Into<String>) -> Self {
        Self {
            id: None,
            building: building.into(),
            assignment_code: assignment_code.into(),
            note: None,
        }
    }
}
