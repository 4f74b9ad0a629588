//! Record typing for domain entities.

use super::availability::Availability;
use super::room::Room;

/// Trait distinguishing genuine domain records from arbitrary data
///
/// Repository operations accept any `DomainRecord`; whether a given record is
/// acceptable for a given repository is checked by the type-conformance guard
/// through [`DomainRecord::as_availability`] rather than by duck typing.
pub trait DomainRecord: Send + Sync {
    /// Internal identifier, if the record has been persisted
    fn record_id(&self) -> Option<i64>;

    /// Record type name, used in diagnostics
    fn record_type(&self) -> &'static str;

    /// Checked downcast to the availability entity
    ///
    /// Returns `Some` only for [`Availability`] records.
    fn as_availability(&self) -> Option<&Availability> {
        None
    }
}

impl DomainRecord for Availability {
    fn record_id(&self) -> Option<i64> {
        self.id
    }

    fn record_type(&self) -> &'static str {
        "availability"
    }

    fn as_availability(&self) -> Option<&Availability> {
        Some(self)
    }
}

impl DomainRecord for Room {
    fn record_id(&self) -> Option<i64> {
        self.id
    }

    fn record_type(&self) -> &'static str {
        "room"
    }
}
