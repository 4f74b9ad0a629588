//! Domain entities representing core business objects.

pub mod availability;
pub mod record;
pub mod room;

// Re-export commonly used types
pub use availability::{Availability, ConsultationRequest};
pub use record::DomainRecord;
pub use room::Room;
