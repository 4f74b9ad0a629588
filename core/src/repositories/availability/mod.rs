//! Availability repository module.

mod r#trait;
pub use r#trait::AvailabilityStore;

mod repository;
pub use repository::AvailabilityRepository;

mod guards;
pub use guards::{ensure_availability, ensure_external_id, ensure_found, ensure_updatable};

mod mock;
pub use mock::MockAvailabilityStore;

#[cfg(test)]
mod tests;
