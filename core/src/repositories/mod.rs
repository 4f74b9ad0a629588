//! Repository layer: validation-guarded data access contracts.

pub mod availability;

pub use availability::{AvailabilityRepository, AvailabilityStore, MockAvailabilityStore};
