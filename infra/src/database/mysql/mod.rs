//! MySQL implementations of the core storage contracts

mod availability_store_impl;

pub use availability_store_impl::MySqlAvailabilityStore;
