//! # Agenda Core
//!
//! Core domain layer for the Agenda backend. This crate contains the domain
//! entities for the scheduling/availability domain, the classified error
//! type, the validation guards, and the repository abstraction that sits
//! between domain models and a relational store.

pub mod domain;
pub mod errors;
pub mod repositories;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
