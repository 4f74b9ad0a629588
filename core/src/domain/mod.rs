//! Domain layer containing business entities and record typing.

pub mod entities;

// Re-export commonly used domain types
pub use entities::*;
