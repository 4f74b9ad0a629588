//! Shared utilities and common types for the Agenda server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error response structures
//! - Query types (filters, pagination windows)

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{AppConfig, DatabaseConfig, Environment, LoggingConfig};
pub use errors::{error_codes, ErrorResponse};
pub use types::{Filters, Page};
