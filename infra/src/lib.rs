//! # Infrastructure Layer
//!
//! Concrete persistence for the Agenda backend: MySQL implementations of the
//! core storage contracts, plus connection-pool and configuration plumbing.

pub mod database;

/// Configuration module for infrastructure services
pub mod config {
    //! Configuration management for infrastructure services

    use agenda_shared::config::DatabaseConfig;

    /// Load database configuration from the environment
    ///
    /// Reads a `.env` file when present, then falls back to process
    /// environment variables.
    pub fn load_database_config() -> DatabaseConfig {
        dotenvy::dotenv().ok();
        DatabaseConfig::from_env()
    }
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
