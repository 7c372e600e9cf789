//! Error types for the fintrack crate
//!
//! `FintrackError` covers coordinator-level failures: connecting, migrating
//! and loading configuration. Per-request failures are `ServiceError`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FintrackError {
    #[error("Database connection error: {0}")]
    DatabaseConnection(#[from] sqlx::Error),

    #[error("Migration step '{step}' failed: {source}")]
    Migration {
        step: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Logging initialisation failed: {0}")]
    Logging(String),
}

impl FintrackError {
    pub fn migration(step: &'static str, source: sqlx::Error) -> Self {
        Self::Migration { step, source }
    }
}
