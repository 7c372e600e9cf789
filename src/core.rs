//! Core Fintrack functionality
//!
//! The `Fintrack` coordinator owns the connection pool and hands out the
//! asset store and asset service built on top of it.

use sqlx::PgPool;
use std::time::Duration;

use crate::errors::FintrackError;
use crate::service::AssetService;
use config::DatabaseConfig;
use ledger_store::AssetStore;

/// Main coordinator that manages the database connection
#[derive(Debug, Clone)]
pub struct Fintrack {
    pool: PgPool,
}

impl Fintrack {
    /// Create new Fintrack with database connection
    pub async fn new(config: DatabaseConfig) -> Result<Self, FintrackError> {
        let connection_string = config.connection_string();

        let mut pool_options = sqlx::postgres::PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds));

        // Set max lifetime if specified
        if config.max_lifetime_seconds > 0 {
            pool_options =
                pool_options.max_lifetime(Duration::from_secs(config.max_lifetime_seconds));
        }

        let pool = pool_options.connect(&connection_string).await?;

        tracing::info!(
            host = %config.host,
            database = %config.database,
            max_connections = config.max_connections,
            "connected to database"
        );

        Ok(Self { pool })
    }

    /// Wrap an existing pool
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get database pool reference
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn asset_store(&self) -> AssetStore {
        AssetStore::new(self.pool.clone())
    }

    /// Asset service backed by the PostgreSQL store
    pub fn asset_service(&self) -> AssetService<AssetStore> {
        AssetService::new(self.asset_store())
    }

    /// Check database connection health
    pub async fn health_check(&self) -> Result<(), FintrackError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}
