//! Ledger Store - query and transaction core for the fintrack asset ledger
//!
//! This crate owns everything that talks to PostgreSQL: the domain models,
//! a small SQL query builder, the asset listing engine (filter and pagination
//! compilation, fetch + count assembled from one base query and executed
//! concurrently) and the transactional asset store with row-level locking.

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

pub mod errors;
pub mod listing;
pub mod models;
pub mod prelude;
pub mod query_builder;
pub mod store;
pub mod traits;

pub use errors::StoreError;
pub use listing::{fetch_with_count, AssetQuery, ListFilter, PaginationRequest, SortField, SortSpec};
pub use models::{Asset, AssetCategory, AssetId, AssetStatus, AssetView, CategoryId, UserId};
pub use query_builder::{QueryBuilder, QueryFilter, QueryOperator, SortOrder};
pub use store::{AssetStore, LedgerTransaction};
pub use traits::{AssetRepository, Lookup};

use sqlx::PgPool;

pub type DbPool = PgPool;
