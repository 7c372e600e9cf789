//! Convenience re-exports for common ledger-store usage

// Repository surface
pub use crate::traits::{AssetRepository, Lookup};

// Error types
pub use crate::errors::StoreError;

// Store and transactions
pub use crate::store::{AssetStore, LedgerTransaction};

// Domain models
pub use crate::models::{Asset, AssetCategory, AssetId, AssetStatus, AssetView, CategoryId, UserId};

// Listing engine
pub use crate::listing::{fetch_with_count, AssetQuery, ListFilter, PaginationRequest, SortSpec};

// Query building
pub use crate::query_builder::{QueryBuilder, QueryFilter, SortOrder};

// Common external dependencies that are frequently used
pub use async_trait::async_trait;
pub use rust_decimal::Decimal;
pub use sqlx::PgPool;
