//! # Fintrack
//!
//! A personal-finance asset ledger on PostgreSQL: users register categorized
//! assets and list them with free-text filters, multi-column sorting and
//! offset pagination. Mutations run as locked read-modify-write transactions.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fintrack::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::new(
//!         "localhost".to_string(), 5432, "fintrack".to_string(),
//!         "postgres".to_string(), "password".to_string(),
//!         1, 5, 30, 600, 3600,
//!     );
//!
//!     let fintrack = Fintrack::new(config).await?;
//!     fintrack.migrate().await?;
//!
//!     let category = fintrack.asset_store().create_category(7, "Precious").await?;
//!     let service = fintrack.asset_service();
//!     let ctx = RequestContext::authenticated(7);
//!
//!     let request = AssetRequest::new(
//!         "Gold Bar", category.id, Decimal::from(10), Decimal::new(5550, 2), AssetStatus::Active,
//!     );
//!     let created = service.submit(&ctx, request).await;
//!     assert_eq!(created.status_code, 201);
//!
//!     let filter = ListFilter::default().with_category("Precious");
//!     let listed = service.list(&ctx, &filter).await;
//!     println!("{:?}", listed.data);
//!
//!     Ok(())
//! }
//! ```

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

pub mod core;
pub mod errors;
pub mod logging;
pub mod migration;
pub mod prelude;
pub mod service;

// Re-export the main public types for convenience
pub use crate::core::Fintrack;
pub use errors::FintrackError;
pub use logging::init_tracing;
pub use service::{
    ApiResponse, AssetRequest, AssetService, PaginationMeta, RequestContext, ServiceError,
};

// Re-export centralized config
pub use config::{AppConfig, DatabaseConfig, LoggingConfig};

// Re-export internal crates used in the public API
pub use ledger_store;

// Re-export external dependencies used in public API
pub use async_trait;
pub use sqlx;
