//! Convenience re-exports for common Fintrack usage
//!
//! # Example
//!
//! ```rust
//! use fintrack::prelude::*;
//! ```

// Core components
pub use crate::core::Fintrack;
pub use crate::errors::FintrackError;
pub use crate::logging::init_tracing;

// Service layer
pub use crate::service::{
    status, ApiResponse, AssetRequest, AssetService, PaginationMeta, RequestContext,
    ServiceError, SubmitAssetRequest, UpdateAssetRequest, ValidationErrors,
};

// Re-export centralized config
pub use config::{AppConfig, DatabaseConfig, LoggingConfig};

// Ledger store types
pub use ledger_store::prelude::*;

// Common external dependencies
pub use anyhow;
pub use sqlx;
pub use tokio;
