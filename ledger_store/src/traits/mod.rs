//! Traits for database operations
//!
//! This module contains the seam between the asset store and the service
//! layer that orchestrates it.

pub mod repository;

pub use repository::{AssetRepository, Lookup};
