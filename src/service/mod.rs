//! Asset service layer
//!
//! Orchestrates the ledger store for one authenticated caller and maps every
//! outcome onto the [`ApiResponse`] envelope.

pub mod asset;
pub mod context;
pub mod error;
pub mod request;
pub mod response;
pub mod validation;


pub use asset::AssetService;
pub use context::RequestContext;
pub use error::ServiceError;
pub use request::{AssetRequest, SubmitAssetRequest, UpdateAssetRequest};
pub use response::{status, ApiResponse, PaginationMeta};
pub use validation::ValidationErrors;
