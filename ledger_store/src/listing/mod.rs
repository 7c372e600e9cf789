//! Asset listing engine
//!
//! Turns a [`ListFilter`] into a paginated fetch query and a matching count
//! query over the same filtered base, and runs both concurrently.

pub mod assembler;
pub mod executor;
pub mod filter;
pub mod pagination;

pub use assembler::{AssetQuery, ListingQueries};
pub use executor::fetch_with_count;
pub use filter::ListFilter;
pub use pagination::{PaginationRequest, SortField, SortKey, SortSpec};
