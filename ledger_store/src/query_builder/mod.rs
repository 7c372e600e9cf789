//! Query builder utilities
//!
//! This module provides SQL query construction utilities. Every value that
//! originates outside the crate is carried as a bound parameter; only
//! identifiers chosen by the crate itself end up in the SQL text.

pub mod aggregation;
pub mod builder;
pub mod filter;
pub mod join;
pub mod locking;
pub mod ordering;
pub mod pagination;
pub mod sql_generation;


pub use aggregation::SelectField;
pub use builder::QueryBuilder;
pub use filter::{QueryFilter, QueryOperator};
pub use join::{JoinClause, JoinCondition, JoinType, TableRef};
pub use locking::RowLock;
pub use ordering::SortOrder;
pub use pagination::Pagination;
