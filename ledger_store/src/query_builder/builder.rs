//! Query builder utilities
//!
//! This module provides SQL query construction utilities.

use crate::query_builder::aggregation::SelectField;
use crate::query_builder::filter::QueryFilter;
use crate::query_builder::join::{JoinClause, TableRef};
use crate::query_builder::locking::RowLock;
use crate::query_builder::ordering::SortOrder;
use crate::query_builder::pagination::Pagination;
use crate::query_builder::sql_generation::SqlGenerator;
use serde_json::Value;

/// Query builder for SELECT statements over one base table and its joins
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    pub(crate) from: TableRef,
    pub(crate) select_fields: Vec<SelectField>,
    pub(crate) joins: Vec<JoinClause>,
    pub(crate) conditions: Vec<QueryFilter>,
    pub(crate) order_by: Vec<(String, SortOrder)>,
    pub(crate) pagination: Pagination,
    pub(crate) lock: Option<RowLock>,
}

impl QueryBuilder {
    pub fn new(from: TableRef) -> Self {
        Self {
            from,
            select_fields: Vec::new(),
            joins: Vec::new(),
            conditions: Vec::new(),
            order_by: Vec::new(),
            pagination: Pagination::new(),
            lock: None,
        }
    }

    /// Replace the projection
    pub fn select_fields(mut self, fields: Vec<SelectField>) -> Self {
        self.select_fields = fields;
        self
    }

    pub fn join(mut self, join: JoinClause) -> Self {
        self.joins.push(join);
        self
    }

    /// Add a filter condition
    pub fn filter(mut self, filter: QueryFilter) -> Self {
        self.conditions.push(filter);
        self
    }

    /// Add multiple filters (combined with AND)
    pub fn filters(mut self, filters: Vec<QueryFilter>) -> Self {
        self.conditions.extend(filters);
        self
    }

    /// Append an ordering key; earlier keys take precedence
    pub fn order_by(mut self, field: &str, order: SortOrder) -> Self {
        self.order_by.push((field.to_string(), order));
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.pagination = self.pagination.with_limit(limit);
        self
    }

    pub fn offset(mut self, offset: i64) -> Self {
        self.pagination = self.pagination.with_offset(offset);
        self
    }

    pub fn lock(mut self, lock: RowLock) -> Self {
        self.lock = Some(lock);
        self
    }

    pub fn conditions(&self) -> &[QueryFilter] {
        &self.conditions
    }

    pub fn ordering(&self) -> &[(String, SortOrder)] {
        &self.order_by
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Derive the row-count variant of this query.
    ///
    /// Keeps FROM, joins and filters; replaces the projection with
    /// `COUNT(*) AS total` and drops ordering, pagination and locking, so the
    /// count reflects the filtered, unpaginated population.
    pub fn to_count(&self) -> Self {
        Self {
            from: self.from.clone(),
            select_fields: vec![SelectField::count_all().with_alias("total")],
            joins: self.joins.clone(),
            conditions: self.conditions.clone(),
            order_by: Vec::new(),
            pagination: Pagination::new(),
            lock: None,
        }
    }

    /// Build WHERE clause
    pub fn build_where_clause(&self) -> (String, Vec<Value>) {
        SqlGenerator::build_where_clause(&self.conditions)
    }

    /// Build ORDER BY clause
    pub fn build_order_clause(&self) -> String {
        SqlGenerator::build_order_clause(&self.order_by)
    }

    /// Build LIMIT/OFFSET clause
    pub fn build_limit_clause(&self) -> String {
        self.pagination.to_sql()
    }

    /// Build the complete statement and its positional parameters
    pub fn build(&self) -> (String, Vec<Value>) {
        let (where_clause, values) = self.build_where_clause();

        let parts = [
            format!("SELECT {}", SqlGenerator::build_select_clause(&self.select_fields)),
            format!("FROM {}", self.from.to_sql()),
            SqlGenerator::build_join_clause(&self.joins),
            where_clause,
            self.build_order_clause(),
            self.build_limit_clause(),
            self.lock.as_ref().map(RowLock::to_sql).unwrap_or_default(),
        ];

        let sql = parts
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        (sql, values)
    }
}
