/// A table in a FROM or JOIN position, with an optional alias
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    pub table: String,
    pub alias: Option<String>,
}

impl TableRef {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            alias: None,
        }
    }

    /// Add an alias for the table
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Get the table reference (alias if present, otherwise table name)
    pub fn reference(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.table)
    }

    pub fn to_sql(&self) -> String {
        match &self.alias {
            Some(alias) => format!("{} AS {}", self.table, alias),
            None => self.table.clone(),
        }
    }
}

/// Represents the type of SQL JOIN operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinType {
    /// INNER JOIN - returns records that have matching values in both tables
    Inner,
    /// LEFT JOIN - returns all records from the left table and matched records from the right table
    Left,
}

impl JoinType {
    /// Convert JoinType to SQL string
    pub fn to_sql(&self) -> &'static str {
        match self {
            JoinType::Inner => "INNER JOIN",
            JoinType::Left => "LEFT JOIN",
        }
    }
}

/// Column equalities ANDed together in the ON clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinCondition {
    pub pairs: Vec<(String, String)>,
}

/// Represents a complete JOIN clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinClause {
    pub join_type: JoinType,
    pub table: TableRef,
    pub condition: JoinCondition,
}

impl JoinClause {
    /// Create a new JOIN clause with a single ON equality
    pub fn new_on(
        join_type: JoinType,
        table: TableRef,
        left_field: impl Into<String>,
        right_field: impl Into<String>,
    ) -> Self {
        Self {
            join_type,
            table,
            condition: JoinCondition {
                pairs: vec![(left_field.into(), right_field.into())],
            },
        }
    }

    /// Add another equality to the ON clause.
    ///
    /// Used for co-scoping joins where both sides must also agree on the
    /// owning tenant, e.g. `a.user_id = b.user_id`.
    pub fn and_on(mut self, left_field: impl Into<String>, right_field: impl Into<String>) -> Self {
        self.condition.pairs.push((left_field.into(), right_field.into()));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_type_to_sql() {
        assert_eq!(JoinType::Inner.to_sql(), "INNER JOIN");
        assert_eq!(JoinType::Left.to_sql(), "LEFT JOIN");
    }

    #[test]
    fn test_join_clause_new_on() {
        let join = JoinClause::new_on(
            JoinType::Inner,
            TableRef::new("user_asset_categories"),
            "assets.category_id",
            "user_asset_categories.id",
        );

        assert_eq!(join.join_type, JoinType::Inner);
        assert_eq!(join.table.table, "user_asset_categories");
        assert_eq!(join.table.alias, None);
        assert_eq!(
            join.condition.pairs,
            vec![(
                "assets.category_id".to_string(),
                "user_asset_categories.id".to_string()
            )]
        );
    }

    #[test]
    fn test_join_clause_and_on_keeps_order() {
        let join = JoinClause::new_on(
            JoinType::Inner,
            TableRef::new("user_asset_categories").with_alias("b"),
            "a.category_id",
            "b.id",
        )
        .and_on("a.user_id", "b.user_id");

        assert_eq!(join.condition.pairs.len(), 2);
        assert_eq!(join.condition.pairs[1].0, "a.user_id");
        assert_eq!(join.table.reference(), "b");
    }

    #[test]
    fn test_table_ref_without_alias() {
        let table = TableRef::new("assets");
        assert_eq!(table.reference(), "assets");
        assert_eq!(table.to_sql(), "assets");
        assert_eq!(table.with_alias("a").to_sql(), "assets AS a");
    }
}
