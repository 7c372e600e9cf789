//! Clause rendering shared by the query builder

use crate::query_builder::aggregation::SelectField;
use crate::query_builder::filter::QueryFilter;
use crate::query_builder::join::JoinClause;
use crate::query_builder::ordering::SortOrder;
use serde_json::Value;

pub struct SqlGenerator;

impl SqlGenerator {
    /// Build WHERE clause from conditions, numbering placeholders from $1
    pub fn build_where_clause(conditions: &[QueryFilter]) -> (String, Vec<Value>) {
        if conditions.is_empty() {
            return ("".to_string(), Vec::new());
        }

        let mut values = Vec::with_capacity(conditions.len());

        let conditions_sql = conditions
            .iter()
            .map(|condition| {
                values.push(condition.value.clone());
                format!(
                    "{} {} ${}",
                    condition.field,
                    condition.operator.to_sql(),
                    values.len()
                )
            })
            .collect::<Vec<_>>()
            .join(" AND ");

        (format!("WHERE {}", conditions_sql), values)
    }

    /// Build ORDER BY clause
    pub fn build_order_clause(order_by: &[(String, SortOrder)]) -> String {
        if order_by.is_empty() {
            return "".to_string();
        }

        let order_items: Vec<String> = order_by
            .iter()
            .map(|(field, order)| format!("{} {}", field, order.to_sql()))
            .collect();

        format!("ORDER BY {}", order_items.join(", "))
    }

    /// Build SELECT list; an empty projection selects everything
    pub fn build_select_clause(fields: &[SelectField]) -> String {
        if fields.is_empty() {
            return "*".to_string();
        }

        fields
            .iter()
            .map(SelectField::to_sql)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Build JOIN clauses
    pub fn build_join_clause(joins: &[JoinClause]) -> String {
        joins
            .iter()
            .map(|join| {
                let on = join
                    .condition
                    .pairs
                    .iter()
                    .map(|(left, right)| format!("{} = {}", left, right))
                    .collect::<Vec<_>>()
                    .join(" AND ");

                format!("{} {} ON {}", join.join_type.to_sql(), join.table.to_sql(), on)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
