use crate::listing::pagination::PaginationRequest;
use crate::query_builder::QueryFilter;
use serde::{Deserialize, Serialize};

/// Listing criteria as received from the caller.
///
/// Every field is optional and independently so. An absent or empty text
/// filter adds no constraint at all; it is never an exact match on "".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFilter {
    pub name: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationRequest,
}

impl ListFilter {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_pagination(mut self, pagination: PaginationRequest) -> Self {
        self.pagination = pagination;
        self
    }

    /// Compile the text filters into case-insensitive substring predicates
    /// against the joined asset/category columns.
    pub fn predicates(&self) -> Vec<QueryFilter> {
        [
            ("a.name", self.name.as_deref()),
            ("b.name", self.category.as_deref()),
            ("a.status", self.status.as_deref()),
        ]
        .into_iter()
        .filter_map(|(column, needle)| match needle {
            Some(needle) if !needle.is_empty() => Some(contains(column, needle)),
            _ => None,
        })
        .collect()
    }
}

/// `column ILIKE '%needle%'`, with the needle carried as a bound parameter
fn contains(column: &str, needle: &str) -> QueryFilter {
    QueryFilter::ilike(column, &format!("%{}%", needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query_builder::QueryOperator;
    use serde_json::json;

    #[test]
    fn test_absent_filters_add_no_predicates() {
        assert!(ListFilter::default().predicates().is_empty());
    }

    #[test]
    fn test_empty_string_is_treated_as_absent() {
        let filter = ListFilter::default().with_name("").with_status("");
        assert!(filter.predicates().is_empty());
    }

    #[test]
    fn test_each_filter_maps_to_its_column() {
        let filter = ListFilter::default()
            .with_name("lap")
            .with_category("Electro")
            .with_status("active");

        let predicates = filter.predicates();
        assert_eq!(predicates.len(), 3);

        assert_eq!(predicates[0].field, "a.name");
        assert_eq!(predicates[0].value, json!("%lap%"));
        assert_eq!(predicates[1].field, "b.name");
        assert_eq!(predicates[1].value, json!("%Electro%"));
        assert_eq!(predicates[2].field, "a.status");
        assert!(predicates
            .iter()
            .all(|p| p.operator == QueryOperator::ILike));
    }

    #[test]
    fn test_deserializes_from_flat_query_params() {
        let filter: ListFilter = serde_json::from_value(json!({
            "name": "gold",
            "page": 2,
            "limit": 10,
            "sort": "name desc"
        }))
        .unwrap();

        assert_eq!(filter.name.as_deref(), Some("gold"));
        assert_eq!(filter.category, None);
        assert_eq!(filter.pagination.page, Some(2));
        assert_eq!(filter.pagination.limit, Some(10));
        assert_eq!(filter.pagination.sort.as_deref(), Some("name desc"));
    }
}
