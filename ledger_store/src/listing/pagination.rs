use crate::query_builder::{QueryBuilder, SortOrder};
use serde::{Deserialize, Serialize};

/// Sort and page directives of a listing request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationRequest {
    /// Comma-separated `field [asc|desc]` pairs, primary key first
    pub sort: Option<String>,
    /// 1-based page number
    pub page: Option<i64>,
    /// Page size
    pub limit: Option<i64>,
}

impl PaginationRequest {
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        Self {
            sort: None,
            page,
            limit,
        }
    }

    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// `(limit, offset)` when both page and limit are present and positive.
    ///
    /// Anything else means "no limiting": the whole filtered set is returned.
    pub fn limit_offset(&self) -> Option<(i64, i64)> {
        match (self.page, self.limit) {
            (Some(page), Some(limit)) if page > 0 && limit > 0 => {
                Some((limit, (page - 1).saturating_mul(limit)))
            }
            _ => None,
        }
    }

    pub fn sort_spec(&self) -> SortSpec {
        self.sort.as_deref().map(SortSpec::parse).unwrap_or_default()
    }

    /// Append ordering and LIMIT/OFFSET to a fetch query
    pub fn apply(&self, mut builder: QueryBuilder) -> QueryBuilder {
        for key in self.sort_spec().keys() {
            builder = builder.order_by(key.field.column(), key.order);
        }

        if let Some((limit, offset)) = self.limit_offset() {
            builder = builder.limit(limit).offset(offset);
        }

        builder
    }
}

/// Columns of the asset projection that a listing may be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Name,
    Category,
    CategoryId,
    Amount,
    PurchasePrice,
    Status,
    TotalPurchasePrice,
}

impl SortField {
    const ALL: [SortField; 8] = [
        SortField::Id,
        SortField::Name,
        SortField::Category,
        SortField::CategoryId,
        SortField::Amount,
        SortField::PurchasePrice,
        SortField::Status,
        SortField::TotalPurchasePrice,
    ];

    /// Name as exposed to callers (the projected column name)
    pub fn name(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Name => "name",
            SortField::Category => "category",
            SortField::CategoryId => "category_id",
            SortField::Amount => "amount",
            SortField::PurchasePrice => "purchase_price",
            SortField::Status => "status",
            SortField::TotalPurchasePrice => "total_purchase_price",
        }
    }

    /// Qualified expression used in ORDER BY
    pub fn column(&self) -> &'static str {
        match self {
            SortField::Id => "a.id",
            SortField::Name => "a.name",
            SortField::Category => "b.name",
            SortField::CategoryId => "a.category_id",
            SortField::Amount => "a.amount",
            SortField::PurchasePrice => "a.purchase_price",
            SortField::Status => "a.status",
            SortField::TotalPurchasePrice => "a.amount * a.purchase_price",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(name))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: SortField,
    pub order: SortOrder,
}

/// Parsed multi-column sort specification
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortSpec(Vec<SortKey>);

impl SortSpec {
    /// Parse `"name desc, amount"` style input.
    ///
    /// Direction defaults to ascending. A pair with an unknown field, an
    /// unrecognised direction or trailing tokens is skipped on its own; the
    /// remaining pairs still apply in the order given.
    pub fn parse(spec: &str) -> Self {
        let keys = spec
            .split(',')
            .map(str::trim)
            .filter(|pair| !pair.is_empty())
            .filter_map(|pair| {
                let key = Self::parse_pair(pair);
                if key.is_none() {
                    tracing::warn!(pair, "skipping unrecognised sort directive");
                }
                key
            })
            .collect();

        SortSpec(keys)
    }

    fn parse_pair(pair: &str) -> Option<SortKey> {
        let mut tokens = pair.split_whitespace();
        let field = SortField::from_name(tokens.next()?)?;
        let order = match tokens.next() {
            Some(direction) => SortOrder::parse(direction)?,
            None => SortOrder::Asc,
        };

        if tokens.next().is_some() {
            return None;
        }

        Some(SortKey { field, order })
    }

    pub fn keys(&self) -> &[SortKey] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query_builder::TableRef;

    fn key(field: SortField, order: SortOrder) -> SortKey {
        SortKey { field, order }
    }

    #[test]
    fn test_sort_direction_defaults_to_ascending() {
        let spec = SortSpec::parse("name");
        assert_eq!(spec.keys(), &[key(SortField::Name, SortOrder::Asc)]);
    }

    #[test]
    fn test_sort_pairs_keep_their_order() {
        let spec = SortSpec::parse("status DESC, amount asc,name");
        assert_eq!(
            spec.keys(),
            &[
                key(SortField::Status, SortOrder::Desc),
                key(SortField::Amount, SortOrder::Asc),
                key(SortField::Name, SortOrder::Asc),
            ]
        );
    }

    #[test]
    fn test_garbled_pairs_are_skipped_individually() {
        let spec = SortSpec::parse("password desc, name sideways, ,amount desc, id asc extra, category");
        assert_eq!(
            spec.keys(),
            &[
                key(SortField::Amount, SortOrder::Desc),
                key(SortField::Category, SortOrder::Asc),
            ]
        );
    }

    #[test]
    fn test_sort_field_names_are_case_insensitive() {
        assert_eq!(SortField::from_name("Total_Purchase_Price"), Some(SortField::TotalPurchasePrice));
        assert_eq!(SortField::from_name("a.name"), None);
    }

    #[test]
    fn test_limit_offset_arithmetic() {
        assert_eq!(PaginationRequest::new(Some(1), Some(5)).limit_offset(), Some((5, 0)));
        assert_eq!(PaginationRequest::new(Some(3), Some(5)).limit_offset(), Some((5, 10)));
        assert_eq!(PaginationRequest::new(Some(10), Some(5)).limit_offset(), Some((5, 45)));
    }

    #[test]
    fn test_missing_or_non_positive_page_or_limit_disables_limiting() {
        assert_eq!(PaginationRequest::new(None, Some(5)).limit_offset(), None);
        assert_eq!(PaginationRequest::new(Some(2), None).limit_offset(), None);
        assert_eq!(PaginationRequest::new(Some(0), Some(5)).limit_offset(), None);
        assert_eq!(PaginationRequest::new(Some(2), Some(0)).limit_offset(), None);
        assert_eq!(PaginationRequest::new(Some(-1), Some(-5)).limit_offset(), None);
        assert_eq!(PaginationRequest::default().limit_offset(), None);
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let (_, offset) = PaginationRequest::new(Some(i64::MAX), Some(100))
            .limit_offset()
            .unwrap();
        assert_eq!(offset, i64::MAX);
    }

    #[test]
    fn test_apply_adds_order_and_limit() {
        let builder = QueryBuilder::new(TableRef::new("assets").with_alias("a"));
        let request = PaginationRequest::new(Some(2), Some(10)).with_sort("total_purchase_price desc, name");

        let builder = request.apply(builder);
        assert_eq!(
            builder.build_order_clause(),
            "ORDER BY a.amount * a.purchase_price DESC, a.name ASC"
        );
        assert_eq!(builder.build_limit_clause(), "LIMIT 10 OFFSET 10");
    }

    #[test]
    fn test_apply_without_directives_is_a_full_scan() {
        let builder = QueryBuilder::new(TableRef::new("assets").with_alias("a"));
        let builder = PaginationRequest::default().apply(builder);
        assert!(builder.ordering().is_empty());
        assert!(builder.pagination().is_empty());
    }
}
