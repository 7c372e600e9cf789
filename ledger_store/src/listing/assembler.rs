//! Query Assembler
//!
//! Every asset read goes through the same base: assets inner-joined to the
//! owner's categories on both the category id and the user id. An asset whose
//! category is missing or belongs to someone else never appears, which is
//! the authorization boundary for reads.

use crate::listing::filter::ListFilter;
use crate::models::{AssetId, UserId, ASSETS_TABLE, CATEGORIES_TABLE};
use crate::query_builder::{
    JoinClause, JoinType, QueryBuilder, QueryFilter, RowLock, SelectField, TableRef,
};
use serde_json::json;

const ASSET_ALIAS: &str = "a";
const CATEGORY_ALIAS: &str = "b";

/// The paginated fetch query and its unpaginated count twin
#[derive(Debug, Clone)]
pub struct ListingQueries {
    pub fetch: QueryBuilder,
    pub count: QueryBuilder,
}

pub struct AssetQuery;

impl AssetQuery {
    /// Projection shared by listing and point lookups
    pub fn projection() -> Vec<SelectField> {
        vec![
            SelectField::field("a.id"),
            SelectField::field("a.name"),
            SelectField::field("a.category_id"),
            SelectField::field_as("b.name", "category"),
            SelectField::field("a.amount"),
            SelectField::field("a.purchase_price"),
            SelectField::field("a.status"),
            SelectField::field_as("a.amount * a.purchase_price", "total_purchase_price"),
        ]
    }

    /// Joined, projected base scoped to one owner
    pub fn base(user_id: UserId) -> QueryBuilder {
        QueryBuilder::new(TableRef::new(ASSETS_TABLE).with_alias(ASSET_ALIAS))
            .select_fields(Self::projection())
            .join(
                JoinClause::new_on(
                    JoinType::Inner,
                    TableRef::new(CATEGORIES_TABLE).with_alias(CATEGORY_ALIAS),
                    "a.category_id",
                    "b.id",
                )
                .and_on("a.user_id", "b.user_id"),
            )
            .filter(QueryFilter::eq("a.user_id", json!(user_id)))
    }

    /// Build the fetch and count queries for one listing request.
    ///
    /// Both share the owner predicate and the compiled text filters; only the
    /// fetch query carries ordering and LIMIT/OFFSET.
    pub fn listing(user_id: UserId, filter: &ListFilter) -> ListingQueries {
        let filtered = Self::base(user_id).filters(filter.predicates());

        ListingQueries {
            count: filtered.to_count(),
            fetch: filter.pagination.apply(filtered),
        }
    }

    /// Point lookup by id and owner, optionally locking the asset row
    pub fn point(id: AssetId, user_id: UserId, for_update: bool) -> QueryBuilder {
        let query = Self::base(user_id).filter(QueryFilter::eq("a.id", json!(id)));

        if for_update {
            query.lock(RowLock::for_update_of(ASSET_ALIAS))
        } else {
            query
        }
    }
}
