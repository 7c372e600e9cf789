use crate::errors::StoreError;
use crate::models::{AssetCategory, UserId, CATEGORIES_TABLE};
use crate::query_builder::{QueryBuilder, QueryFilter, SelectField, SortOrder, TableRef};
use crate::store::binding::bind_json_param;
use crate::DbPool;
use serde_json::json;

/// PostgreSQL-backed asset store.
///
/// Reads outside a transaction go straight to the pool; locked reads and all
/// writes go through a [`LedgerTransaction`](crate::LedgerTransaction).
#[derive(Clone)]
pub struct AssetStore {
    pub(crate) db_pool: DbPool,
}

impl std::fmt::Debug for AssetStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetStore")
            .field("pool_size", &self.db_pool.size())
            .field("idle", &self.db_pool.num_idle())
            .finish()
    }
}

impl AssetStore {
    pub fn new(db_pool: DbPool) -> Self {
        Self { db_pool }
    }

    /// Get a reference to the underlying pool
    pub fn pool(&self) -> &DbPool {
        &self.db_pool
    }

    /// Create a category for a user. Categories are otherwise read-only to the
    /// ledger; this exists for provisioning.
    pub async fn create_category(&self, user_id: UserId, name: &str) -> Result<AssetCategory, StoreError> {
        sqlx::query_as::<_, AssetCategory>(
            "INSERT INTO user_asset_categories (user_id, name) VALUES ($1, $2) RETURNING id, name",
        )
        .bind(user_id)
        .bind(name)
        .fetch_one(&self.db_pool)
        .await
        .map_err(|e| StoreError::database_operation(CATEGORIES_TABLE, "create_category", e))
    }

    pub(crate) async fn categories_for(&self, user_id: UserId) -> Result<Vec<AssetCategory>, StoreError> {
        let (sql, params) = QueryBuilder::new(TableRef::new(CATEGORIES_TABLE))
            .select_fields(vec![SelectField::field("id"), SelectField::field("name")])
            .filter(QueryFilter::eq("user_id", json!(user_id)))
            .order_by("id", SortOrder::Asc)
            .build();

        crate::debug_log!("[LIST_CATEGORIES] SQL: {}", sql);

        let mut query = sqlx::query_as::<_, AssetCategory>(&sql);
        for param in params {
            query = bind_json_param!(query, param);
        }

        query
            .fetch_all(&self.db_pool)
            .await
            .map_err(|e| StoreError::database_operation(CATEGORIES_TABLE, "list_categories", e))
    }
}
