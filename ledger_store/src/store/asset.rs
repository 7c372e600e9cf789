//! AssetRepository implementation for AssetStore
//!
//! Listing and snapshot reads run on the pool. Inserts, updates, deletes and
//! locked reads run on the connection of the caller's transaction.

use super::binding::bind_json_param;
use super::{AssetStore, LedgerTransaction};
use crate::errors::StoreError;
use crate::listing::{fetch_with_count, AssetQuery, ListFilter};
use crate::models::{Asset, AssetCategory, AssetId, AssetView, UserId, ASSETS_TABLE};
use crate::traits::{AssetRepository, Lookup};
use async_trait::async_trait;

const INSERT_ASSET_SQL: &str = "INSERT INTO assets (name, category_id, user_id, amount, purchase_price, status) \
     VALUES ($1, $2, $3, $4, $5, $6) RETURNING id";

const UPDATE_ASSET_SQL: &str = "UPDATE assets SET name = $1, category_id = $2, amount = $3, purchase_price = $4, status = $5 \
     WHERE user_id = $6 AND id = $7";

const DELETE_ASSET_SQL: &str = "DELETE FROM assets WHERE user_id = $1 AND id = $2";

fn asset_key(id: AssetId, user_id: UserId) -> String {
    format!("id={} user_id={}", id, user_id)
}

#[async_trait]
impl AssetRepository for AssetStore {
    type Tx = LedgerTransaction<'static>;

    async fn begin(&self) -> Result<Self::Tx, StoreError> {
        self.begin_transaction().await
    }

    async fn commit(&self, tx: Self::Tx) -> Result<(), StoreError> {
        tx.commit().await
    }

    async fn list_categories(&self, user_id: UserId) -> Result<Vec<AssetCategory>, StoreError> {
        self.categories_for(user_id).await
    }

    async fn list_assets(
        &self,
        user_id: UserId,
        filter: &ListFilter,
    ) -> Result<(Vec<AssetView>, i64), StoreError> {
        let queries = AssetQuery::listing(user_id, filter);

        let fetch = async {
            let (sql, params) = queries.fetch.build();
            crate::debug_log!("[LIST_ASSETS] SQL: {}", sql);
            crate::debug_log!("[LIST_ASSETS] Params: {:?}", params);

            let mut query = sqlx::query_as::<_, AssetView>(&sql);
            for param in params {
                query = bind_json_param!(query, param);
            }
            query
                .fetch_all(&self.db_pool)
                .await
                .map_err(|e| StoreError::database_operation(ASSETS_TABLE, "list_assets", e))
        };

        let count = async {
            let (sql, params) = queries.count.build();
            crate::debug_log!("[COUNT_ASSETS] SQL: {}", sql);

            let mut query = sqlx::query_scalar::<_, i64>(&sql);
            for param in params {
                query = bind_json_param!(query, param);
            }
            query
                .fetch_one(&self.db_pool)
                .await
                .map_err(|e| StoreError::database_operation(ASSETS_TABLE, "count_assets", e))
        };

        let (rows, total) = fetch_with_count(fetch, count).await?;
        tracing::debug!(user_id, rows = rows.len(), total, "listed assets");
        Ok((rows, total))
    }

    async fn insert(&self, tx: &mut Self::Tx, asset: &Asset) -> Result<AssetId, StoreError> {
        crate::debug_log!("[INSERT] SQL: {}", INSERT_ASSET_SQL);

        let id = sqlx::query_scalar::<_, AssetId>(INSERT_ASSET_SQL)
            .bind(asset.name.as_str())
            .bind(asset.category_id)
            .bind(asset.user_id)
            .bind(asset.amount)
            .bind(asset.purchase_price)
            .bind(asset.status.as_str())
            .fetch_one(tx.connection())
            .await
            .map_err(|e| StoreError::database_operation(ASSETS_TABLE, "insert", e))?;

        tracing::debug!(asset_id = id, user_id = asset.user_id, "inserted asset");
        Ok(id)
    }

    async fn get_by_id<'t>(
        &self,
        id: AssetId,
        user_id: UserId,
        lookup: Lookup<'t, Self::Tx>,
    ) -> Result<AssetView, StoreError> {
        let locking = lookup.is_locking();
        let operation = if locking { "get_by_id_for_update" } else { "get_by_id" };
        let (sql, params) = AssetQuery::point(id, user_id, locking).build();

        crate::debug_log!("[GET_BY_ID] SQL: {}", sql);
        crate::debug_log!("[GET_BY_ID] Params: {:?}", params);

        let mut query = sqlx::query_as::<_, AssetView>(&sql);
        for param in params {
            query = bind_json_param!(query, param);
        }

        let row = match lookup {
            Lookup::Snapshot => query.fetch_optional(&self.db_pool).await,
            Lookup::ForUpdate(tx) => query.fetch_optional(tx.connection()).await,
        }
        .map_err(|e| StoreError::database_operation(ASSETS_TABLE, operation, e))?;

        row.ok_or_else(|| StoreError::not_found("asset", asset_key(id, user_id)))
    }

    async fn update(
        &self,
        tx: &mut Self::Tx,
        asset: &Asset,
        id: AssetId,
        user_id: UserId,
    ) -> Result<(), StoreError> {
        crate::debug_log!("[UPDATE] SQL: {}", UPDATE_ASSET_SQL);

        let result = sqlx::query(UPDATE_ASSET_SQL)
            .bind(asset.name.as_str())
            .bind(asset.category_id)
            .bind(asset.amount)
            .bind(asset.purchase_price)
            .bind(asset.status.as_str())
            .bind(user_id)
            .bind(id)
            .execute(tx.connection())
            .await
            .map_err(|e| StoreError::database_operation(ASSETS_TABLE, "update", e))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("asset", asset_key(id, user_id)));
        }

        tracing::debug!(asset_id = id, user_id, "updated asset");
        Ok(())
    }

    async fn delete(&self, tx: &mut Self::Tx, id: AssetId, user_id: UserId) -> Result<bool, StoreError> {
        crate::debug_log!("[DELETE] SQL: {}", DELETE_ASSET_SQL);

        let result = sqlx::query(DELETE_ASSET_SQL)
            .bind(user_id)
            .bind(id)
            .execute(tx.connection())
            .await
            .map_err(|e| StoreError::database_operation(ASSETS_TABLE, "delete", e))?;

        Ok(result.rows_affected() > 0)
    }
}
