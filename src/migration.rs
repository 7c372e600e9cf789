//! Schema bootstrap
//!
//! Creates the category and asset tables and their lookup indexes. Every
//! statement is idempotent, so `migrate` is safe to run on each start.

use crate::core::Fintrack;
use crate::errors::FintrackError;

const MIGRATION_STEPS: &[(&str, &str)] = &[
    (
        "create_user_asset_categories",
        "CREATE TABLE IF NOT EXISTS user_asset_categories (
            id BIGSERIAL PRIMARY KEY,
            user_id BIGINT NOT NULL,
            name TEXT NOT NULL
        )",
    ),
    (
        "create_assets",
        "CREATE TABLE IF NOT EXISTS assets (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR(100) NOT NULL,
            category_id BIGINT NOT NULL,
            user_id BIGINT NOT NULL,
            amount NUMERIC NOT NULL,
            purchase_price NUMERIC NOT NULL,
            status TEXT NOT NULL CHECK (status IN ('active', 'inactive', 'sold'))
        )",
    ),
    (
        "index_categories_user",
        "CREATE INDEX IF NOT EXISTS idx_user_asset_categories_user_id ON user_asset_categories (user_id, id)",
    ),
    (
        "index_assets_user",
        "CREATE INDEX IF NOT EXISTS idx_assets_user_id ON assets (user_id, id)",
    ),
    (
        "index_assets_category",
        "CREATE INDEX IF NOT EXISTS idx_assets_category_id ON assets (category_id)",
    ),
];

impl Fintrack {
    /// Create the ledger tables and indexes if they do not exist yet
    pub async fn migrate(&self) -> Result<(), FintrackError> {
        for &(step, sql) in MIGRATION_STEPS {
            crate::debug_log!("[MIGRATE] {}: {}", step, sql);
            sqlx::query(sql)
                .execute(self.pool())
                .await
                .map_err(|e| FintrackError::migration(step, e))?;
        }

        tracing::info!(steps = MIGRATION_STEPS.len(), "schema migration complete");
        Ok(())
    }
}
