//! Transaction support for AssetStore
//!
//! `LedgerTransaction` wraps a sqlx transaction. Dropping it without calling
//! [`commit`](LedgerTransaction::commit) rolls the transaction back and
//! releases any row locks it holds, so rollback is in place from the moment
//! the transaction begins and becomes a no-op once commit succeeds.
//!
//! # Example
//! ```ignore
//! let mut tx = store.begin_transaction().await?;
//!
//! let current = store.get_by_id(id, user_id, Lookup::ForUpdate(&mut tx)).await?;
//! store.update(&mut tx, &changed, id, user_id).await?;
//!
//! tx.commit().await?;
//! ```

use super::AssetStore;
use crate::errors::StoreError;
use sqlx::{PgConnection, Postgres, Transaction};

pub struct LedgerTransaction<'c> {
    tx: Transaction<'c, Postgres>,
}

impl std::fmt::Debug for LedgerTransaction<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LedgerTransaction").finish_non_exhaustive()
    }
}

impl AssetStore {
    /// Begin a new database transaction
    pub async fn begin_transaction(&self) -> Result<LedgerTransaction<'static>, StoreError> {
        let tx = self
            .db_pool
            .begin()
            .await
            .map_err(|e| StoreError::transaction("begin", e))?;
        Ok(LedgerTransaction { tx })
    }
}

impl<'c> LedgerTransaction<'c> {
    /// Commit the transaction
    pub async fn commit(self) -> Result<(), StoreError> {
        self.tx
            .commit()
            .await
            .map_err(|e| StoreError::transaction("commit", e))
    }

    /// Roll the transaction back now instead of on drop
    pub async fn rollback(self) -> Result<(), StoreError> {
        self.tx
            .rollback()
            .await
            .map_err(|e| StoreError::transaction("rollback", e))
    }

    /// Connection to execute queries on within this transaction
    pub fn connection(&mut self) -> &mut PgConnection {
        &mut self.tx
    }
}
