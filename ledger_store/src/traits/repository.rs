use crate::errors::StoreError;
use crate::listing::ListFilter;
use crate::models::{Asset, AssetCategory, AssetId, AssetView, UserId};
use async_trait::async_trait;

/// How a point lookup reads its row
pub enum Lookup<'t, Tx> {
    /// Plain read outside any transaction
    Snapshot,
    /// Read inside `tx`, taking an exclusive row lock that is held until the
    /// transaction ends. Blocks while another transaction holds the lock.
    ForUpdate(&'t mut Tx),
}

impl<Tx> Lookup<'_, Tx> {
    pub fn is_locking(&self) -> bool {
        matches!(self, Lookup::ForUpdate(_))
    }
}

/// Storage operations over assets, always scoped to the owning user.
///
/// Writes run inside a caller-supplied transaction. Dropping a transaction
/// without committing rolls it back, so a transaction acquired with
/// [`begin`](AssetRepository::begin) is released on every exit path.
#[async_trait]
pub trait AssetRepository: Send + Sync {
    type Tx: Send;

    async fn begin(&self) -> Result<Self::Tx, StoreError>;

    async fn commit(&self, tx: Self::Tx) -> Result<(), StoreError>;

    /// Categories owned by the user
    async fn list_categories(&self, user_id: UserId) -> Result<Vec<AssetCategory>, StoreError>;

    /// Filtered, paginated page of assets plus the unpaginated match count
    async fn list_assets(
        &self,
        user_id: UserId,
        filter: &ListFilter,
    ) -> Result<(Vec<AssetView>, i64), StoreError>;

    /// Insert one asset row and return its generated id
    async fn insert(&self, tx: &mut Self::Tx, asset: &Asset) -> Result<AssetId, StoreError>;

    /// Fetch one asset by id and owner; [`StoreError::NotFound`] when absent
    async fn get_by_id<'t>(
        &self,
        id: AssetId,
        user_id: UserId,
        lookup: Lookup<'t, Self::Tx>,
    ) -> Result<AssetView, StoreError>;

    /// Overwrite every mutable column of the row scoped by id and owner.
    /// The row must already be locked by a `ForUpdate` lookup on `tx`.
    async fn update(
        &self,
        tx: &mut Self::Tx,
        asset: &Asset,
        id: AssetId,
        user_id: UserId,
    ) -> Result<(), StoreError>;

    /// Remove the row scoped by id and owner; `false` when nothing matched
    async fn delete(&self, tx: &mut Self::Tx, id: AssetId, user_id: UserId)
        -> Result<bool, StoreError>;
}
