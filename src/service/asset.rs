//! Asset use cases
//!
//! Each operation resolves the caller's identity first, then validates input,
//! then talks to the repository. Submit and update also require the target
//! category to belong to the caller. Mutations run in one transaction that is
//! rolled back on every path except a successful commit: the transaction
//! value is dropped uncommitted whenever an error returns early.

use crate::service::context::RequestContext;
use crate::service::error::ServiceError;
use crate::service::request::AssetRequest;
use crate::service::response::{ApiResponse, PaginationMeta};
use crate::service::validation::ValidationErrors;
use ledger_store::{
    Asset, AssetCategory, AssetId, AssetRepository, AssetView, ListFilter, Lookup, UserId,
};

#[derive(Debug, Clone)]
pub struct AssetService<R> {
    repo: R,
}

fn respond<T>(result: Result<T, ServiceError>, wrap: impl FnOnce(T) -> ApiResponse<T>) -> ApiResponse<T> {
    match result {
        Ok(value) => wrap(value),
        Err(error) => ApiResponse::from_error(error),
    }
}

impl<R: AssetRepository> AssetService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Categories owned by the caller
    pub async fn list_categories(&self, ctx: &RequestContext) -> ApiResponse<Vec<AssetCategory>> {
        respond(self.try_list_categories(ctx).await, ApiResponse::ok)
    }

    /// Filtered listing with pagination metadata when a page size was given
    pub async fn list(&self, ctx: &RequestContext, filter: &ListFilter) -> ApiResponse<Vec<AssetView>> {
        match self.try_list(ctx, filter).await {
            Ok((rows, meta)) => ApiResponse::ok(rows).with_pagination(meta),
            Err(error) => ApiResponse::from_error(error),
        }
    }

    /// Insert a new asset; the response echoes the submitted fields
    pub async fn submit(&self, ctx: &RequestContext, request: AssetRequest) -> ApiResponse<AssetRequest> {
        respond(self.try_submit(ctx, request).await, ApiResponse::created)
    }

    pub async fn get_by_id(&self, ctx: &RequestContext, id: AssetId) -> ApiResponse<AssetView> {
        respond(self.try_get_by_id(ctx, id).await, ApiResponse::ok)
    }

    /// Locked read-modify-write; returns the updated view
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: AssetId,
        request: AssetRequest,
    ) -> ApiResponse<AssetView> {
        respond(self.try_update(ctx, id, &request).await, ApiResponse::ok)
    }

    /// Locked delete; returns the removed view
    pub async fn delete(&self, ctx: &RequestContext, id: AssetId) -> ApiResponse<AssetView> {
        respond(self.try_delete(ctx, id).await, ApiResponse::ok)
    }

    async fn try_list_categories(&self, ctx: &RequestContext) -> Result<Vec<AssetCategory>, ServiceError> {
        let user_id = ctx.require_user()?;

        self.repo
            .list_categories(user_id)
            .await
            .map_err(|e| ServiceError::storage("list_categories", e))
    }

    async fn try_list(
        &self,
        ctx: &RequestContext,
        filter: &ListFilter,
    ) -> Result<(Vec<AssetView>, Option<PaginationMeta>), ServiceError> {
        let user_id = ctx.require_user()?;

        let (rows, total) = self
            .repo
            .list_assets(user_id, filter)
            .await
            .map_err(|e| ServiceError::storage("list_assets", e))?;

        let meta = PaginationMeta::compute(filter.pagination.page, filter.pagination.limit, total);
        Ok((rows, meta))
    }

    async fn try_submit(&self, ctx: &RequestContext, request: AssetRequest) -> Result<AssetRequest, ServiceError> {
        let user_id = ctx.require_user()?;
        let asset = request.validate(user_id).map_err(ServiceError::Validation)?;
        self.ensure_category_owned(user_id, &asset).await?;

        let mut tx = self
            .repo
            .begin()
            .await
            .map_err(|e| ServiceError::storage("begin", e))?;

        let id = self
            .repo
            .insert(&mut tx, &asset)
            .await
            .map_err(|e| ServiceError::storage("insert", e))?;

        self.repo
            .commit(tx)
            .await
            .map_err(|e| ServiceError::storage("commit", e))?;

        tracing::info!(asset_id = id, user_id, "asset submitted");
        Ok(request)
    }

    async fn try_get_by_id(&self, ctx: &RequestContext, id: AssetId) -> Result<AssetView, ServiceError> {
        let user_id = ctx.require_user()?;

        self.repo
            .get_by_id(id, user_id, Lookup::Snapshot)
            .await
            .map_err(|e| ServiceError::lookup("get_by_id", e))
    }

    async fn try_update(
        &self,
        ctx: &RequestContext,
        id: AssetId,
        request: &AssetRequest,
    ) -> Result<AssetView, ServiceError> {
        let user_id = ctx.require_user()?;
        let asset = request.validate(user_id).map_err(ServiceError::Validation)?;
        self.ensure_category_owned(user_id, &asset).await?;

        let mut tx = self
            .repo
            .begin()
            .await
            .map_err(|e| ServiceError::storage("begin", e))?;

        // Blocks while another transaction holds the row
        self.repo
            .get_by_id(id, user_id, Lookup::ForUpdate(&mut tx))
            .await
            .map_err(|e| ServiceError::lookup("get_by_id_for_update", e))?;

        self.repo
            .update(&mut tx, &asset, id, user_id)
            .await
            .map_err(|e| ServiceError::lookup("update", e))?;

        // Only fails if the category was removed after the ownership check
        let view = self
            .repo
            .get_by_id(id, user_id, Lookup::ForUpdate(&mut tx))
            .await
            .map_err(|e| ServiceError::lookup("reload_after_update", e))?;

        self.repo
            .commit(tx)
            .await
            .map_err(|e| ServiceError::storage("commit", e))?;

        tracing::info!(asset_id = id, user_id, "asset updated");
        Ok(view)
    }

    async fn ensure_category_owned(&self, user_id: UserId, asset: &Asset) -> Result<(), ServiceError> {
        let categories = self
            .repo
            .list_categories(user_id)
            .await
            .map_err(|e| ServiceError::storage("list_categories", e))?;

        if categories.iter().any(|category| category.id == asset.category_id) {
            return Ok(());
        }

        tracing::debug!(user_id, category_id = asset.category_id, "category not owned by caller");
        let mut errors = ValidationErrors::new();
        errors.add("category_id", "must reference one of your categories");
        Err(ServiceError::Validation(errors))
    }

    async fn try_delete(&self, ctx: &RequestContext, id: AssetId) -> Result<AssetView, ServiceError> {
        let user_id = ctx.require_user()?;

        let mut tx = self
            .repo
            .begin()
            .await
            .map_err(|e| ServiceError::storage("begin", e))?;

        let view = self
            .repo
            .get_by_id(id, user_id, Lookup::ForUpdate(&mut tx))
            .await
            .map_err(|e| ServiceError::lookup("get_by_id_for_update", e))?;

        let removed = self
            .repo
            .delete(&mut tx, id, user_id)
            .await
            .map_err(|e| ServiceError::storage("delete", e))?;
        if !removed {
            return Err(ServiceError::NotFound);
        }

        self.repo
            .commit(tx)
            .await
            .map_err(|e| ServiceError::storage("commit", e))?;

        tracing::info!(asset_id = id, user_id, "asset deleted");
        Ok(view)
    }
}
