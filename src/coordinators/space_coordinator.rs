use sea_orm::{DatabaseConnection, TransactionTrait};
use std::sync::Arc;

use crate::app_data::AppData;
use crate::errors::InternalError;
use crate::errors::internal::{CatalogError, ValidationError};
use crate::providers::{AccessProvider, PlacementValidator};
use crate::stores::{CatalogStore, SpaceStore};
use crate::types::db::{element, space, space_element};
use crate::types::internal::{Dimensions, Placement, RequestContext};

/// A space read back with its placed elements
#[derive(Debug)]
pub struct SpaceView {
    pub dimensions: Dimensions,
    pub elements: Vec<(space_element::Model, element::Model)>,
}

/// User spaces: creation (empty or from a map), reads and owner-only edits
pub struct SpaceCoordinator {
    db: Arc<DatabaseConnection>,
    space_store: Arc<SpaceStore>,
    catalog_store: Arc<CatalogStore>,
    access_provider: Arc<AccessProvider>,
    placement_validator: Arc<PlacementValidator>,
}

impl SpaceCoordinator {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            db: Arc::clone(&app_data.db),
            space_store: Arc::clone(&app_data.space_store),
            catalog_store: Arc::clone(&app_data.catalog_store),
            access_provider: Arc::clone(&app_data.access_provider),
            placement_validator: Arc::clone(&app_data.placement_validator),
        }
    }

    /// Create a space owned by the caller
    ///
    /// Without `map_id` the space is empty and `dimensions` is required.
    /// With `map_id` the size comes from the map, `dimensions` is ignored, and
    /// the space row plus copies of every default placement are written in one
    /// transaction.
    pub async fn create_space(
        &self,
        ctx: &RequestContext,
        name: &str,
        dimensions: Option<&str>,
        map_id: Option<&str>,
    ) -> Result<String, InternalError> {
        let creator_id = self.access_provider.require_identity(ctx)?;
        ValidationError::require_non_empty("name", name)?;

        let Some(map_id) = map_id else {
            let size: Dimensions = dimensions
                .ok_or_else(|| ValidationError::missing("dimensions"))?
                .parse()?;

            let space = self
                .space_store
                .create_space(self.db.as_ref(), name, size, creator_id, None)
                .await?;

            tracing::info!(request_id = %ctx.request_id, space_id = %space.id, "Empty space created");

            return Ok(space.id);
        };

        let map = self
            .catalog_store
            .find_map(self.db.as_ref(), map_id)
            .await?
            .ok_or_else(|| CatalogError::MapNotFound(map_id.to_string()))?;
        let template = self.catalog_store.list_map_elements(self.db.as_ref(), &map.id).await?;
        let size = Dimensions {
            width: map.width,
            height: map.height,
        };

        let txn = self.db.begin().await.map_err(InternalError::transaction_begin)?;

        let space = self
            .space_store
            .create_space(&txn, name, size, creator_id, Some(map.thumbnail.clone()))
            .await?;
        let copied = self.space_store.copy_map_elements(&txn, &space.id, &template).await?;

        txn.commit().await.map_err(InternalError::transaction_commit)?;

        tracing::info!(
            request_id = %ctx.request_id,
            space_id = %space.id,
            map_id = %map.id,
            copied,
            "Space created from map"
        );

        Ok(space.id)
    }

    /// Delete an owned space with all its placements
    pub async fn delete_space(&self, ctx: &RequestContext, space_id: &str) -> Result<(), InternalError> {
        let space = self.load_owned_space(ctx, space_id).await?;

        let txn = self.db.begin().await.map_err(InternalError::transaction_begin)?;
        self.space_store.delete_space(&txn, space).await?;
        txn.commit().await.map_err(InternalError::transaction_commit)?;

        tracing::info!(request_id = %ctx.request_id, space_id, "Space deleted");

        Ok(())
    }

    /// Spaces created by the caller
    pub async fn list_spaces(&self, ctx: &RequestContext) -> Result<Vec<space::Model>, InternalError> {
        let user_id = self.access_provider.require_identity(ctx)?;
        self.space_store.list_spaces_for_creator(self.db.as_ref(), user_id).await
    }

    /// Size and contents of any space, for any authenticated caller
    pub async fn get_space(&self, ctx: &RequestContext, space_id: &str) -> Result<SpaceView, InternalError> {
        self.access_provider.require_identity(ctx)?;

        let space = self.space_store.get_space(self.db.as_ref(), space_id).await?;
        let elements = self.space_store.list_space_elements(self.db.as_ref(), &space.id).await?;

        Ok(SpaceView {
            dimensions: Dimensions {
                width: space.width,
                height: space.height,
            },
            elements,
        })
    }

    /// Place a catalog element in an owned space
    ///
    /// Order of checks: space exists, caller owns it, position is inside the
    /// grid, element exists. Co-location is allowed.
    ///
    /// # Returns
    /// Id of the new placement
    pub async fn add_element(
        &self,
        ctx: &RequestContext,
        space_id: &str,
        placement: Placement,
    ) -> Result<String, InternalError> {
        let space = self.load_owned_space(ctx, space_id).await?;
        let size = Dimensions {
            width: space.width,
            height: space.height,
        };

        self.placement_validator.check_bounds(size, placement.x, placement.y)?;

        if self
            .catalog_store
            .find_element(self.db.as_ref(), &placement.element_id)
            .await?
            .is_none()
        {
            return Err(CatalogError::ElementNotFound(placement.element_id).into());
        }

        let placed = self
            .space_store
            .add_space_element(self.db.as_ref(), &space.id, &placement)
            .await?;

        tracing::info!(
            request_id = %ctx.request_id,
            space_id,
            placement_id = %placed.id,
            x = placement.x,
            y = placement.y,
            "Element placed"
        );

        Ok(placed.id)
    }

    /// Remove one placement from an owned space, by placement id or catalog element id
    pub async fn remove_element(&self, ctx: &RequestContext, space_id: &str, element_ref: &str) -> Result<(), InternalError> {
        let space = self.load_owned_space(ctx, space_id).await?;

        self.space_store
            .remove_space_element(self.db.as_ref(), &space.id, element_ref)
            .await?;

        tracing::info!(request_id = %ctx.request_id, space_id, element_ref, "Element removed");

        Ok(())
    }

    async fn load_owned_space(&self, ctx: &RequestContext, space_id: &str) -> Result<space::Model, InternalError> {
        self.access_provider.require_identity(ctx)?;
        let space = self.space_store.get_space(self.db.as_ref(), space_id).await?;
        self.access_provider.require_owner(ctx, &space)?;
        Ok(space)
    }
}
