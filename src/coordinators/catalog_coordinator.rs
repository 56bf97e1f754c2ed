use sea_orm::{DatabaseConnection, TransactionTrait};
use std::sync::Arc;

use crate::app_data::AppData;
use crate::errors::InternalError;
use crate::errors::internal::ValidationError;
use crate::providers::AccessProvider;
use crate::stores::CatalogStore;
use crate::types::db::{avatar, element};
use crate::types::internal::{Dimensions, Placement, RequestContext};

/// Catalog administration (admin only) and public catalog reads
pub struct CatalogCoordinator {
    db: Arc<DatabaseConnection>,
    catalog_store: Arc<CatalogStore>,
    access_provider: Arc<AccessProvider>,
}

impl CatalogCoordinator {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            db: Arc::clone(&app_data.db),
            catalog_store: Arc::clone(&app_data.catalog_store),
            access_provider: Arc::clone(&app_data.access_provider),
        }
    }

    pub async fn create_element(
        &self,
        ctx: &RequestContext,
        image_url: &str,
        width: i32,
        height: i32,
        is_static: bool,
    ) -> Result<String, InternalError> {
        self.access_provider.require_admin(ctx)?;
        ValidationError::require_non_empty("imageUrl", image_url)?;
        let size = Dimensions::new(width, height)?;

        let element = self
            .catalog_store
            .create_element(self.db.as_ref(), image_url, size, is_static)
            .await?;

        tracing::info!(request_id = %ctx.request_id, element_id = %element.id, "Element created");

        Ok(element.id)
    }

    /// Change an element's image; the element must exist even when `image_url` is absent
    pub async fn update_element(
        &self,
        ctx: &RequestContext,
        element_id: &str,
        image_url: Option<&str>,
    ) -> Result<(), InternalError> {
        self.access_provider.require_admin(ctx)?;
        if let Some(url) = image_url {
            ValidationError::require_non_empty("imageUrl", url)?;
        }

        self.catalog_store
            .update_element_image(self.db.as_ref(), element_id, image_url)
            .await?;

        tracing::info!(request_id = %ctx.request_id, element_id, "Element updated");

        Ok(())
    }

    pub async fn create_avatar(&self, ctx: &RequestContext, name: &str, image_url: &str) -> Result<String, InternalError> {
        self.access_provider.require_admin(ctx)?;
        ValidationError::require_non_empty("name", name)?;
        ValidationError::require_non_empty("imageUrl", image_url)?;

        let avatar = self.catalog_store.create_avatar(self.db.as_ref(), name, image_url).await?;

        tracing::info!(request_id = %ctx.request_id, avatar_id = %avatar.id, "Avatar created");

        Ok(avatar.id)
    }

    /// Create a map template and its default placements in one transaction
    ///
    /// Every referenced element must exist. Placement coordinates are stored
    /// as given, even outside the map.
    pub async fn create_map(
        &self,
        ctx: &RequestContext,
        name: &str,
        thumbnail: &str,
        dimensions: &str,
        placements: Vec<Placement>,
    ) -> Result<String, InternalError> {
        self.access_provider.require_admin(ctx)?;
        ValidationError::require_non_empty("name", name)?;
        let size: Dimensions = dimensions.parse()?;

        let txn = self.db.begin().await.map_err(InternalError::transaction_begin)?;

        let element_ids: Vec<&str> = placements.iter().map(|p| p.element_id.as_str()).collect();
        self.catalog_store.ensure_elements_exist(&txn, &element_ids).await?;

        let map = self.catalog_store.create_map(&txn, name, thumbnail, size).await?;
        self.catalog_store.add_map_elements(&txn, &map.id, &placements).await?;

        txn.commit().await.map_err(InternalError::transaction_commit)?;

        tracing::info!(
            request_id = %ctx.request_id,
            map_id = %map.id,
            default_elements = placements.len(),
            "Map created"
        );

        Ok(map.id)
    }

    pub async fn list_elements(&self, _ctx: &RequestContext) -> Result<Vec<element::Model>, InternalError> {
        self.catalog_store.list_elements(self.db.as_ref()).await
    }

    pub async fn list_avatars(&self, _ctx: &RequestContext) -> Result<Vec<avatar::Model>, InternalError> {
        self.catalog_store.list_avatars(self.db.as_ref()).await
    }
}
