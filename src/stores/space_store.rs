use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::errors::InternalError;
use crate::errors::internal::SpaceError;
use crate::stores::BULK_CHUNK_SIZE;
use crate::types::db::{element, map_element, space, space_element};
use crate::types::internal::{Dimensions, Placement};

/// Spaces and the elements placed in them
#[derive(Debug, Default)]
pub struct SpaceStore;

impl SpaceStore {
    pub fn new() -> Self {
        Self
    }

    pub async fn create_space(
        &self,
        conn: &impl ConnectionTrait,
        name: &str,
        dimensions: Dimensions,
        creator_id: &str,
        thumbnail: Option<String>,
    ) -> Result<space::Model, InternalError> {
        space::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set(name.to_string()),
            width: Set(dimensions.width),
            height: Set(dimensions.height),
            thumbnail: Set(thumbnail),
            creator_id: Set(creator_id.to_string()),
            created_at: Set(Utc::now().timestamp()),
        }
        .insert(conn)
        .await
        .map_err(|e| InternalError::database("create_space", e))
    }

    /// Copy map template rows into a space, values only
    ///
    /// Written in chunks; callers wrap this in a transaction.
    ///
    /// # Returns
    /// Number of placements written
    pub async fn copy_map_elements(
        &self,
        conn: &impl ConnectionTrait,
        space_id: &str,
        template: &[map_element::Model],
    ) -> Result<u64, InternalError> {
        if template.is_empty() {
            return Ok(0);
        }

        let now = Utc::now().timestamp();
        let mut written = 0;
        for chunk in template.chunks(BULK_CHUNK_SIZE) {
            let rows = chunk.iter().map(|row| space_element::ActiveModel {
                id: Set(Uuid::new_v4().to_string()),
                space_id: Set(space_id.to_string()),
                element_id: Set(row.element_id.clone()),
                x: Set(row.x),
                y: Set(row.y),
                created_at: Set(now),
            });

            written += space_element::Entity::insert_many(rows)
                .exec_without_returning(conn)
                .await
                .map_err(|e| InternalError::database("copy_map_elements", e))?;
        }

        Ok(written)
    }

    pub async fn find_space(
        &self,
        conn: &impl ConnectionTrait,
        space_id: &str,
    ) -> Result<Option<space::Model>, InternalError> {
        space::Entity::find_by_id(space_id.to_string())
            .one(conn)
            .await
            .map_err(|e| InternalError::database("find_space", e))
    }

    /// Like `find_space`, but a missing space is `SpaceNotFound`
    pub async fn get_space(&self, conn: &impl ConnectionTrait, space_id: &str) -> Result<space::Model, InternalError> {
        self.find_space(conn, space_id)
            .await?
            .ok_or_else(|| SpaceError::SpaceNotFound(space_id.to_string()).into())
    }

    pub async fn list_spaces_for_creator(
        &self,
        conn: &impl ConnectionTrait,
        creator_id: &str,
    ) -> Result<Vec<space::Model>, InternalError> {
        space::Entity::find()
            .filter(space::Column::CreatorId.eq(creator_id))
            .order_by_asc(space::Column::CreatedAt)
            .order_by_asc(space::Column::Id)
            .all(conn)
            .await
            .map_err(|e| InternalError::database("list_spaces_for_creator", e))
    }

    /// Remove a space and all of its placements
    pub async fn delete_space(&self, conn: &impl ConnectionTrait, space: space::Model) -> Result<(), InternalError> {
        space_element::Entity::delete_many()
            .filter(space_element::Column::SpaceId.eq(space.id.as_str()))
            .exec(conn)
            .await
            .map_err(|e| InternalError::database("delete_space_elements", e))?;

        space
            .delete(conn)
            .await
            .map_err(|e| InternalError::database("delete_space", e))?;

        Ok(())
    }

    /// Insert one placement; bounds are the caller's responsibility
    pub async fn add_space_element(
        &self,
        conn: &impl ConnectionTrait,
        space_id: &str,
        placement: &Placement,
    ) -> Result<space_element::Model, InternalError> {
        space_element::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            space_id: Set(space_id.to_string()),
            element_id: Set(placement.element_id.clone()),
            x: Set(placement.x),
            y: Set(placement.y),
            created_at: Set(Utc::now().timestamp()),
        }
        .insert(conn)
        .await
        .map_err(|e| InternalError::database("add_space_element", e))
    }

    /// Placements of a space joined with their catalog elements
    pub async fn list_space_elements(
        &self,
        conn: &impl ConnectionTrait,
        space_id: &str,
    ) -> Result<Vec<(space_element::Model, element::Model)>, InternalError> {
        let rows = space_element::Entity::find()
            .filter(space_element::Column::SpaceId.eq(space_id))
            .order_by_asc(space_element::Column::CreatedAt)
            .order_by_asc(space_element::Column::Id)
            .find_also_related(element::Entity)
            .all(conn)
            .await
            .map_err(|e| InternalError::database("list_space_elements", e))?;

        // The foreign key guarantees the element; a dangling row is skipped
        Ok(rows
            .into_iter()
            .filter_map(|(placement, element)| element.map(|element| (placement, element)))
            .collect())
    }

    /// Delete one placement from a space
    ///
    /// `element_ref` is matched against the placement id first. If no placement
    /// has that id, the oldest placement of that catalog element is removed.
    pub async fn remove_space_element(
        &self,
        conn: &impl ConnectionTrait,
        space_id: &str,
        element_ref: &str,
    ) -> Result<(), InternalError> {
        let by_placement_id = space_element::Entity::find()
            .filter(space_element::Column::SpaceId.eq(space_id))
            .filter(space_element::Column::Id.eq(element_ref))
            .one(conn)
            .await
            .map_err(|e| InternalError::database("find_space_element", e))?;

        let target = match by_placement_id {
            Some(row) => Some(row),
            None => space_element::Entity::find()
                .filter(space_element::Column::SpaceId.eq(space_id))
                .filter(space_element::Column::ElementId.eq(element_ref))
                .order_by_asc(space_element::Column::CreatedAt)
                .order_by_asc(space_element::Column::Id)
                .one(conn)
                .await
                .map_err(|e| InternalError::database("find_space_element", e))?,
        };

        let Some(target) = target else {
            return Err(SpaceError::PlacementNotFound {
                space_id: space_id.to_string(),
                element_ref: element_ref.to_string(),
            }
            .into());
        };

        target
            .delete(conn)
            .await
            .map_err(|e| InternalError::database("remove_space_element", e))?;

        Ok(())
    }
}
