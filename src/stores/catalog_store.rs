use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    Set,
};
use std::collections::HashSet;
use uuid::Uuid;

use crate::errors::InternalError;
use crate::errors::internal::CatalogError;
use crate::stores::BULK_CHUNK_SIZE;
use crate::types::db::{avatar, element, map, map_element};
use crate::types::internal::{Dimensions, Placement};

/// Elements, avatars and map templates
#[derive(Debug, Default)]
pub struct CatalogStore;

impl CatalogStore {
    pub fn new() -> Self {
        Self
    }

    pub async fn create_element(
        &self,
        conn: &impl ConnectionTrait,
        image_url: &str,
        dimensions: Dimensions,
        is_static: bool,
    ) -> Result<element::Model, InternalError> {
        let now = Utc::now().timestamp();
        element::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            image_url: Set(image_url.to_string()),
            width: Set(dimensions.width),
            height: Set(dimensions.height),
            is_static: Set(is_static),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(conn)
        .await
        .map_err(|e| InternalError::database("create_element", e))
    }

    /// Replace an element's image; `None` only checks that the element exists
    pub async fn update_element_image(
        &self,
        conn: &impl ConnectionTrait,
        element_id: &str,
        image_url: Option<&str>,
    ) -> Result<element::Model, InternalError> {
        let existing = self
            .find_element(conn, element_id)
            .await?
            .ok_or_else(|| CatalogError::ElementNotFound(element_id.to_string()))?;

        let Some(image_url) = image_url else {
            return Ok(existing);
        };

        let mut active: element::ActiveModel = existing.into();
        active.image_url = Set(image_url.to_string());
        active.updated_at = Set(Utc::now().timestamp());
        active
            .update(conn)
            .await
            .map_err(|e| InternalError::database("update_element_image", e))
    }

    pub async fn find_element(
        &self,
        conn: &impl ConnectionTrait,
        element_id: &str,
    ) -> Result<Option<element::Model>, InternalError> {
        element::Entity::find_by_id(element_id.to_string())
            .one(conn)
            .await
            .map_err(|e| InternalError::database("find_element", e))
    }

    /// `ElementNotFound` naming the first id (in input order) missing from the catalog
    pub async fn ensure_elements_exist(
        &self,
        conn: &impl ConnectionTrait,
        element_ids: &[&str],
    ) -> Result<(), InternalError> {
        if element_ids.is_empty() {
            return Ok(());
        }

        let wanted: Vec<&str> = element_ids
            .iter()
            .copied()
            .collect::<HashSet<&str>>()
            .into_iter()
            .collect();

        let mut found: HashSet<String> = HashSet::with_capacity(wanted.len());
        for chunk in wanted.chunks(BULK_CHUNK_SIZE) {
            let ids = element::Entity::find()
                .filter(element::Column::Id.is_in(chunk.iter().map(|id| id.to_string())))
                .select_only()
                .column(element::Column::Id)
                .into_tuple::<String>()
                .all(conn)
                .await
                .map_err(|e| InternalError::database("ensure_elements_exist", e))?;
            found.extend(ids);
        }

        match element_ids.iter().find(|id| !found.contains(**id)) {
            Some(missing) => Err(CatalogError::ElementNotFound(missing.to_string()).into()),
            None => Ok(()),
        }
    }

    pub async fn list_elements(&self, conn: &impl ConnectionTrait) -> Result<Vec<element::Model>, InternalError> {
        element::Entity::find()
            .order_by_asc(element::Column::CreatedAt)
            .order_by_asc(element::Column::Id)
            .all(conn)
            .await
            .map_err(|e| InternalError::database("list_elements", e))
    }

    pub async fn create_avatar(
        &self,
        conn: &impl ConnectionTrait,
        name: &str,
        image_url: &str,
    ) -> Result<avatar::Model, InternalError> {
        avatar::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set(name.to_string()),
            image_url: Set(image_url.to_string()),
            created_at: Set(Utc::now().timestamp()),
        }
        .insert(conn)
        .await
        .map_err(|e| InternalError::database("create_avatar", e))
    }

    pub async fn list_avatars(&self, conn: &impl ConnectionTrait) -> Result<Vec<avatar::Model>, InternalError> {
        avatar::Entity::find()
            .order_by_asc(avatar::Column::CreatedAt)
            .order_by_asc(avatar::Column::Id)
            .all(conn)
            .await
            .map_err(|e| InternalError::database("list_avatars", e))
    }

    pub async fn create_map(
        &self,
        conn: &impl ConnectionTrait,
        name: &str,
        thumbnail: &str,
        dimensions: Dimensions,
    ) -> Result<map::Model, InternalError> {
        map::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set(name.to_string()),
            width: Set(dimensions.width),
            height: Set(dimensions.height),
            thumbnail: Set(thumbnail.to_string()),
            created_at: Set(Utc::now().timestamp()),
        }
        .insert(conn)
        .await
        .map_err(|e| InternalError::database("create_map", e))
    }

    /// Store a map's default placements, `position` following slice order
    ///
    /// Coordinates are not checked against the map size. Large templates are
    /// written in several statements; run inside a transaction to keep them atomic.
    pub async fn add_map_elements(
        &self,
        conn: &impl ConnectionTrait,
        map_id: &str,
        placements: &[Placement],
    ) -> Result<(), InternalError> {
        if placements.is_empty() {
            return Ok(());
        }

        for (chunk_index, chunk) in placements.chunks(BULK_CHUNK_SIZE).enumerate() {
            let offset = chunk_index * BULK_CHUNK_SIZE;
            let rows = chunk
                .iter()
                .enumerate()
                .map(|(i, placement)| map_element::ActiveModel {
                    id: Set(Uuid::new_v4().to_string()),
                    map_id: Set(map_id.to_string()),
                    element_id: Set(placement.element_id.clone()),
                    x: Set(placement.x),
                    y: Set(placement.y),
                    position: Set((offset + i) as i32),
                });

            map_element::Entity::insert_many(rows)
                .exec_without_returning(conn)
                .await
                .map_err(|e| InternalError::database("add_map_elements", e))?;
        }

        Ok(())
    }

    pub async fn find_map(
        &self,
        conn: &impl ConnectionTrait,
        map_id: &str,
    ) -> Result<Option<map::Model>, InternalError> {
        map::Entity::find_by_id(map_id.to_string())
            .one(conn)
            .await
            .map_err(|e| InternalError::database("find_map", e))
    }

    /// Default placements of a map in their original order
    pub async fn list_map_elements(
        &self,
        conn: &impl ConnectionTrait,
        map_id: &str,
    ) -> Result<Vec<map_element::Model>, InternalError> {
        map_element::Entity::find()
            .filter(map_element::Column::MapId.eq(map_id))
            .order_by_asc(map_element::Column::Position)
            .all(conn)
            .await
            .map_err(|e| InternalError::database("list_map_elements", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::utils::setup_test_db;

    fn dims(width: i32, height: i32) -> Dimensions {
        Dimensions::new(width, height).unwrap()
    }

    #[tokio::test]
    async fn test_update_element_only_changes_image() {
        let db = setup_test_db().await;
        let store = CatalogStore::new();

        let created = store.create_element(&db, "https://img/chair.png", dims(1, 2), true).await.unwrap();
        let updated = store
            .update_element_image(&db, &created.id, Some("https://img/chair-v2.png"))
            .await
            .unwrap();

        assert_eq!(updated.image_url, "https://img/chair-v2.png");
        assert_eq!((updated.width, updated.height, updated.is_static), (1, 2, true));
    }

    #[tokio::test]
    async fn test_update_without_image_is_noop() {
        let db = setup_test_db().await;
        let store = CatalogStore::new();

        let created = store.create_element(&db, "https://img/a.png", dims(1, 1), false).await.unwrap();
        let unchanged = store.update_element_image(&db, &created.id, None).await.unwrap();
        assert_eq!(unchanged, created);
    }

    #[tokio::test]
    async fn test_update_unknown_element_is_not_found() {
        let db = setup_test_db().await;
        let result = CatalogStore::new()
            .update_element_image(&db, "missing", Some("https://img/x.png"))
            .await;

        assert!(matches!(
            result,
            Err(InternalError::Catalog(CatalogError::ElementNotFound(_)))
        ));
    }

    #[tokio::test]
    async fn test_ensure_elements_exist_names_first_missing() {
        let db = setup_test_db().await;
        let store = CatalogStore::new();
        let chair = store.create_element(&db, "https://img/chair.png", dims(1, 1), false).await.unwrap();

        assert!(store.ensure_elements_exist(&db, &[chair.id.as_str(), chair.id.as_str()]).await.is_ok());

        let result = store.ensure_elements_exist(&db, &[chair.id.as_str(), "ghost", "phantom"]).await;
        match result {
            Err(InternalError::Catalog(CatalogError::ElementNotFound(id))) => assert_eq!(id, "ghost"),
            other => panic!("Expected ElementNotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_map_elements_keep_input_order() {
        let db = setup_test_db().await;
        let store = CatalogStore::new();
        let chair = store.create_element(&db, "https://img/chair.png", dims(1, 1), false).await.unwrap();
        let table = store.create_element(&db, "https://img/table.png", dims(2, 2), true).await.unwrap();

        let map = store.create_map(&db, "office", "https://img/office.png", dims(100, 200)).await.unwrap();
        let placements = vec![
            Placement::new(&table.id, 50, 50),
            Placement::new(&chair.id, 20, 20),
            Placement::new(&chair.id, 18, 20),
            // Outside the map, stored as-is
            Placement::new(&chair.id, 500, 500),
        ];
        store.add_map_elements(&db, &map.id, &placements).await.unwrap();

        let stored: Vec<(String, i32, i32)> = store
            .list_map_elements(&db, &map.id)
            .await
            .unwrap()
            .into_iter()
            .map(|row| (row.element_id, row.x, row.y))
            .collect();

        assert_eq!(
            stored,
            vec![
                (table.id.clone(), 50, 50),
                (chair.id.clone(), 20, 20),
                (chair.id.clone(), 18, 20),
                (chair.id.clone(), 500, 500),
            ]
        );
    }

    #[tokio::test]
    async fn test_ensure_elements_exist_past_sqlite_variable_limit() {
        let db = setup_test_db().await;
        let store = CatalogStore::new();
        let chair = store.create_element(&db, "https://img/chair.png", dims(1, 1), false).await.unwrap();

        let ghosts: Vec<String> = (0..40_000).map(|i| format!("ghost-{}", i)).collect();
        let mut ids: Vec<&str> = vec![chair.id.as_str()];
        ids.extend(ghosts.iter().map(String::as_str));

        let result = store.ensure_elements_exist(&db, &ids).await;
        match result {
            Err(InternalError::Catalog(CatalogError::ElementNotFound(id))) => assert_eq!(id, "ghost-0"),
            other => panic!("Expected ElementNotFound, got {:?}", other),
        }

        let many_chairs = vec![chair.id.as_str(); 40_000];
        assert!(store.ensure_elements_exist(&db, &many_chairs).await.is_ok());
    }

    #[tokio::test]
    async fn test_large_template_keeps_positions_across_chunks() {
        let db = setup_test_db().await;
        let store = CatalogStore::new();
        let chair = store.create_element(&db, "https://img/chair.png", dims(1, 1), false).await.unwrap();
        let map = store.create_map(&db, "hall", "https://img/hall.png", dims(100, 100)).await.unwrap();

        let count = BULK_CHUNK_SIZE * 2 + 1;
        let placements: Vec<Placement> = (0..count as i32)
            .map(|i| Placement::new(&chair.id, i % 100, i / 100))
            .collect();
        store.add_map_elements(&db, &map.id, &placements).await.unwrap();

        let stored = store.list_map_elements(&db, &map.id).await.unwrap();
        assert_eq!(stored.len(), count);
        for (i, row) in stored.iter().enumerate() {
            assert_eq!(row.position, i as i32);
            assert_eq!((row.x, row.y), (placements[i].x, placements[i].y));
        }
    }

    #[tokio::test]
    async fn test_listings() {
        let db = setup_test_db().await;
        let store = CatalogStore::new();

        store.create_element(&db, "https://img/a.png", dims(1, 1), false).await.unwrap();
        store.create_avatar(&db, "Timmy", "https://img/timmy.png").await.unwrap();

        assert_eq!(store.list_elements(&db).await.unwrap().len(), 1);
        let avatars = store.list_avatars(&db).await.unwrap();
        assert_eq!(avatars.len(), 1);
        assert_eq!(avatars[0].name, "Timmy");
    }
}
