use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, FromQueryResult, QueryFilter,
    QuerySelect, Set, SqlErr,
};
use std::collections::HashMap;
use uuid::Uuid;

use crate::errors::InternalError;
use crate::errors::internal::{CatalogError, CredentialError};
use crate::stores::BULK_CHUNK_SIZE;
use crate::types::db::{avatar, user};
use crate::types::internal::Role;

#[derive(Debug, Default)]
pub struct UserStore;

impl UserStore {
    pub fn new() -> Self {
        Self
    }

    /// Insert a new account
    ///
    /// # Returns
    /// * `Ok(user::Model)` - The stored row
    /// * `Err(CredentialError::DuplicateUsername)` - Username taken, either
    ///   found up front or reported by the unique index
    pub async fn create_user(
        &self,
        conn: &impl ConnectionTrait,
        username: &str,
        password_hash: String,
        role: Role,
    ) -> Result<user::Model, InternalError> {
        let existing = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(conn)
            .await
            .map_err(|e| InternalError::database("find_user_by_username", e))?;

        if existing.is_some() {
            return Err(CredentialError::DuplicateUsername(username.to_string()).into());
        }

        let now = Utc::now().timestamp();
        let new_user = user::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            username: Set(username.to_string()),
            password_hash: Set(password_hash),
            role: Set(role.as_str().to_string()),
            avatar_id: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        new_user.insert(conn).await.map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                CredentialError::DuplicateUsername(username.to_string()).into()
            }
            _ => InternalError::database("create_user", e),
        })
    }

    /// Credential fields for signin, `UserNotFound` when the name is unknown
    pub async fn get_user_for_auth(
        &self,
        conn: &impl ConnectionTrait,
        username: &str,
    ) -> Result<UserForAuth, InternalError> {
        let user: Option<UserForAuth> = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .select_only()
            .column(user::Column::Id)
            .column(user::Column::PasswordHash)
            .column(user::Column::Role)
            .into_model::<UserForAuth>()
            .one(conn)
            .await
            .map_err(|e| InternalError::database("get_user_for_auth", e))?;

        user.ok_or_else(|| CredentialError::UserNotFound(username.to_string()).into())
    }

    pub async fn find_user(
        &self,
        conn: &impl ConnectionTrait,
        user_id: &str,
    ) -> Result<Option<user::Model>, InternalError> {
        user::Entity::find_by_id(user_id.to_string())
            .one(conn)
            .await
            .map_err(|e| InternalError::database("find_user", e))
    }

    /// Point `user_id` at an existing avatar
    pub async fn set_avatar(
        &self,
        conn: &impl ConnectionTrait,
        user_id: &str,
        avatar_id: &str,
    ) -> Result<(), InternalError> {
        let avatar = avatar::Entity::find_by_id(avatar_id.to_string())
            .one(conn)
            .await
            .map_err(|e| InternalError::database("find_avatar", e))?;
        if avatar.is_none() {
            return Err(CatalogError::AvatarNotFound(avatar_id.to_string()).into());
        }

        let user = self
            .find_user(conn, user_id)
            .await?
            .ok_or_else(|| CredentialError::UserNotFound(user_id.to_string()))?;

        let mut active: user::ActiveModel = user.into();
        active.avatar_id = Set(Some(avatar_id.to_string()));
        active.updated_at = Set(Utc::now().timestamp());
        active
            .update(conn)
            .await
            .map_err(|e| InternalError::database("set_avatar", e))?;

        Ok(())
    }

    /// Avatar image per known user id, in request order
    ///
    /// Unknown ids are skipped; users without an avatar get `None`.
    pub async fn get_avatars_for_users(
        &self,
        conn: &impl ConnectionTrait,
        user_ids: &[String],
    ) -> Result<Vec<(String, Option<String>)>, InternalError> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut by_id: HashMap<String, Option<String>> = HashMap::with_capacity(user_ids.len());
        for chunk in user_ids.chunks(BULK_CHUNK_SIZE) {
            let rows = user::Entity::find()
                .filter(user::Column::Id.is_in(chunk.iter().cloned()))
                .find_also_related(avatar::Entity)
                .all(conn)
                .await
                .map_err(|e| InternalError::database("get_avatars_for_users", e))?;
            by_id.extend(rows.into_iter().map(|(user, avatar)| (user.id, avatar.map(|a| a.image_url))));
        }

        Ok(user_ids
            .iter()
            .filter_map(|id| by_id.remove(id).map(|url| (id.clone(), url)))
            .collect())
    }
}

/// Columns needed to check a signin attempt
#[derive(Debug, Clone, FromQueryResult)]
pub struct UserForAuth {
    pub id: String,
    pub password_hash: String,
    pub role: String,
}

impl UserForAuth {
    pub fn role(&self) -> Result<Role, InternalError> {
        self.role
            .parse()
            .map_err(|_| InternalError::parse("role", format!("stored role '{}' is not recognised", self.role)))
    }
}
