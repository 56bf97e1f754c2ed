use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::app_data::AppData;
use crate::errors::InternalError;
use crate::errors::internal::ValidationError;
use crate::providers::AccessProvider;
use crate::stores::UserStore;
use crate::types::internal::RequestContext;

/// Per-user metadata: the caller's avatar and bulk avatar lookups
pub struct UserCoordinator {
    db: Arc<DatabaseConnection>,
    user_store: Arc<UserStore>,
    access_provider: Arc<AccessProvider>,
}

impl UserCoordinator {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            db: Arc::clone(&app_data.db),
            user_store: Arc::clone(&app_data.user_store),
            access_provider: Arc::clone(&app_data.access_provider),
        }
    }

    /// Set the caller's avatar
    pub async fn update_metadata(&self, ctx: &RequestContext, avatar_id: &str) -> Result<(), InternalError> {
        let user_id = self.access_provider.require_identity(ctx)?;
        ValidationError::require_non_empty("avatarId", avatar_id)?;

        self.user_store.set_avatar(self.db.as_ref(), user_id, avatar_id).await?;

        tracing::info!(request_id = %ctx.request_id, user_id, avatar_id, "Avatar updated");

        Ok(())
    }

    /// Avatar urls for a list of user ids
    ///
    /// `ids` is either `[a,b,c]` or `a,b,c`. Unknown ids are left out of the
    /// result, which keeps request order.
    pub async fn bulk_metadata(
        &self,
        ctx: &RequestContext,
        ids: &str,
    ) -> Result<Vec<(String, Option<String>)>, InternalError> {
        self.access_provider.require_identity(ctx)?;

        let user_ids = parse_id_list(ids);
        self.user_store.get_avatars_for_users(self.db.as_ref(), &user_ids).await
    }
}

/// Split `[a, b]` / `a,b` into trimmed, non-empty ids
pub(crate) fn parse_id_list(raw: &str) -> Vec<String> {
    let inner = raw.trim();
    let inner = inner.strip_prefix('[').unwrap_or(inner);
    let inner = inner.strip_suffix(']').unwrap_or(inner);

    inner
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinators::CatalogCoordinator;
    use crate::errors::internal::{CatalogError, CredentialError};
    use crate::test::utils::{app_data_with, ctx_for, mock_transaction_log, setup_test_app_data};
    use crate::types::internal::Role;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[test]
    fn test_parse_id_list_accepts_both_shapes() {
        assert_eq!(parse_id_list("[a,b,c]"), vec!["a", "b", "c"]);
        assert_eq!(parse_id_list("a, b ,c"), vec!["a", "b", "c"]);
        assert_eq!(parse_id_list(" [ x ] "), vec!["x"]);
        assert!(parse_id_list("[]").is_empty());
        assert!(parse_id_list("").is_empty());
        assert_eq!(parse_id_list("a,,b,"), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_update_and_read_back_avatars() {
        let app_data = setup_test_app_data().await;
        let users = UserStore::new();
        let alice = users
            .create_user(app_data.db.as_ref(), "alice", "h".to_string(), Role::User)
            .await
            .unwrap();
        let bob = users
            .create_user(app_data.db.as_ref(), "bob", "h".to_string(), Role::User)
            .await
            .unwrap();

        let admin = ctx_for("admin", Role::Admin);
        let avatar_id = CatalogCoordinator::new(Arc::clone(&app_data))
            .create_avatar(&admin, "Knight", "https://img/knight.png")
            .await
            .unwrap();

        let coordinator = UserCoordinator::new(Arc::clone(&app_data));
        coordinator
            .update_metadata(&ctx_for(&alice.id, Role::User), &avatar_id)
            .await
            .unwrap();

        let ids = format!("[{}, ghost, {}]", bob.id, alice.id);
        let avatars = coordinator
            .bulk_metadata(&ctx_for(&bob.id, Role::User), &ids)
            .await
            .unwrap();

        assert_eq!(
            avatars,
            vec![
                (bob.id.clone(), None),
                (alice.id.clone(), Some("https://img/knight.png".to_string())),
            ]
        );
    }

    #[tokio::test]
    async fn test_unknown_avatar_is_rejected() {
        let app_data = setup_test_app_data().await;
        let user = UserStore::new()
            .create_user(app_data.db.as_ref(), "alice", "h".to_string(), Role::User)
            .await
            .unwrap();

        let result = UserCoordinator::new(app_data)
            .update_metadata(&ctx_for(&user.id, Role::User), "nope")
            .await;

        assert!(matches!(
            result,
            Err(InternalError::Catalog(CatalogError::AvatarNotFound(_)))
        ));
    }

    #[tokio::test]
    async fn test_anonymous_caller_touches_no_database() {
        let db = Arc::new(MockDatabase::new(DatabaseBackend::Sqlite).into_connection());
        let coordinator = UserCoordinator::new(app_data_with(Arc::clone(&db)));
        let anonymous = RequestContext::new();

        let update = coordinator.update_metadata(&anonymous, "avatar").await;
        let bulk = coordinator.bulk_metadata(&anonymous, "[a]").await;

        assert!(matches!(update, Err(InternalError::Credential(CredentialError::MissingToken))));
        assert!(matches!(bulk, Err(InternalError::Credential(CredentialError::MissingToken))));
        drop(coordinator);
        assert!(mock_transaction_log(db).is_empty());
    }
}
