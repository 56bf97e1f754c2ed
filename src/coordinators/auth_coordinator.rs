use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::app_data::AppData;
use crate::errors::InternalError;
use crate::errors::internal::{CredentialError, ValidationError};
use crate::providers::{PasswordProvider, TokenProvider};
use crate::stores::UserStore;
use crate::types::internal::{RequestContext, Role};

/// Signup and signin workflows
pub struct AuthCoordinator {
    db: Arc<DatabaseConnection>,
    user_store: Arc<UserStore>,
    password_provider: Arc<PasswordProvider>,
    token_provider: Arc<TokenProvider>,
}

impl AuthCoordinator {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            db: Arc::clone(&app_data.db),
            user_store: Arc::clone(&app_data.user_store),
            password_provider: Arc::clone(&app_data.password_provider),
            token_provider: Arc::clone(&app_data.token_provider),
        }
    }

    /// Create an account
    ///
    /// `role` is the raw `type` field: absent means User, otherwise it must be
    /// exactly "User" or "Admin".
    ///
    /// # Returns
    /// * `Ok(String)` - New user id
    /// * `Err(Validation)` - Empty username/password or unknown role
    /// * `Err(DuplicateUsername)` - Username taken
    pub async fn signup(
        &self,
        ctx: &RequestContext,
        username: &str,
        password: &str,
        role: Option<&str>,
    ) -> Result<String, InternalError> {
        ValidationError::require_non_empty("username", username)?;
        ValidationError::require_non_empty("password", password)?;
        let role = match role {
            Some(raw) => raw.parse::<Role>()?,
            None => Role::User,
        };

        let password_hash = self.password_provider.hash_password(password).await?;
        let user = self
            .user_store
            .create_user(self.db.as_ref(), username, password_hash, role)
            .await?;

        tracing::info!(
            request_id = %ctx.request_id,
            source = %ctx.source,
            user_id = %user.id,
            role = %role,
            "User signed up"
        );

        Ok(user.id)
    }

    /// Exchange username and password for a bearer token
    ///
    /// Unknown usernames and wrong passwords both surface as `InvalidCredentials`.
    pub async fn signin(&self, ctx: &RequestContext, username: &str, password: &str) -> Result<String, InternalError> {
        ValidationError::require_non_empty("username", username)?;
        ValidationError::require_non_empty("password", password)?;

        let user = match self.user_store.get_user_for_auth(self.db.as_ref(), username).await {
            Ok(user) => user,
            Err(InternalError::Credential(CredentialError::UserNotFound(_))) => {
                tracing::info!(request_id = %ctx.request_id, "Signin rejected: unknown username");
                return Err(CredentialError::InvalidCredentials.into());
            }
            Err(e) => return Err(e),
        };

        if !self.password_provider.verify_password(&user.password_hash, password).await? {
            tracing::info!(request_id = %ctx.request_id, user_id = %user.id, "Signin rejected: wrong password");
            return Err(CredentialError::InvalidCredentials.into());
        }

        let token = self.token_provider.generate_jwt(&user.id, user.role()?)?;

        tracing::info!(request_id = %ctx.request_id, user_id = %user.id, "User signed in");

        Ok(token)
    }
}
