use crate::AppData;
use crate::api::Api;
use crate::coordinators::AuthCoordinator;
use crate::errors::AuthError;
use crate::providers::TokenProvider;
use crate::types::dto::auth::{SigninRequest, SigninResponse, SignupRequest, SignupResponse};
use poem::Request;
use poem_openapi::{OpenApi, Tags, payload::Json};
use std::sync::Arc;

/// Account creation and signin
pub struct AuthApi {
    auth_coordinator: AuthCoordinator,
    token_provider: Arc<TokenProvider>,
}

impl AuthApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            token_provider: Arc::clone(&app_data.token_provider),
            auth_coordinator: AuthCoordinator::new(app_data),
        }
    }
}

impl Api for AuthApi {
    fn token_provider(&self) -> &TokenProvider {
        &self.token_provider
    }
}

#[derive(Tags)]
enum AuthTags {
    /// Signup and signin
    Authentication,
}

#[OpenApi]
impl AuthApi {
    /// Create an account
    ///
    /// `type` is "User" (default) or "Admin".
    #[oai(path = "/signup", method = "post", tag = "AuthTags::Authentication")]
    async fn signup(&self, req: &Request, body: Json<SignupRequest>) -> Result<Json<SignupResponse>, AuthError> {
        let ctx = self.request_context(req);

        let user_id = self
            .auth_coordinator
            .signup(&ctx, &body.username, &body.password, body.role.as_deref())
            .await?;

        Ok(Json(SignupResponse { user_id }))
    }

    /// Exchange username and password for a bearer token
    #[oai(path = "/signin", method = "post", tag = "AuthTags::Authentication")]
    async fn signin(&self, req: &Request, body: Json<SigninRequest>) -> Result<Json<SigninResponse>, AuthError> {
        let ctx = self.request_context(req);

        let token = self
            .auth_coordinator
            .signin(&ctx, &body.username, &body.password)
            .await?;

        Ok(Json(SigninResponse { token }))
    }
}
