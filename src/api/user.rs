use crate::AppData;
use crate::api::Api;
use crate::coordinators::UserCoordinator;
use crate::errors::MetadataError;
use crate::providers::TokenProvider;
use crate::types::dto::common::MessageResponse;
use crate::types::dto::user::{BulkMetadataResponse, UpdateMetadataRequest, UserAvatarDto};
use poem::Request;
use poem_openapi::{OpenApi, Tags, param::Query, payload::Json};
use std::sync::Arc;

pub struct UserApi {
    user_coordinator: UserCoordinator,
    token_provider: Arc<TokenProvider>,
}

impl UserApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            token_provider: Arc::clone(&app_data.token_provider),
            user_coordinator: UserCoordinator::new(app_data),
        }
    }
}

impl Api for UserApi {
    fn token_provider(&self) -> &TokenProvider {
        &self.token_provider
    }
}

#[derive(Tags)]
enum UserTags {
    /// Avatar metadata
    User,
}

#[OpenApi(prefix_path = "/user")]
impl UserApi {
    /// Set the caller's avatar
    #[oai(path = "/metadata", method = "post", tag = "UserTags::User")]
    async fn update_metadata(
        &self,
        req: &Request,
        body: Json<UpdateMetadataRequest>,
    ) -> Result<Json<MessageResponse>, MetadataError> {
        let ctx = self.request_context(req);

        self.user_coordinator.update_metadata(&ctx, &body.avatar_id).await?;

        Ok(Json(MessageResponse::new("Metadata updated")))
    }

    /// Avatar urls for a list of users
    ///
    /// `ids` is `[id1,id2]` or `id1,id2`; unknown ids are omitted.
    #[oai(path = "/metadata/bulk", method = "get", tag = "UserTags::User")]
    async fn bulk_metadata(
        &self,
        req: &Request,
        ids: Query<Option<String>>,
    ) -> Result<Json<BulkMetadataResponse>, MetadataError> {
        let ctx = self.request_context(req);

        let avatars = self
            .user_coordinator
            .bulk_metadata(&ctx, ids.0.as_deref().unwrap_or_default())
            .await?;

        Ok(Json(BulkMetadataResponse {
            avatars: avatars
                .into_iter()
                .map(|(user_id, avatar_url)| UserAvatarDto { user_id, avatar_url })
                .collect(),
        }))
    }
}
