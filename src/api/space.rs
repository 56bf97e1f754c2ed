use crate::AppData;
use crate::api::Api;
use crate::coordinators::SpaceCoordinator;
use crate::errors::SpaceApiError;
use crate::providers::TokenProvider;
use crate::types::dto::common::{IdResponse, MessageResponse};
use crate::types::dto::space::{
    AddElementRequest, CreateSpaceRequest, CreateSpaceResponse, RemoveElementRequest,
    SpaceDetailResponse, SpaceElementDto, SpaceListResponse, SpaceSummaryDto,
};
use crate::types::internal::Placement;
use poem::Request;
use poem_openapi::{OpenApi, Tags, param::Path, payload::Json};
use std::sync::Arc;

/// User spaces and the elements placed in them
pub struct SpaceApi {
    space_coordinator: SpaceCoordinator,
    token_provider: Arc<TokenProvider>,
}

impl SpaceApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            token_provider: Arc::clone(&app_data.token_provider),
            space_coordinator: SpaceCoordinator::new(app_data),
        }
    }
}

impl Api for SpaceApi {
    fn token_provider(&self) -> &TokenProvider {
        &self.token_provider
    }
}

#[derive(Tags)]
enum SpaceTags {
    /// Space lifecycle
    Space,
    /// Element placement inside a space
    Placement,
}

#[OpenApi]
impl SpaceApi {
    /// Create a space, empty or from a map template
    #[oai(path = "/space", method = "post", tag = "SpaceTags::Space")]
    async fn create_space(
        &self,
        req: &Request,
        body: Json<CreateSpaceRequest>,
    ) -> Result<Json<CreateSpaceResponse>, SpaceApiError> {
        let ctx = self.request_context(req);

        let space_id = self
            .space_coordinator
            .create_space(&ctx, &body.name, body.dimensions.as_deref(), body.map_id.as_deref())
            .await?;

        Ok(Json(CreateSpaceResponse { space_id }))
    }

    /// The caller's own spaces
    #[oai(path = "/space/all", method = "get", tag = "SpaceTags::Space")]
    async fn list_spaces(&self, req: &Request) -> Result<Json<SpaceListResponse>, SpaceApiError> {
        let ctx = self.request_context(req);
        let spaces = self.space_coordinator.list_spaces(&ctx).await?;

        Ok(Json(SpaceListResponse {
            spaces: spaces.into_iter().map(SpaceSummaryDto::from).collect(),
        }))
    }

    /// Place an element in an owned space
    #[oai(path = "/space/element", method = "post", tag = "SpaceTags::Placement")]
    async fn add_element(
        &self,
        req: &Request,
        body: Json<AddElementRequest>,
    ) -> Result<Json<IdResponse>, SpaceApiError> {
        let ctx = self.request_context(req);
        let AddElementRequest {
            space_id,
            element_id,
            x,
            y,
        } = body.0;

        let id = self
            .space_coordinator
            .add_element(&ctx, &space_id, Placement::new(element_id, x, y))
            .await?;

        Ok(Json(IdResponse { id }))
    }

    /// Remove one placement from an owned space
    #[oai(path = "/space/element", method = "delete", tag = "SpaceTags::Placement")]
    async fn remove_element(
        &self,
        req: &Request,
        body: Json<RemoveElementRequest>,
    ) -> Result<Json<MessageResponse>, SpaceApiError> {
        let ctx = self.request_context(req);

        self.space_coordinator
            .remove_element(&ctx, &body.space_id, &body.element_id)
            .await?;

        Ok(Json(MessageResponse::new("Element removed")))
    }

    /// Size and placed elements of a space
    #[oai(path = "/space/:id", method = "get", tag = "SpaceTags::Space")]
    async fn get_space(&self, req: &Request, id: Path<String>) -> Result<Json<SpaceDetailResponse>, SpaceApiError> {
        let ctx = self.request_context(req);
        let view = self.space_coordinator.get_space(&ctx, &id.0).await?;

        Ok(Json(SpaceDetailResponse {
            dimensions: view.dimensions.to_string(),
            elements: view.elements.into_iter().map(SpaceElementDto::from).collect(),
        }))
    }

    /// Delete an owned space and everything placed in it
    #[oai(path = "/space/:id", method = "delete", tag = "SpaceTags::Space")]
    async fn delete_space(&self, req: &Request, id: Path<String>) -> Result<Json<MessageResponse>, SpaceApiError> {
        let ctx = self.request_context(req);

        self.space_coordinator.delete_space(&ctx, &id.0).await?;

        Ok(Json(MessageResponse::new("Space deleted")))
    }
}
