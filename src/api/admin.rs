use crate::AppData;
use crate::api::Api;
use crate::coordinators::CatalogCoordinator;
use crate::errors::AdminError;
use crate::providers::TokenProvider;
use crate::types::dto::admin::{
    CreateAvatarRequest, CreateElementRequest, CreateMapRequest, UpdateElementRequest,
};
use crate::types::dto::common::{IdResponse, MessageResponse};
use crate::types::internal::Placement;
use poem::Request;
use poem_openapi::{OpenApi, Tags, param::Path, payload::Json};
use std::sync::Arc;

/// Admin-only catalog mutation
pub struct AdminApi {
    catalog_coordinator: CatalogCoordinator,
    token_provider: Arc<TokenProvider>,
}

impl AdminApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            token_provider: Arc::clone(&app_data.token_provider),
            catalog_coordinator: CatalogCoordinator::new(app_data),
        }
    }
}

impl Api for AdminApi {
    fn token_provider(&self) -> &TokenProvider {
        &self.token_provider
    }
}

#[derive(Tags)]
enum AdminTags {
    /// Catalog administration
    Admin,
}

#[OpenApi(prefix_path = "/admin")]
impl AdminApi {
    /// Add an element to the catalog
    #[oai(path = "/element", method = "post", tag = "AdminTags::Admin")]
    async fn create_element(
        &self,
        req: &Request,
        body: Json<CreateElementRequest>,
    ) -> Result<Json<IdResponse>, AdminError> {
        let ctx = self.request_context(req);

        let id = self
            .catalog_coordinator
            .create_element(&ctx, &body.image_url, body.width, body.height, body.is_static)
            .await?;

        Ok(Json(IdResponse { id }))
    }

    /// Change an element's image
    #[oai(path = "/element/:id", method = "put", tag = "AdminTags::Admin")]
    async fn update_element(
        &self,
        req: &Request,
        id: Path<String>,
        body: Json<UpdateElementRequest>,
    ) -> Result<Json<MessageResponse>, AdminError> {
        let ctx = self.request_context(req);

        self.catalog_coordinator
            .update_element(&ctx, &id.0, body.image_url.as_deref())
            .await?;

        Ok(Json(MessageResponse::new("Element updated")))
    }

    /// Add an avatar to the catalog
    #[oai(path = "/avatar", method = "post", tag = "AdminTags::Admin")]
    async fn create_avatar(
        &self,
        req: &Request,
        body: Json<CreateAvatarRequest>,
    ) -> Result<Json<IdResponse>, AdminError> {
        let ctx = self.request_context(req);

        let id = self
            .catalog_coordinator
            .create_avatar(&ctx, &body.name, &body.image_url)
            .await?;

        Ok(Json(IdResponse { id }))
    }

    /// Create a map template with its default elements
    #[oai(path = "/map", method = "post", tag = "AdminTags::Admin")]
    async fn create_map(&self, req: &Request, body: Json<CreateMapRequest>) -> Result<Json<IdResponse>, AdminError> {
        let ctx = self.request_context(req);
        let CreateMapRequest {
            name,
            thumbnail,
            dimensions,
            default_elements,
        } = body.0;
        let placements: Vec<Placement> = default_elements.into_iter().map(Placement::from).collect();

        let id = self
            .catalog_coordinator
            .create_map(&ctx, &name, &thumbnail, &dimensions, placements)
            .await?;

        Ok(Json(IdResponse { id }))
    }
}
