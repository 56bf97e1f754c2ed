use crate::AppData;
use crate::api::Api;
use crate::coordinators::CatalogCoordinator;
use crate::errors::AdminError;
use crate::providers::TokenProvider;
use crate::types::dto::catalog::{AvatarDto, AvatarListResponse, ElementDto, ElementListResponse};
use poem::Request;
use poem_openapi::{OpenApi, Tags, payload::Json};
use std::sync::Arc;

/// Public catalog listings
pub struct CatalogApi {
    catalog_coordinator: CatalogCoordinator,
    token_provider: Arc<TokenProvider>,
}

impl CatalogApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            token_provider: Arc::clone(&app_data.token_provider),
            catalog_coordinator: CatalogCoordinator::new(app_data),
        }
    }
}

impl Api for CatalogApi {
    fn token_provider(&self) -> &TokenProvider {
        &self.token_provider
    }
}

#[derive(Tags)]
enum CatalogTags {
    /// Elements and avatars available to everyone
    Catalog,
}

#[OpenApi]
impl CatalogApi {
    /// All catalog elements
    #[oai(path = "/elements", method = "get", tag = "CatalogTags::Catalog")]
    async fn list_elements(&self, req: &Request) -> Result<Json<ElementListResponse>, AdminError> {
        let ctx = self.request_context(req);
        let elements = self.catalog_coordinator.list_elements(&ctx).await?;

        Ok(Json(ElementListResponse {
            elements: elements.into_iter().map(ElementDto::from).collect(),
        }))
    }

    /// All avatars
    #[oai(path = "/avatars", method = "get", tag = "CatalogTags::Catalog")]
    async fn list_avatars(&self, req: &Request) -> Result<Json<AvatarListResponse>, AdminError> {
        let ctx = self.request_context(req);
        let avatars = self.catalog_coordinator.list_avatars(&ctx).await?;

        Ok(Json(AvatarListResponse {
            avatars: avatars.into_iter().map(AvatarDto::from).collect(),
        }))
    }
}
