// API layer - HTTP endpoints
//
// Every endpoint builds a RequestContext from the incoming request and hands it
// to a coordinator; no endpoint talks to stores directly.
pub mod admin;
pub mod auth;
pub mod catalog;
pub mod health;
pub mod space;
pub mod user;

use std::sync::Arc;

pub use admin::AdminApi;
pub use auth::AuthApi;
pub use catalog::CatalogApi;
pub use health::HealthApi;
pub use space::SpaceApi;
pub use user::UserApi;

use poem::{Request, Route};
use poem_openapi::OpenApiService;

use crate::AppData;
use crate::providers::TokenProvider;
use crate::types::internal::RequestContext;

/// Mount point of every API route
pub const API_PREFIX: &str = "/api/v1";

/// Shared request plumbing for API structs
pub trait Api {
    fn token_provider(&self) -> &TokenProvider;

    /// Context for this request; unauthenticated when the bearer token is
    /// absent or does not validate
    fn request_context(&self, req: &Request) -> RequestContext {
        RequestContext::from_request(req, self.token_provider())
    }
}

/// Build the full application: OpenAPI routes under `/api/v1`, Swagger UI
/// under `/swagger`
pub fn build_app(app_data: Arc<AppData>, server_url: &str) -> Route {
    let apis = (
        HealthApi,
        AuthApi::new(Arc::clone(&app_data)),
        AdminApi::new(Arc::clone(&app_data)),
        CatalogApi::new(Arc::clone(&app_data)),
        SpaceApi::new(Arc::clone(&app_data)),
        UserApi::new(app_data),
    );

    let api_service =
        OpenApiService::new(apis, "Metaverse Backend API", env!("CARGO_PKG_VERSION")).server(server_url);
    let ui = api_service.swagger_ui();

    Route::new().nest(API_PREFIX, api_service).nest("/swagger", ui)
}
