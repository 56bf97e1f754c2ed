use poem_openapi::Object;

use super::space::PlacementDto;

/// Request to add an element to the catalog
#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct CreateElementRequest {
    pub image_url: String,

    /// Width in grid cells, at least 1
    pub width: i32,

    /// Height in grid cells, at least 1
    pub height: i32,

    /// Whether avatars may walk over the element
    #[oai(rename = "static")]
    pub is_static: bool,
}

/// Request to change an element's image
///
/// Only the image is mutable; size and the static flag are fixed at creation.
#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct UpdateElementRequest {
    pub image_url: Option<String>,
}

/// Request to add an avatar to the catalog
#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct CreateAvatarRequest {
    pub name: String,
    pub image_url: String,
}

/// Request to create a map template
#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct CreateMapRequest {
    pub name: String,

    pub thumbnail: String,

    /// Size as "WIDTHxHEIGHT", e.g. "100x200"
    pub dimensions: String,

    /// Elements copied into every space created from this map, in order
    #[oai(default)]
    pub default_elements: Vec<PlacementDto>,
}
