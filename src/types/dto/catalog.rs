use poem_openapi::Object;

use crate::types::db::{avatar, element};

/// Catalog element as returned by listings and embedded in space reads
#[derive(Object, Debug, Clone)]
#[oai(rename_all = "camelCase")]
pub struct ElementDto {
    pub id: String,
    pub image_url: String,
    pub width: i32,
    pub height: i32,
    #[oai(rename = "static")]
    pub is_static: bool,
}

impl From<element::Model> for ElementDto {
    fn from(model: element::Model) -> Self {
        Self {
            id: model.id,
            image_url: model.image_url,
            width: model.width,
            height: model.height,
            is_static: model.is_static,
        }
    }
}

#[derive(Object, Debug)]
pub struct ElementListResponse {
    pub elements: Vec<ElementDto>,
}

#[derive(Object, Debug, Clone)]
#[oai(rename_all = "camelCase")]
pub struct AvatarDto {
    pub id: String,
    pub name: String,
    pub image_url: String,
}

impl From<avatar::Model> for AvatarDto {
    fn from(model: avatar::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            image_url: model.image_url,
        }
    }
}

#[derive(Object, Debug)]
pub struct AvatarListResponse {
    pub avatars: Vec<AvatarDto>,
}
