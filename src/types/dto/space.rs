use poem_openapi::Object;

use super::catalog::ElementDto;
use crate::types::db::{element, space, space_element};
use crate::types::internal::{Dimensions, Placement};

/// Element reference at a grid position
#[derive(Object, Debug, Clone)]
#[oai(rename_all = "camelCase")]
pub struct PlacementDto {
    pub element_id: String,
    pub x: i32,
    pub y: i32,
}

impl From<PlacementDto> for Placement {
    fn from(dto: PlacementDto) -> Self {
        Placement::new(dto.element_id, dto.x, dto.y)
    }
}

/// Request to create a space, empty or from a map template
#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct CreateSpaceRequest {
    pub name: String,

    /// Size as "WIDTHxHEIGHT"; required without `mapId`, ignored with it
    pub dimensions: Option<String>,

    /// Map template to copy size and default elements from
    pub map_id: Option<String>,
}

#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct CreateSpaceResponse {
    pub space_id: String,
}

/// One of the caller's spaces
#[derive(Object, Debug)]
pub struct SpaceSummaryDto {
    pub id: String,
    pub name: String,
    /// "WIDTHxHEIGHT"
    pub dimensions: String,
    pub thumbnail: Option<String>,
}

impl From<space::Model> for SpaceSummaryDto {
    fn from(model: space::Model) -> Self {
        Self {
            dimensions: Dimensions {
                width: model.width,
                height: model.height,
            }
            .to_string(),
            id: model.id,
            name: model.name,
            thumbnail: model.thumbnail,
        }
    }
}

#[derive(Object, Debug)]
pub struct SpaceListResponse {
    pub spaces: Vec<SpaceSummaryDto>,
}

/// Placement inside a space with its catalog element embedded
#[derive(Object, Debug)]
pub struct SpaceElementDto {
    /// Placement id, usable with the remove endpoint
    pub id: String,
    pub element: ElementDto,
    pub x: i32,
    pub y: i32,
}

impl From<(space_element::Model, element::Model)> for SpaceElementDto {
    fn from((placement, element): (space_element::Model, element::Model)) -> Self {
        Self {
            id: placement.id,
            element: element.into(),
            x: placement.x,
            y: placement.y,
        }
    }
}

#[derive(Object, Debug)]
pub struct SpaceDetailResponse {
    /// "WIDTHxHEIGHT"
    pub dimensions: String,
    pub elements: Vec<SpaceElementDto>,
}

#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct AddElementRequest {
    pub space_id: String,
    pub element_id: String,
    pub x: i32,
    pub y: i32,
}

/// Request to remove one placement from a space
#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct RemoveElementRequest {
    pub space_id: String,

    /// Placement id, or a catalog element id (first matching placement is removed)
    pub element_id: String,
}
