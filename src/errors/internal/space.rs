use thiserror::Error;

use super::ErrorKind;

#[derive(Error, Debug)]
pub enum SpaceError {
    #[error("Space not found: {0}")]
    SpaceNotFound(String),

    #[error("No element {element_ref} in space {space_id}")]
    PlacementNotFound { space_id: String, element_ref: String },

    #[error("Position ({x}, {y}) is outside the {width}x{height} space")]
    OutOfBounds { x: i32, y: i32, width: i32, height: i32 },
}

impl SpaceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SpaceError::SpaceNotFound(_) | SpaceError::PlacementNotFound { .. } => ErrorKind::NotFound,
            SpaceError::OutOfBounds { .. } => ErrorKind::OutOfBounds,
        }
    }
}
