use crate::errors::InternalError;
use crate::errors::internal::SpaceError;
use crate::types::internal::Dimensions;

/// Admits a position into a space's grid
///
/// Only bounds are checked. Overlapping placements and the element's
/// `static` flag are intentionally not considered.
#[derive(Debug, Default)]
pub struct PlacementValidator;

impl PlacementValidator {
    pub fn new() -> Self {
        Self
    }

    /// `OutOfBounds` unless `0 <= x < width` and `0 <= y < height`
    pub fn check_bounds(&self, dimensions: Dimensions, x: i32, y: i32) -> Result<(), InternalError> {
        if dimensions.contains(x, y) {
            return Ok(());
        }

        Err(SpaceError::OutOfBounds {
            x,
            y,
            width: dimensions.width,
            height: dimensions.height,
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims() -> Dimensions {
        Dimensions::new(100, 200).unwrap()
    }

    #[test]
    fn test_last_cell_is_inside() {
        let validator = PlacementValidator::new();
        assert!(validator.check_bounds(dims(), 99, 199).is_ok());
        assert!(validator.check_bounds(dims(), 0, 0).is_ok());
    }

    #[test]
    fn test_width_and_height_are_outside() {
        let validator = PlacementValidator::new();
        assert!(validator.check_bounds(dims(), 100, 0).is_err());
        assert!(validator.check_bounds(dims(), 0, 200).is_err());
    }

    #[test]
    fn test_negative_coordinates_are_outside() {
        let validator = PlacementValidator::new();
        let err = validator.check_bounds(dims(), -1, 5).unwrap_err();
        assert!(matches!(
            err,
            InternalError::Space(SpaceError::OutOfBounds { x: -1, y: 5, width: 100, height: 200 })
        ));
        assert!(validator.check_bounds(dims(), 5, -1).is_err());
    }
}
