use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::errors::internal::ValidationError;

static DIMENSIONS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{1,4})x([0-9]{1,4})$").expect("dimensions pattern is valid"));

/// Width and height of a map or space, in grid cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: i32,
    pub height: i32,
}

impl Dimensions {
    pub fn new(width: i32, height: i32) -> Result<Self, ValidationError> {
        ValidationError::require_positive("width", width)?;
        ValidationError::require_positive("height", height)?;
        Ok(Self { width, height })
    }

    /// Whether `(x, y)` is a cell of this grid
    ///
    /// Valid cells are `0 <= x < width` and `0 <= y < height`.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }
}

impl FromStr for Dimensions {
    type Err = ValidationError;

    /// Parse the `"<width>x<height>"` text form
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = DIMENSIONS_PATTERN
            .captures(s)
            .ok_or_else(|| ValidationError::invalid("dimensions", format!("expected WIDTHxHEIGHT, got \"{}\"", s)))?;

        // At most four digits each, always fits
        let width: i32 = captures[1]
            .parse()
            .map_err(|_| ValidationError::invalid("dimensions", "width is not a number"))?;
        let height: i32 = captures[2]
            .parse()
            .map_err(|_| ValidationError::invalid("dimensions", "height is not a number"))?;

        Self::new(width, height)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_dimensions() {
        let dims: Dimensions = "100x200".parse().unwrap();
        assert_eq!(dims.width, 100);
        assert_eq!(dims.height, 200);
        assert_eq!(dims.to_string(), "100x200");
    }

    #[test]
    fn test_parse_rejects_malformed_text() {
        for bad in ["", "100", "100x", "x200", "100X200", "100 x 200", "-1x5", "12345x1", "10x10x10"] {
            assert!(bad.parse::<Dimensions>().is_err(), "{} should be rejected", bad);
        }
    }

    #[test]
    fn test_parse_rejects_zero_size() {
        assert!("0x10".parse::<Dimensions>().is_err());
        assert!("10x0".parse::<Dimensions>().is_err());
    }

    #[test]
    fn test_contains_edges() {
        let dims = Dimensions::new(100, 200).unwrap();
        assert!(dims.contains(0, 0));
        assert!(dims.contains(99, 199));
        assert!(!dims.contains(100, 0));
        assert!(!dims.contains(0, 200));
        assert!(!dims.contains(-1, 5));
        assert!(!dims.contains(5, -1));
    }
}
