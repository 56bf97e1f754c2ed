/// A catalog element at a grid position
///
/// Used both for map defaults (in template order) and for requests that add
/// an element to a space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub element_id: String,
    pub x: i32,
    pub y: i32,
}

impl Placement {
    pub fn new(element_id: impl Into<String>, x: i32, y: i32) -> Self {
        Self {
            element_id: element_id.into(),
            x,
            y,
        }
    }
}
