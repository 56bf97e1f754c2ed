use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    #[error("Avatar not found: {0}")]
    AvatarNotFound(String),

    #[error("Map not found: {0}")]
    MapNotFound(String),
}
