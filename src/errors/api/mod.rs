pub mod admin;
pub mod auth;
pub mod metadata;
pub mod space;

pub use admin::AdminError;
pub use auth::AuthError;
pub use metadata::MetadataError;
pub use space::SpaceApiError;


#[cfg(test)]
mod space_test;
