// Providers layer - Work performers and business logic
//
// Providers hold the rules (credentials, access, placement bounds) that
// coordinators compose. They never open transactions themselves.

pub mod access_provider;
pub mod password_provider;
pub mod placement_validator;
pub mod token_provider;

pub use access_provider::AccessProvider;
pub use password_provider::PasswordProvider;
pub use placement_validator::PlacementValidator;
pub use token_provider::TokenProvider;
