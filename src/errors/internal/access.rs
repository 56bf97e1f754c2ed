use thiserror::Error;

/// Valid identity, insufficient privilege
#[derive(Error, Debug)]
pub enum AccessError {
    #[error("Admin role required (caller: {user_id})")]
    AdminRequired { user_id: String },

    #[error("User {user_id} does not own space {space_id}")]
    NotSpaceOwner { user_id: String, space_id: String },
}
