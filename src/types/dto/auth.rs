use poem_openapi::Object;
use serde::{Deserialize, Serialize};

/// Request model for account creation
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct SignupRequest {
    /// Unique username
    pub username: String,

    /// Plaintext password, hashed before storage
    pub password: String,

    /// Account role: "User" (default) or "Admin"
    #[oai(rename = "type")]
    #[serde(rename = "type")]
    pub role: Option<String>,
}

/// Response model for account creation
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
pub struct SignupResponse {
    /// UUID of the new user
    pub user_id: String,
}

/// Request model for signin
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct SigninRequest {
    /// Username for authentication
    pub username: String,

    /// Password for authentication
    pub password: String,
}

/// Response model containing the bearer token
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct SigninResponse {
    /// JWT to send as `Authorization: Bearer <token>`
    pub token: String,
}
