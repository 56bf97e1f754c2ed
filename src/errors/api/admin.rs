use crate::errors::internal::{CredentialError, ErrorKind, InternalError};
use crate::types::dto::common::ErrorResponse;
use poem_openapi::{ApiResponse, payload::Json};
use std::fmt;

/// Catalog administration error types
#[derive(ApiResponse, Debug)]
pub enum AdminError {
    /// Malformed or missing input
    #[oai(status = 400)]
    InvalidInput(Json<ErrorResponse>),

    /// Referenced catalog entity does not exist
    #[oai(status = 400)]
    NotFound(Json<ErrorResponse>),

    /// Missing or invalid bearer credential
    #[oai(status = 403)]
    Unauthenticated(Json<ErrorResponse>),

    /// Caller is not an admin
    #[oai(status = 403)]
    AdminRequired(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl AdminError {
    /// Create an InvalidInput error
    pub fn invalid_input(message: String) -> Self {
        AdminError::InvalidInput(Json(ErrorResponse::new("invalid_input", message, 400)))
    }

    /// Create a NotFound error
    pub fn not_found(message: String) -> Self {
        AdminError::NotFound(Json(ErrorResponse::new("not_found", message, 400)))
    }

    /// Create an Unauthenticated error
    pub fn unauthenticated() -> Self {
        AdminError::Unauthenticated(Json(ErrorResponse::unauthenticated()))
    }

    /// Create an AdminRequired error
    pub fn admin_required() -> Self {
        AdminError::AdminRequired(Json(ErrorResponse::new(
            "admin_required",
            "Admin role required",
            403,
        )))
    }

    fn internal_server_error() -> Self {
        AdminError::InternalError(Json(ErrorResponse::internal()))
    }

    /// Convert InternalError to AdminError
    ///
    /// This is the explicit conversion point from internal errors to API errors.
    /// Internal error details are logged but not exposed to clients.
    pub fn from_internal_error(err: InternalError) -> Self {
        match err.kind() {
            ErrorKind::Validation => Self::invalid_input(err.to_string()),
            ErrorKind::Authentication => Self::unauthenticated(),
            ErrorKind::Authorization => Self::admin_required(),
            ErrorKind::NotFound => match &err {
                InternalError::Credential(CredentialError::UserNotFound(_)) => {
                    tracing::warn!("Caller vanished during admin operation: {}", err);
                    Self::unauthenticated()
                }
                _ => Self::not_found(err.to_string()),
            },
            ErrorKind::Internal => {
                tracing::error!("Internal error in admin operation: {}", err);
                Self::internal_server_error()
            }
            ErrorKind::Conflict | ErrorKind::OutOfBounds => {
                tracing::warn!("Unexpected error in admin operation: {}", err);
                Self::internal_server_error()
            }
        }
    }

    fn body(&self) -> &ErrorResponse {
        match self {
            AdminError::InvalidInput(json)
            | AdminError::NotFound(json)
            | AdminError::Unauthenticated(json)
            | AdminError::AdminRequired(json)
            | AdminError::InternalError(json) => &json.0,
        }
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        self.body().message.clone()
    }

    /// Get the HTTP status code from the error variant
    pub fn status_code(&self) -> u16 {
        self.body().status_code
    }
}

impl From<InternalError> for AdminError {
    fn from(err: InternalError) -> Self {
        Self::from_internal_error(err)
    }
}

impl fmt::Display for AdminError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
