use crate::errors::internal::{ErrorKind, InternalError};
use crate::types::dto::common::ErrorResponse;
use poem_openapi::{ApiResponse, payload::Json};
use std::fmt;

/// Space and placement error types
#[derive(ApiResponse, Debug)]
pub enum SpaceApiError {
    /// Malformed or missing input
    #[oai(status = 400)]
    InvalidInput(Json<ErrorResponse>),

    /// Space, map, element or placement does not exist
    #[oai(status = 400)]
    NotFound(Json<ErrorResponse>),

    /// Placement lies outside the space
    #[oai(status = 400)]
    OutOfBounds(Json<ErrorResponse>),

    /// Missing or invalid bearer credential
    #[oai(status = 403)]
    Unauthenticated(Json<ErrorResponse>),

    /// Caller does not own the space
    #[oai(status = 403)]
    NotOwner(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl SpaceApiError {
    /// Create an InvalidInput error
    pub fn invalid_input(message: String) -> Self {
        SpaceApiError::InvalidInput(Json(ErrorResponse::new("invalid_input", message, 400)))
    }

    /// Create a NotFound error
    pub fn not_found(message: String) -> Self {
        SpaceApiError::NotFound(Json(ErrorResponse::new("not_found", message, 400)))
    }

    /// Create an OutOfBounds error
    pub fn out_of_bounds(message: String) -> Self {
        SpaceApiError::OutOfBounds(Json(ErrorResponse::new("out_of_bounds", message, 400)))
    }

    /// Create an Unauthenticated error
    pub fn unauthenticated() -> Self {
        SpaceApiError::Unauthenticated(Json(ErrorResponse::unauthenticated()))
    }

    /// Create a NotOwner error
    pub fn not_owner() -> Self {
        SpaceApiError::NotOwner(Json(ErrorResponse::new(
            "not_owner",
            "Only the creator of a space can modify it",
            403,
        )))
    }

    fn internal_server_error() -> Self {
        SpaceApiError::InternalError(Json(ErrorResponse::internal()))
    }

    /// Convert InternalError to SpaceApiError
    ///
    /// Internal error details are logged but not exposed to clients.
    pub fn from_internal_error(err: InternalError) -> Self {
        match err.kind() {
            ErrorKind::Validation => Self::invalid_input(err.to_string()),
            ErrorKind::NotFound => Self::not_found(err.to_string()),
            ErrorKind::OutOfBounds => Self::out_of_bounds(err.to_string()),
            ErrorKind::Authentication => Self::unauthenticated(),
            ErrorKind::Authorization => Self::not_owner(),
            ErrorKind::Internal => {
                tracing::error!("Internal error in space operation: {}", err);
                Self::internal_server_error()
            }
            ErrorKind::Conflict => {
                tracing::warn!("Unexpected error in space operation: {}", err);
                Self::internal_server_error()
            }
        }
    }

    fn body(&self) -> &ErrorResponse {
        match self {
            SpaceApiError::InvalidInput(json)
            | SpaceApiError::NotFound(json)
            | SpaceApiError::OutOfBounds(json)
            | SpaceApiError::Unauthenticated(json)
            | SpaceApiError::NotOwner(json)
            | SpaceApiError::InternalError(json) => &json.0,
        }
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        self.body().message.clone()
    }

    /// Get the error code from the error variant
    pub fn error_code(&self) -> &str {
        &self.body().error
    }

    /// Get the HTTP status code from the error variant
    pub fn status_code(&self) -> u16 {
        self.body().status_code
    }
}

impl From<InternalError> for SpaceApiError {
    fn from(err: InternalError) -> Self {
        Self::from_internal_error(err)
    }
}

impl fmt::Display for SpaceApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
