use crate::errors::internal::{CredentialError, ErrorKind, InternalError};
use crate::types::dto::common::ErrorResponse;
use poem_openapi::{ApiResponse, payload::Json};
use std::fmt;

/// Signup and signin error types
#[derive(ApiResponse, Debug)]
pub enum AuthError {
    /// Malformed or missing input
    #[oai(status = 400)]
    InvalidInput(Json<ErrorResponse>),

    /// Username already exists
    #[oai(status = 400)]
    DuplicateUsername(Json<ErrorResponse>),

    /// Unknown username or wrong password
    #[oai(status = 403)]
    InvalidCredentials(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl AuthError {
    /// Create an InvalidInput error
    pub fn invalid_input(message: String) -> Self {
        AuthError::InvalidInput(Json(ErrorResponse::new("invalid_input", message, 400)))
    }

    /// Create a DuplicateUsername error
    pub fn duplicate_username() -> Self {
        AuthError::DuplicateUsername(Json(ErrorResponse::new(
            "duplicate_username",
            "Username already exists",
            400,
        )))
    }

    /// Create an InvalidCredentials error
    pub fn invalid_credentials() -> Self {
        AuthError::InvalidCredentials(Json(ErrorResponse::new(
            "invalid_credentials",
            "Invalid username or password",
            403,
        )))
    }

    fn internal_server_error() -> Self {
        AuthError::InternalError(Json(ErrorResponse::internal()))
    }

    /// Convert InternalError to AuthError
    ///
    /// Internal error details are logged but not exposed to clients.
    pub fn from_internal_error(err: InternalError) -> Self {
        match &err {
            InternalError::Validation(validation) => Self::invalid_input(validation.to_string()),
            InternalError::Credential(CredentialError::DuplicateUsername(_)) => Self::duplicate_username(),
            InternalError::Credential(CredentialError::InvalidCredentials)
            | InternalError::Credential(CredentialError::UserNotFound(_)) => Self::invalid_credentials(),
            _ if err.kind() == ErrorKind::Internal => {
                tracing::error!("Internal error in auth operation: {}", err);
                Self::internal_server_error()
            }
            _ => {
                tracing::warn!("Unexpected error in auth operation: {}", err);
                Self::internal_server_error()
            }
        }
    }

    fn body(&self) -> &ErrorResponse {
        match self {
            AuthError::InvalidInput(json)
            | AuthError::DuplicateUsername(json)
            | AuthError::InvalidCredentials(json)
            | AuthError::InternalError(json) => &json.0,
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

impl From<InternalError> for AuthError {
    fn from(err: InternalError) -> Self {
        Self::from_internal_error(err)
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
