use crate::errors::internal::{ErrorKind, InternalError};
use crate::types::dto::common::ErrorResponse;
use poem_openapi::{ApiResponse, payload::Json};
use std::fmt;

/// User metadata error types
#[derive(ApiResponse, Debug)]
pub enum MetadataError {
    /// Malformed input or unknown avatar
    #[oai(status = 400)]
    InvalidInput(Json<ErrorResponse>),

    /// Missing or invalid bearer credential
    #[oai(status = 403)]
    Unauthenticated(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl MetadataError {
    pub fn invalid_input(message: String) -> Self {
        MetadataError::InvalidInput(Json(ErrorResponse::new("invalid_input", message, 400)))
    }

    pub fn unauthenticated() -> Self {
        MetadataError::Unauthenticated(Json(ErrorResponse::unauthenticated()))
    }

    fn internal_server_error() -> Self {
        MetadataError::InternalError(Json(ErrorResponse::internal()))
    }

    pub fn from_internal_error(err: InternalError) -> Self {
        match err.kind() {
            ErrorKind::Validation | ErrorKind::NotFound => Self::invalid_input(err.to_string()),
            ErrorKind::Authentication => Self::unauthenticated(),
            _ => {
                tracing::error!("Error in metadata operation: {}", err);
                Self::internal_server_error()
            }
        }
    }

    pub fn message(&self) -> String {
        match self {
            MetadataError::InvalidInput(json)
            | MetadataError::Unauthenticated(json)
            | MetadataError::InternalError(json) => json.0.message.clone(),
        }
    }
}

impl From<InternalError> for MetadataError {
    fn from(err: InternalError) -> Self {
        Self::from_internal_error(err)
    }
}

impl fmt::Display for MetadataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
