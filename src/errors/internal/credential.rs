use thiserror::Error;

use super::ErrorKind;

/// Identity errors: signup, signin and bearer credential checks
#[derive(Error, Debug)]
pub enum CredentialError {
    /// Unknown username or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User already exists: {0}")]
    DuplicateUsername(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    /// No bearer credential on a request that needs one
    #[error("Authentication required")]
    MissingToken,

    #[error("Invalid token: {token_type} - {reason}")]
    InvalidToken { token_type: String, reason: String },

    #[error("Expired token: {0}")]
    ExpiredToken(String),
}

impl CredentialError {
    pub fn invalid_token(token_type: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidToken {
            token_type: token_type.into(),
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CredentialError::DuplicateUsername(_) => ErrorKind::Conflict,
            CredentialError::UserNotFound(_) => ErrorKind::NotFound,
            CredentialError::InvalidCredentials
            | CredentialError::MissingToken
            | CredentialError::InvalidToken { .. }
            | CredentialError::ExpiredToken(_) => ErrorKind::Authentication,
        }
    }
}
