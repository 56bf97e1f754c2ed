use thiserror::Error;

pub mod access;
pub mod catalog;
pub mod credential;
pub mod database;
pub mod space;
pub mod validation;

pub use access::AccessError;
pub use catalog::CatalogError;
pub use credential::CredentialError;
pub use database::DatabaseError;
pub use space::SpaceError;
pub use validation::ValidationError;

/// Client-visible category of a failure
///
/// Every `InternalError` maps onto exactly one kind. API error types use the
/// kind (plus the concrete variant where the message matters) to pick a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Authentication,
    Authorization,
    NotFound,
    Conflict,
    OutOfBounds,
    Internal,
}

/// Internal error type for store, provider and coordinator operations
///
/// Hybrid design separates infrastructure errors (shared) from domain errors.
/// Not exposed via API - endpoints must convert to their API error type.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error("Parse error: failed to parse {value_type}: {message}")]
    Parse {
        value_type: String,
        message: String,
    },

    #[error("Crypto error: {operation} failed: {message}")]
    Crypto {
        operation: String,
        message: String,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error(transparent)]
    Access(#[from] AccessError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Space(#[from] SpaceError),
}

impl InternalError {
    /// Create a database error with context
    pub fn database(operation: &str, source: sea_orm::DbErr) -> Self {
        InternalError::Database(DatabaseError::Operation {
            operation: operation.to_string(),
            source,
        })
    }

    /// Create a transaction begin error
    pub fn transaction_begin(source: sea_orm::DbErr) -> Self {
        InternalError::Database(DatabaseError::TransactionBegin { source })
    }

    /// Create a transaction commit error
    pub fn transaction_commit(source: sea_orm::DbErr) -> Self {
        InternalError::Database(DatabaseError::TransactionCommit { source })
    }

    /// Create a parse error with context
    pub fn parse(value_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            value_type: value_type.into(),
            message: message.into(),
        }
    }

    /// Create a crypto error with context
    pub fn crypto(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Crypto {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Client-visible category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            InternalError::Database(_) | InternalError::Parse { .. } | InternalError::Crypto { .. } => {
                ErrorKind::Internal
            }
            InternalError::Validation(_) => ErrorKind::Validation,
            InternalError::Credential(err) => err.kind(),
            InternalError::Access(_) => ErrorKind::Authorization,
            InternalError::Catalog(_) => ErrorKind::NotFound,
            InternalError::Space(err) => err.kind(),
        }
    }
}
