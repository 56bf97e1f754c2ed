use poem_openapi::Object;

/// Response model for health check endpoint
#[derive(Object, Debug)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,

    /// Timestamp of the health check (ISO 8601 format)
    pub timestamp: String,
}

/// Standardized error response model
#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Error type or category
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>, status_code: u16) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status_code,
        }
    }

    /// Body for missing, invalid or expired bearer credentials
    pub fn unauthenticated() -> Self {
        Self::new("unauthenticated", "Authentication required", 403)
    }

    /// Generic body for infrastructure failures, details stay in the logs
    pub fn internal() -> Self {
        Self::new("internal_error", "An internal error occurred", 500)
    }
}

/// Response model for operations that only report success
#[derive(Object, Debug)]
pub struct MessageResponse {
    /// Human-readable message describing the result
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response carrying the id of a newly created entity
#[derive(Object, Debug)]
pub struct IdResponse {
    /// UUID of the created entity
    pub id: String,
}
