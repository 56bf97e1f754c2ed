use thiserror::Error;

/// Malformed or missing request input, detected before any store is touched
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidField { field: String, reason: String },
}

impl ValidationError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField { field: field.into() }
    }

    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Reject empty or whitespace-only text fields
    pub fn require_non_empty(field: &str, value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(Self::missing(field));
        }
        Ok(())
    }

    /// Reject sizes below one cell
    pub fn require_positive(field: &str, value: i32) -> Result<(), ValidationError> {
        if value < 1 {
            return Err(Self::invalid(field, format!("must be at least 1, got {}", value)));
        }
        Ok(())
    }
}
