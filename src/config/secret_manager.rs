use std::fmt;

use crate::config::{EnvironmentProvider, SecretConfig, SecretType};

const JWT_SECRET_MIN_LENGTH: usize = 32;
const PEPPER_MIN_LENGTH: usize = 16;

/// Custom error type for secret-related failures
#[derive(Debug)]
pub enum SecretError {
    Missing { secret_name: String },
    InvalidLength { secret_name: String, expected: usize, actual: usize },
}

impl SecretError {
    pub fn missing(secret_name: &str) -> Self {
        Self::Missing {
            secret_name: secret_name.to_string(),
        }
    }

    pub fn invalid_length(secret_name: &str, expected: usize, actual: usize) -> Self {
        Self::InvalidLength {
            secret_name: secret_name.to_string(),
            expected,
            actual,
        }
    }
}

impl fmt::Display for SecretError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { secret_name } => {
                write!(f, "Required secret '{}' is missing", secret_name)
            }
            Self::InvalidLength { secret_name, expected, actual } => {
                write!(
                    f,
                    "Secret '{}' must be at least {} characters, got {}",
                    secret_name, expected, actual
                )
            }
        }
    }
}

impl std::error::Error for SecretError {}

/// Centralized manager for application secrets
///
/// Holds the JWT signing key and the password pepper. Both are validated once
/// at startup and never printed.
pub struct SecretManager {
    jwt_secret: String,
    pepper: String,
}

impl SecretManager {
    /// Load and validate all secrets through the environment provider
    pub fn init(env_provider: &dyn EnvironmentProvider) -> Result<Self, SecretError> {
        let jwt_secret = Self::load_secret(&Self::jwt_config(), env_provider)?;
        let pepper = Self::load_secret(&Self::pepper_config(), env_provider)?;

        Ok(Self { jwt_secret, pepper })
    }

    /// Build from literal values, applying the same length rules as `init`
    pub fn new(jwt_secret: impl Into<String>, pepper: impl Into<String>) -> Result<Self, SecretError> {
        let jwt_secret = jwt_secret.into();
        let pepper = pepper.into();

        if jwt_secret.len() < JWT_SECRET_MIN_LENGTH {
            return Err(SecretError::invalid_length("JWT_SECRET", JWT_SECRET_MIN_LENGTH, jwt_secret.len()));
        }
        if pepper.len() < PEPPER_MIN_LENGTH {
            return Err(SecretError::invalid_length("PASSWORD_PEPPER", PEPPER_MIN_LENGTH, pepper.len()));
        }

        Ok(Self { jwt_secret, pepper })
    }

    fn jwt_config() -> SecretConfig {
        SecretConfig::env_var("JWT_SECRET").min_length(JWT_SECRET_MIN_LENGTH)
    }

    fn pepper_config() -> SecretConfig {
        SecretConfig::env_var("PASSWORD_PEPPER").min_length(PEPPER_MIN_LENGTH)
    }

    /// Get the JWT secret
    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }

    /// Get the pepper for password hashing
    pub fn pepper(&self) -> &str {
        &self.pepper
    }

    pub(crate) fn load_secret(
        config: &SecretConfig,
        env_provider: &dyn EnvironmentProvider,
    ) -> Result<String, SecretError> {
        let SecretType::EnvVar { name } = &config.secret_type;

        let value = match env_provider.get_var(name) {
            Some(v) => v,
            None if !config.required => return Ok(String::new()),
            None => return Err(SecretError::missing(name)),
        };

        if let Some(min_len) = config.min_length {
            if value.len() < min_len {
                return Err(SecretError::invalid_length(name, min_len, value.len()));
            }
        }

        Ok(value)
    }
}

impl fmt::Debug for SecretManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretManager")
            .field("jwt_secret", &"<redacted>")
            .field("pepper", &"<redacted>")
            .finish()
    }
}

impl fmt::Display for SecretManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretManager {{ secrets_loaded: 2 }}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MockEnvironment;

    const JWT: &str = "this-is-a-valid-jwt-secret-with-32-characters";
    const PEPPER: &str = "valid-pepper-16ch";

    #[test]
    fn test_successful_initialization_with_valid_secrets() {
        let env = MockEnvironment::empty().with_vars(&[("JWT_SECRET", JWT), ("PASSWORD_PEPPER", PEPPER)]);

        let manager = SecretManager::init(&env).unwrap();
        assert_eq!(manager.jwt_secret(), JWT);
        assert_eq!(manager.pepper(), PEPPER);
    }

    #[test]
    fn test_error_when_jwt_secret_missing() {
        let env = MockEnvironment::empty().with_var("PASSWORD_PEPPER", PEPPER);

        match SecretManager::init(&env).unwrap_err() {
            SecretError::Missing { secret_name } => assert_eq!(secret_name, "JWT_SECRET"),
            _ => panic!("Expected Missing error"),
        }
    }

    #[test]
    fn test_error_when_pepper_missing() {
        let env = MockEnvironment::empty().with_var("JWT_SECRET", JWT);

        match SecretManager::init(&env).unwrap_err() {
            SecretError::Missing { secret_name } => assert_eq!(secret_name, "PASSWORD_PEPPER"),
            _ => panic!("Expected Missing error"),
        }
    }

    #[test]
    fn test_error_when_jwt_secret_too_short() {
        let env = MockEnvironment::empty().with_vars(&[("JWT_SECRET", "short-secret"), ("PASSWORD_PEPPER", PEPPER)]);

        match SecretManager::init(&env).unwrap_err() {
            SecretError::InvalidLength { secret_name, expected, actual } => {
                assert_eq!(secret_name, "JWT_SECRET");
                assert_eq!(expected, 32);
                assert_eq!(actual, 12);
            }
            _ => panic!("Expected InvalidLength error"),
        }
    }

    #[test]
    fn test_new_applies_length_rules() {
        assert!(SecretManager::new(JWT, PEPPER).is_ok());

        match SecretManager::new(JWT, "short").unwrap_err() {
            SecretError::InvalidLength { secret_name, expected, actual } => {
                assert_eq!(secret_name, "PASSWORD_PEPPER");
                assert_eq!(expected, 16);
                assert_eq!(actual, 5);
            }
            _ => panic!("Expected InvalidLength error"),
        }
    }

    #[test]
    fn test_debug_and_display_do_not_expose_secrets() {
        let manager = SecretManager::new(JWT, PEPPER).unwrap();

        let debug_output = format!("{:?}", manager);
        assert!(debug_output.contains("<redacted>"));
        assert!(!debug_output.contains(JWT));
        assert!(!debug_output.contains(PEPPER));

        let display_output = format!("{}", manager);
        assert!(display_output.contains("secrets_loaded: 2"));
        assert!(!display_output.contains(JWT));
    }

    #[test]
    fn test_optional_secret_may_be_absent() {
        let config = SecretConfig::env_var("OPTIONAL_SECRET").required(false);

        let value = SecretManager::load_secret(&config, &MockEnvironment::empty()).unwrap();
        assert_eq!(value, "");
    }
}
