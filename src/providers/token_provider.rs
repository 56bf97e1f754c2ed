use chrono::Utc;
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use std::fmt;
use std::sync::Arc;

use crate::config::SecretManager;
use crate::errors::InternalError;
use crate::errors::internal::CredentialError;
use crate::types::internal::auth::{Claims, Role};

const JWT_EXPIRATION_HOURS: i64 = 24;

/// Issues and validates the bearer credential carried by every request
pub struct TokenProvider {
    secret_manager: Arc<SecretManager>,
    jwt_expiration_hours: i64,
}

impl TokenProvider {
    pub fn new(secret_manager: Arc<SecretManager>) -> Self {
        Self {
            secret_manager,
            jwt_expiration_hours: JWT_EXPIRATION_HOURS,
        }
    }

    /// Generate a JWT binding `user_id` to `role`
    ///
    /// # Returns
    /// * `Ok(String)` - Encoded HS256 token
    /// * `Err(InternalError::Crypto)` - Encoding failed
    pub fn generate_jwt(&self, user_id: &str, role: Role) -> Result<String, InternalError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            role,
            exp: now + self.jwt_expiration_hours * 60 * 60,
            iat: now,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret_manager.jwt_secret().as_bytes()),
        )
        .map_err(|e| InternalError::crypto("jwt_generation", format!("Failed to generate JWT: {}", e)))
    }

    /// Validate a JWT and return its claims
    ///
    /// Expired tokens map to `ExpiredToken`, everything else (bad signature,
    /// malformed, unknown role) to `InvalidToken`.
    pub fn validate_jwt(&self, token: &str) -> Result<Claims, InternalError> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret_manager.jwt_secret().as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| {
            let err = match e.kind() {
                JwtErrorKind::ExpiredSignature => CredentialError::ExpiredToken("jwt".to_string()),
                _ => CredentialError::invalid_token("jwt", "invalid signature or malformed"),
            };
            tracing::debug!("JWT validation failed: {}", err);
            InternalError::from(err)
        })
    }
}

impl fmt::Debug for TokenProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenProvider")
            .field("secret_manager", &"<redacted>")
            .field("jwt_expiration_hours", &self.jwt_expiration_hours)
            .finish()
    }
}
