use argon2::password_hash::SaltString;
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};
use std::sync::Arc;

use crate::config::SecretManager;
use crate::errors::InternalError;

/// Argon2id password hashing keyed with the server-side pepper
pub struct PasswordProvider {
    secret_manager: Arc<SecretManager>,
}

impl PasswordProvider {
    pub fn new(secret_manager: Arc<SecretManager>) -> Self {
        Self { secret_manager }
    }

    fn argon2(pepper: &str) -> Result<Argon2<'_>, InternalError> {
        Argon2::new_with_secret(pepper.as_bytes(), Algorithm::Argon2id, Version::V0x13, Params::default())
            .map_err(|e| InternalError::crypto("argon2_init", e.to_string()))
    }

    /// Hash a password into PHC string form
    ///
    /// Runs on the blocking pool; hashing is deliberately slow.
    pub async fn hash_password(&self, password: &str) -> Result<String, InternalError> {
        let secret_manager = Arc::clone(&self.secret_manager);
        let password = password.to_owned();

        tokio::task::spawn_blocking(move || -> Result<String, InternalError> {
            let salt = SaltString::generate(&mut rand_core::OsRng);
            let hash = Self::argon2(secret_manager.pepper())?
                .hash_password(password.as_bytes(), &salt)
                .map_err(|e| InternalError::crypto("password_hash", e.to_string()))?;
            Ok(hash.to_string())
        })
        .await
        .map_err(|e| InternalError::crypto("password_hash", e.to_string()))?
    }

    /// Check a password against a stored PHC hash
    ///
    /// # Returns
    /// * `Ok(true)` - Password matches
    /// * `Ok(false)` - Password does not match
    /// * `Err(InternalError)` - Stored hash is unreadable or the worker failed
    pub async fn verify_password(&self, password_hash: &str, password: &str) -> Result<bool, InternalError> {
        let secret_manager = Arc::clone(&self.secret_manager);
        let password_hash = password_hash.to_owned();
        let password = password.to_owned();

        tokio::task::spawn_blocking(move || -> Result<bool, InternalError> {
            let parsed_hash = PasswordHash::new(&password_hash)
                .map_err(|e| InternalError::parse("password_hash", e.to_string()))?;
            Ok(Self::argon2(secret_manager.pepper())?
                .verify_password(password.as_bytes(), &parsed_hash)
                .is_ok())
        })
        .await
        .map_err(|e| InternalError::crypto("password_verify", e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::utils::test_secret_manager;

    #[tokio::test]
    async fn test_hash_is_argon2id_phc_string() {
        let provider = PasswordProvider::new(test_secret_manager());

        let hash = provider.hash_password("correct horse").await.unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(!hash.contains("correct horse"));
    }

    #[tokio::test]
    async fn test_verify_accepts_right_password_only() {
        let provider = PasswordProvider::new(test_secret_manager());
        let hash = provider.hash_password("correct horse").await.unwrap();

        assert!(provider.verify_password(&hash, "correct horse").await.unwrap());
        assert!(!provider.verify_password(&hash, "wrong horse").await.unwrap());
    }

    #[tokio::test]
    async fn test_same_password_gets_distinct_salts() {
        let provider = PasswordProvider::new(test_secret_manager());

        let first = provider.hash_password("pw").await.unwrap();
        let second = provider.hash_password("pw").await.unwrap();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_pepper_is_part_of_the_hash() {
        let provider = PasswordProvider::new(test_secret_manager());
        let hash = provider.hash_password("pw").await.unwrap();

        let other = PasswordProvider::new(Arc::new(
            SecretManager::new("test-secret-key-minimum-32-characters-long", "a-different-pepper").unwrap(),
        ));
        assert!(!other.verify_password(&hash, "pw").await.unwrap());
    }

    #[tokio::test]
    async fn test_unreadable_hash_is_an_error() {
        let provider = PasswordProvider::new(test_secret_manager());
        assert!(provider.verify_password("not-a-phc-string", "pw").await.is_err());
    }
}
