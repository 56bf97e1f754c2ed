use std::fmt;
use std::sync::Arc;

use crate::config::errors::BootstrapError;
use crate::config::{EnvironmentProvider, SystemEnvironment};

const DEFAULT_DATABASE_URL: &str = "sqlite://metaverse.db?mode=rwc";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "3000";

/// Bootstrap settings for infrastructure configuration
pub struct BootstrapSettings {
    database_url: String,
    server_host: String,
    server_port: u16,
}

impl BootstrapSettings {
    /// Load bootstrap settings through the given environment provider
    pub fn from_env_provider(env_provider: Arc<dyn EnvironmentProvider>) -> Result<Self, BootstrapError> {
        let database_url = Self::load(&env_provider, "DATABASE_URL", DEFAULT_DATABASE_URL);
        if database_url.trim().is_empty() {
            return Err(BootstrapError::invalid("DATABASE_URL", "cannot be empty"));
        }

        let server_host = Self::load(&env_provider, "HOST", DEFAULT_HOST);
        Self::validate_host_address(&server_host)
            .map_err(|reason| BootstrapError::invalid("HOST", reason))?;

        let port_value = Self::load(&env_provider, "PORT", DEFAULT_PORT);
        let server_port = Self::parse_port(&port_value, "PORT")?;

        Ok(Self {
            database_url,
            server_host,
            server_port,
        })
    }

    /// Convenience method that uses the system environment provider
    pub fn from_env() -> Result<Self, BootstrapError> {
        Self::from_env_provider(Arc::new(SystemEnvironment))
    }

    fn load(env_provider: &Arc<dyn EnvironmentProvider>, key: &str, default: &str) -> String {
        env_provider.get_var(key).unwrap_or_else(|| default.to_string())
    }

    /// Parse a port number, rejecting 0
    fn parse_port(value: &str, setting_name: &str) -> Result<u16, BootstrapError> {
        let port = value.trim().parse::<u16>().map_err(|e| BootstrapError::ParseError {
            setting_name: setting_name.to_string(),
            error: format!("Expected port number between 1 and 65535, got '{}': {}", value, e),
        })?;

        if port == 0 {
            return Err(BootstrapError::invalid(setting_name, "Port 0 is outside valid range 1-65535"));
        }

        Ok(port)
    }

    /// Basic shape check for IPv4, IPv6 or hostname; no DNS resolution
    fn validate_host_address(value: &str) -> Result<(), String> {
        if value.is_empty() {
            return Err("Host address cannot be empty".to_string());
        }

        if value.contains(':') {
            return Ok(());
        }

        let valid = value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-');
        if !valid || value.starts_with('.') || value.ends_with('.') {
            return Err(format!("Invalid host address: {}", value));
        }

        Ok(())
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn server_host(&self) -> &str {
        &self.server_host
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Public base URL advertised in the OpenAPI document
    pub fn public_url(&self) -> String {
        let host = if self.server_host == "0.0.0.0" {
            "localhost"
        } else {
            self.server_host.as_str()
        };
        format!("http://{}:{}/api/v1", host, self.server_port)
    }
}

impl fmt::Debug for BootstrapSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapSettings")
            .field("database_url", &self.database_url)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}
