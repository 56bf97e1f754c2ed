/// Where a secret is read from
#[derive(Debug, Clone)]
pub enum SecretType {
    EnvVar { name: String },
}

/// Loading rules for a single secret
#[derive(Debug, Clone)]
pub struct SecretConfig {
    pub secret_type: SecretType,
    pub required: bool,
    /// Minimum length in bytes, if any
    pub min_length: Option<usize>,
}

impl SecretConfig {
    pub fn new(secret_type: SecretType) -> Self {
        Self {
            secret_type,
            required: true,
            min_length: None,
        }
    }

    /// Required secret read from the named environment variable
    pub fn env_var(name: &str) -> Self {
        Self::new(SecretType::EnvVar {
            name: name.to_string(),
        })
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }
}
