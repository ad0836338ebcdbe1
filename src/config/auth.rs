//! Authentication configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Key shipped for local development.
pub const DEFAULT_API_KEY: &str = "berapaya";

/// API key authentication configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Shared key expected in the `X-API-Key` header
    #[serde(default = "default_api_key")]
    pub api_key: SecretString,
}

impl AuthConfig {
    /// Validate authentication configuration
    ///
    /// In production, the development default key is rejected.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let key = self.api_key.expose_secret();
        if key.trim().is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__API_KEY"));
        }
        if *environment == Environment::Production && key == DEFAULT_API_KEY {
            return Err(ValidationError::DefaultApiKeyInProduction);
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            api_key: default_api_key(),
        }
    }
}

fn default_api_key() -> SecretString {
    SecretString::new(DEFAULT_API_KEY.to_string())
}
