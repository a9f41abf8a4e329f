//! Client configuration

use serde::Deserialize;

/// Backend connection configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend API, including the `/api` prefix
    pub base_url: String,
    /// Request timeout in seconds, applied to every call
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".to_string(),
            timeout_secs: 30,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `CLAIMGUARD_*` environment variables,
    /// falling back to the defaults
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let defaults = ApiConfig::default();
        config::Config::builder()
            .set_default("base_url", defaults.base_url)?
            .set_default("timeout_secs", defaults.timeout_secs)?
            .add_source(config::Environment::with_prefix("CLAIMGUARD"))
            .build()?
            .try_deserialize()
    }
}
