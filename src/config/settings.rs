// Configuration structs

use anyhow::{bail, Result};

use super::constants::{DEFAULT_BIND_ADDR, DEFAULT_MODEL};

#[derive(Debug, Clone)]
pub struct Config {
    /// Anthropic API key
    pub api_key: String,

    /// Shared secret gating the evaluation endpoints
    pub class_password: String,

    /// Bind address (e.g., "0.0.0.0:3001")
    pub bind_address: String,

    /// Model identifier sent with every upstream request
    pub model: String,

    /// Override for the Messages API host (tests, proxies); None = production API
    pub api_base_url: Option<String>,
}

impl Config {
    /// Create a config with the two required secrets and defaults for the rest.
    pub fn new(api_key: String, class_password: String) -> Self {
        Self {
            api_key,
            class_password,
            bind_address: DEFAULT_BIND_ADDR.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_base_url: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            bail!("API key must not be empty");
        }
        if self.class_password.is_empty() {
            bail!("Class password must not be empty");
        }
        if self.bind_address.parse::<std::net::SocketAddr>().is_err() {
            bail!("Invalid bind address: {}", self.bind_address);
        }
        Ok(())
    }
}
