// Configuration loader
// Loads secrets from ~/.dragonden/config.toml or environment variables

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

use super::settings::Config;

/// Load configuration from the dragonden config file or environment
pub fn load_config() -> Result<Config> {
    // A local .env is convenient in development; absence is fine.
    let _ = dotenvy::dotenv();

    // Try loading from ~/.dragonden/config.toml first
    if let Some(config) = try_load_from_home()? {
        return Ok(config);
    }

    // Fall back to environment variables
    let api_key = std::env::var("ANTHROPIC_API_KEY").unwrap_or_default();
    let class_password = std::env::var("CLASS_PASSWORD").unwrap_or_default();

    if !api_key.is_empty() && !class_password.is_empty() {
        let mut config = Config::new(api_key, class_password);
        if let Ok(addr) = std::env::var("DRAGONDEN_ADDR") {
            config.bind_address = addr;
        }
        config
            .validate()
            .context("Configuration validation failed")?;
        return Ok(config);
    }

    // No config found - tell the operator exactly what is missing
    bail!(
        "No configuration found. Either create ~/.dragonden/config.toml:\n\n\
        api_key = \"sk-ant-...\"\n\
        class_password = \"...\"\n\n\
        or set environment variables:\n\
        export ANTHROPIC_API_KEY=\"sk-ant-...\"\n\
        export CLASS_PASSWORD=\"...\""
    );
}

/// Load and validate a config file at an explicit path.
pub fn load_config_from_path(path: &Path) -> Result<Config> {
    #[derive(serde::Deserialize)]
    struct TomlConfig {
        api_key: String,
        class_password: String,
        #[serde(default)]
        bind_address: Option<String>,
        #[serde(default)]
        model: Option<String>,
        #[serde(default)]
        api_base_url: Option<String>,
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;

    let toml_config: TomlConfig =
        toml::from_str(&contents).context("Failed to parse config TOML")?;

    let mut config = Config::new(toml_config.api_key, toml_config.class_password);
    if let Some(addr) = toml_config.bind_address {
        config.bind_address = addr;
    }
    if let Some(model) = toml_config.model {
        config.model = model;
    }
    config.api_base_url = toml_config.api_base_url;

    config
        .validate()
        .context("Configuration validation failed")?;

    Ok(config)
}

fn try_load_from_home() -> Result<Option<Config>> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    let config_path = home.join(".dragonden/config.toml");

    if !config_path.exists() {
        return Ok(None);
    }

    load_config_from_path(&config_path).map(Some)
}
