//! Configuration loading from disk and environment overrides.

use std::env;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::MultitoolConfig;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Load configuration from a TOML file.
///
/// Semantic validation happens separately (see [`crate::config::validate_config`])
/// so that environment and CLI overrides can be applied to the loaded
/// config before it is checked.
pub fn load_config(path: &Path) -> Result<MultitoolConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: MultitoolConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Apply environment overrides to a loaded configuration.
///
/// Called once at startup. `COMPONENT` replaces the component name and
/// `RETURN_TEXT` sets the `/hello` suffix; empty values are ignored.
pub fn apply_env_overrides(config: &mut MultitoolConfig) {
    if let Ok(component) = env::var("COMPONENT") {
        if !component.is_empty() {
            config.identity.component = component;
        }
    }
    if let Ok(text) = env::var("RETURN_TEXT") {
        if !text.is_empty() {
            config.identity.return_text = Some(text);
        }
    }
}
