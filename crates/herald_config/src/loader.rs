//! Configuration file loading.

use crate::error::ConfigError;
use crate::types::HeraldConfig;
use std::path::Path;

/// Name of the configuration file looked up in a project directory.
pub const CONFIG_FILE_NAME: &str = "herald.toml";

/// Loads `<project_dir>/herald.toml`.
pub fn load_config(project_dir: &Path) -> Result<HeraldConfig, ConfigError> {
    let content = std::fs::read_to_string(project_dir.join(CONFIG_FILE_NAME))?;
    load_config_from_str(&content)
}

/// Parses a `herald.toml` document.
pub fn load_config_from_str(content: &str) -> Result<HeraldConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
}
