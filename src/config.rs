//! Configuration handling for fsdgen.
//! An optional project file (fsdgen.json, fsdgen.yml or fsdgen.yaml) tunes
//! the few values the generated code depends on.

use crate::constants::{CONFIG_FILES, DEFAULT_API_CLIENT_IMPORT};
use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::path::Path;

/// Project-level settings. Every field falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Import path of the HTTP client used by generated services
    pub api_client_import: String,
    /// Slices the structure generator creates when none are given
    pub slices: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self { api_client_import: DEFAULT_API_CLIENT_IMPORT.to_string(), slices: Vec::new() }
    }
}

/// Loads the first configuration file found in `dir`.
///
/// # Arguments
/// * `dir` - Directory to look in
/// * `config_files` - List of configuration files to try
///
/// # Returns
/// * `Result<Option<String>>` - Contents of the first found file, `None` if there is none
pub fn load_config<P: AsRef<Path>>(dir: P, config_files: &[&str]) -> Result<Option<String>> {
    for file in config_files {
        let config_path = dir.as_ref().join(file);
        if config_path.is_file() {
            debug!("Loading configuration from {}", config_path.display());
            return Ok(Some(std::fs::read_to_string(&config_path)?));
        }
    }

    debug!("No configuration file found (tried: {})", config_files.join(", "));
    Ok(None)
}

/// Parses configuration content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor valid YAML for [`Config`]
pub fn parse_config(content: &str) -> Result<Config> {
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {e}"))),
    }
}

/// Resolves the effective configuration.
///
/// An explicit `config_path` must exist. Otherwise `search_dir` is searched
/// for one of [`CONFIG_FILES`] and defaults are used when nothing is found.
pub fn get_config<P: AsRef<Path>>(config_path: Option<&Path>, search_dir: P) -> Result<Config> {
    let content = match config_path {
        Some(path) => {
            if !path.is_file() {
                return Err(Error::ConfigError(format!(
                    "Invalid configuration path: {}",
                    path.display()
                )));
            }
            debug!("Loading configuration from {}", path.display());
            Some(std::fs::read_to_string(path)?)
        }
        None => load_config(search_dir, &CONFIG_FILES)?,
    };

    match content {
        Some(content) => parse_config(&content),
        None => Ok(Config::default()),
    }
}
