//! Configuration module for recette
//!
//! Manages application configuration including the default catalog path and
//! the search policy. Configuration is stored in the user's config directory.

use std::fs;
use std::path::{Path, PathBuf};
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::search::DEFAULT_MIN_QUERY_LEN;

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    /// Catalog file used when `--catalog` is not given on the command line
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// Minimum normalized query length before text filtering engages
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

fn default_min_query_len() -> usize {
    DEFAULT_MIN_QUERY_LEN
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            min_query_len: DEFAULT_MIN_QUERY_LEN,
            quiet: false,
        }
    }
}

impl AppConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        let recette_config_dir = config_dir.join("recette");
        Ok(recette_config_dir.join("config.toml"))
    }

    /// Load configuration from file, creating default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.to_path_buf()).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(&config_path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Set the default catalog path
    pub fn set_catalog(&mut self, path: PathBuf) {
        self.catalog = Some(path);
    }
}
