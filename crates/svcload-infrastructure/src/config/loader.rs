//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables,
//! and default values using Figment.

use std::env;
use std::path::{Component, Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use svcload_domain::error::{Error, Result};

use crate::config::LoaderConfig;
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
    SEARCH_PATH_ENV_SUFFIX,
};
use crate::error_ext::ErrorContext;
use crate::logging::parse_log_level;

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,

    /// Whether environment variables are consulted
    use_env: bool,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
            use_env: true,
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Ignore environment variables entirely
    pub fn without_env(mut self) -> Self {
        self.use_env = false;
        self
    }

    /// Get the configured file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// The configuration file this loader reads, if any
    ///
    /// The explicit path when one was set, otherwise the first default
    /// location that exists. An explicit path is returned even when missing.
    pub fn config_source(&self) -> Option<PathBuf> {
        self.config_path.clone().or_else(Self::find_default_config_path)
    }

    /// Load configuration from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. Default values from `LoaderConfig::default()`
    /// 2. TOML configuration file (explicit path, or the first default location found)
    /// 3. Environment variables with prefix (e.g., `SVCLOAD_REGISTRY_DIR`,
    ///    `SVCLOAD_LOGGING__LEVEL`) and the `SVCLOAD_SEARCH_PATH` path list
    pub fn load(&self) -> Result<LoaderConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(LoaderConfig::default()));

        if let Some(config_path) = self.config_source().filter(|path| path.exists()) {
            figment = figment.merge(Toml::file(config_path));
        }

        if self.use_env {
            figment = figment.merge(
                Env::prefixed(&format!("{}_", self.env_prefix))
                    .ignore(&["search_path", "log"])
                    .split(CONFIG_ENV_SEPARATOR),
            );
            let search_path_var = format!("{}_{SEARCH_PATH_ENV_SUFFIX}", self.env_prefix);
            if let Some(paths) = env::var_os(search_path_var) {
                let search_path: Vec<PathBuf> = env::split_paths(&paths).collect();
                figment = figment.merge(Serialized::default("search_path", search_path));
            }
        }

        let config: LoaderConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_config(&config)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &LoaderConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;
        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;
        Ok(())
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

/// Validate loader configuration
pub fn validate_config(config: &LoaderConfig) -> Result<()> {
    if config.search_path.is_empty() {
        return Err(Error::config("Search path cannot be empty"));
    }

    let mut components = Path::new(&config.registry_dir).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => {}
        _ => {
            return Err(Error::config(format!(
                "Registry directory must be a single relative path component, got '{}'",
                config.registry_dir
            )));
        }
    }

    parse_log_level(&config.logging.level)?;
    Ok(())
}
