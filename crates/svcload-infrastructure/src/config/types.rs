//! Configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use svcload_application::FailurePolicy;
use svcload_domain::constants::DEFAULT_REGISTRY_DIR;

use crate::constants::DEFAULT_LOG_LEVEL;

/// Provider discovery configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Ordered roots scanned for registry resources
    pub search_path: Vec<PathBuf>,

    /// Directory under every root holding one registry file per category
    pub registry_dir: String,

    /// What to do with entries that fail to resolve or instantiate
    pub failure_policy: FailurePolicy,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            search_path: vec![PathBuf::from(".")],
            registry_dir: DEFAULT_REGISTRY_DIR.to_string(),
            failure_policy: FailurePolicy::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Log to file in addition to stderr
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}
