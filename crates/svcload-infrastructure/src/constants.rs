//! Infrastructure layer constants
//!
//! Registry format constants are defined in `svcload_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "svcload.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "svcload";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "SVCLOAD";

/// Separator for nested keys in environment variables (`SVCLOAD_LOGGING__LEVEL`)
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Suffix of the environment variable holding the search path as an OS path
/// list (`SVCLOAD_SEARCH_PATH`)
pub const SEARCH_PATH_ENV_SUFFIX: &str = "SEARCH_PATH";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "SVCLOAD_LOG";

/// Default log file stem when file output has none
pub const DEFAULT_LOG_FILE_STEM: &str = "svcload";
