//! Domain layer constants
//!
//! Constants that shape the registry resource format. Infrastructure-specific
//! constants (config file names, env prefixes) live in the infrastructure crate.

// ============================================================================
// REGISTRY FORMAT CONSTANTS
// ============================================================================

/// Character starting an end-of-line comment in a registry resource
pub const REGISTRY_COMMENT_CHAR: char = '#';

/// Reserved directory under every search-path root holding registry resources
pub const DEFAULT_REGISTRY_DIR: &str = "services";
