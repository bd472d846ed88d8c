//! Ambient lookup context
//!
//! The context used when a caller does not supply one: search path and
//! policy from configuration, provider types from the link-time registry.

use std::sync::{Arc, OnceLock};

use svcload_application::{LookupContext, StaticTypeResolver};
use svcload_domain::error::Result;
use tracing::debug;

use crate::config::{ConfigLoader, LoaderConfig};
use crate::logging::log_config_loaded;
use crate::locator::SearchPathLocator;

static AMBIENT: OnceLock<LookupContext> = OnceLock::new();

/// Build a lookup context from loader configuration
pub fn build_context(config: &LoaderConfig) -> LookupContext {
    LookupContext::new(
        Arc::new(SearchPathLocator::from_config(config)),
        Arc::new(StaticTypeResolver),
    )
    .with_policy(config.failure_policy)
}

/// The process-wide ambient context
///
/// Configuration is loaded on first use and reused afterwards. The context
/// itself is immutable; every lookup still gets its own session state.
pub fn ambient_context() -> Result<LookupContext> {
    if let Some(context) = AMBIENT.get() {
        return Ok(context.clone());
    }

    let loader = ConfigLoader::new();
    let config = loader.load()?;
    if let Some(path) = loader.config_source() {
        log_config_loaded(&path, path.exists());
    }
    debug!(
        roots = config.search_path.len(),
        registry_dir = %config.registry_dir,
        "Ambient lookup context configured"
    );
    Ok(AMBIENT.get_or_init(|| build_context(&config)).clone())
}
