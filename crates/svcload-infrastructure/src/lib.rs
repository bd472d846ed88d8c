//! Infrastructure Layer - svcload
//!
//! Cross-cutting technical concerns around the discovery engine:
//!
//! - `locator`: Filesystem search-path and in-memory resource locators
//! - `config`: Figment-based configuration (defaults → TOML → environment)
//! - `logging`: tracing-subscriber initialisation
//! - `context`: Building the ambient lookup context from configuration
//! - `inspect`: Raw registry listings for tooling

pub mod config;
pub mod constants;
pub mod context;
pub mod error_ext;
pub mod inspect;
pub mod locator;
pub mod logging;

pub use config::{ConfigLoader, LoaderConfig, LoggingConfig};
pub use context::{ambient_context, build_context};
pub use inspect::{RegistryEntry, RegistryListing, inspect};
pub use locator::{MemoryLocator, SearchPathLocator};
