//! Application Layer - svcload
//!
//! Implements the discovery engine: turning the registry resources of a
//! category into a lazy, deduplicated stream of type handles and then into
//! a lazy stream of cached instances.
//!
//! ## Architecture
//!
//! ```text
//! ResourceLocator → RegistryReader → parse_line → TypeCache → Classes → Instances
//!                                                                 ↑          ↑
//!                                                          ServiceLoader facade
//! ```
//!
//! Every facade call starts a fresh session: its own type cache, its own
//! instance cache and at most one open resource. Nothing is shared between
//! sessions, so independent lookups need no locking.
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `svcload-domain`: For the error taxonomy, `Category`, `TypeHandle` and ports
//! - `linkme`: For the link-time provider type registry

pub mod context;
pub mod discovery;
pub mod loader;
pub mod policy;
pub mod ports;

pub use context::LookupContext;
pub use discovery::{Classes, Instances, RegistryReader, Resolution, TypeCache, parse_line};
pub use loader::ServiceLoader;
pub use policy::FailurePolicy;
pub use ports::registry::{
    PROVIDER_TYPES, ProviderTypeEntry, StaticTypeResolver, TableTypeResolver, list_provider_types,
};
