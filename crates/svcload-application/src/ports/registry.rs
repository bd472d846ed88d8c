//! Provider Type Registry
//!
//! Rust has no runtime type lookup by name, so provider types register
//! themselves in a link-time table and names are resolved against it.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                  Provider Type Registration Flow                │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Provider defines:  #[linkme::distributed_slice(             │
//! │                            PROVIDER_TYPES)]                     │
//! │                        static ENTRY: ProviderTypeEntry = ...    │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static PROVIDER_TYPES: [..] = [..]   │
//! │                              ↓                                  │
//! │  3. Registry file:     services/demo.Greeter → "demo.English"   │
//! │                              ↓                                  │
//! │  4. Resolver queries:  StaticTypeResolver::resolve("demo...")   │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Registering a Provider Type
//!
//! ```ignore
//! use svcload_application::ports::registry::{PROVIDER_TYPES, ProviderTypeEntry};
//! use svcload_domain::{Contract, boxed_instance};
//!
//! #[linkme::distributed_slice(PROVIDER_TYPES)]
//! static ENGLISH: ProviderTypeEntry = ProviderTypeEntry {
//!     name: "demo.English",
//!     description: "Greets in English",
//!     contract: Contract::of::<dyn Greeter>,
//!     factory: || Ok(boxed_instance::<dyn Greeter>(Arc::new(English))),
//! };
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use svcload_domain::ports::TypeResolver;
use svcload_domain::value_objects::{AnyInstance, BoxError, Contract, TypeHandle, boxed_instance};

/// Registry entry for a provider type
///
/// Each provider type registers itself with this entry using
/// `#[linkme::distributed_slice(PROVIDER_TYPES)]`.
pub struct ProviderTypeEntry {
    /// Fully-qualified provider name, as written in registry resources
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Contract the provider implements
    pub contract: fn() -> Contract,
    /// No-argument factory producing an `Arc<Service>` via `boxed_instance`
    pub factory: fn() -> Result<AnyInstance, BoxError>,
}

impl ProviderTypeEntry {
    /// Build the type handle for this entry
    pub fn handle(&self) -> TypeHandle {
        TypeHandle::new(self.name, (self.contract)(), self.factory)
    }
}

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static PROVIDER_TYPES: [ProviderTypeEntry] = [..];

/// List all registered provider types
///
/// Returns (name, description) tuples for every linked provider type.
/// Useful for CLI help and diagnostics.
pub fn list_provider_types() -> Vec<(&'static str, &'static str)> {
    PROVIDER_TYPES
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}

/// Resolves provider names against the link-time [`PROVIDER_TYPES`] table
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticTypeResolver;

impl TypeResolver for StaticTypeResolver {
    fn resolve(&self, name: &str) -> Option<TypeHandle> {
        PROVIDER_TYPES
            .iter()
            .find(|entry| entry.name == name)
            .map(ProviderTypeEntry::handle)
    }
}

/// Resolves provider names against an explicitly populated table
///
/// Used to override the link-time registry, e.g. for embedding or tests.
#[derive(Debug, Clone, Default)]
pub struct TableTypeResolver {
    types: HashMap<String, TypeHandle>,
}

impl TableTypeResolver {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a prepared type handle, keyed by its name
    pub fn with_type(mut self, handle: TypeHandle) -> Self {
        self.types.insert(handle.name().to_string(), handle);
        self
    }

    /// Add a provider of service `S` built by `factory`
    pub fn with_provider<S, F>(self, name: impl Into<String>, factory: F) -> Self
    where
        S: ?Sized + 'static,
        F: Fn() -> Result<Arc<S>, BoxError> + Send + Sync + 'static,
    {
        let handle = TypeHandle::new(name, Contract::of::<S>(), move || {
            factory().map(boxed_instance::<S>)
        });
        self.with_type(handle)
    }

    /// Add every linked provider type not already present
    pub fn with_registered(mut self) -> Self {
        for entry in PROVIDER_TYPES {
            self.types
                .entry(entry.name.to_string())
                .or_insert_with(|| entry.handle());
        }
        self
    }

    /// Number of known provider types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeResolver for TableTypeResolver {
    fn resolve(&self, name: &str) -> Option<TypeHandle> {
        self.types.get(name).cloned()
    }
}
