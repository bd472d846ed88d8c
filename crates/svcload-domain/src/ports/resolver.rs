//! Type resolution ports

use crate::value_objects::{AnyInstance, BoxError, TypeHandle};

/// Resolves provider names into constructible type handles
///
/// Rust has no reflective loading, so implementations back this with an
/// explicit name → factory table (link-time registration or a builder).
pub trait TypeResolver: Send + Sync {
    /// Look up the type registered under `name`
    fn resolve(&self, name: &str) -> Option<TypeHandle>;

    /// Construct a no-argument instance of a resolved type
    fn construct(&self, handle: &TypeHandle) -> Result<AnyInstance, BoxError> {
        handle.instantiate()
    }
}
