//! Session-scoped type cache
//!
//! Memoizes provider name → type handle for one lookup session, so every
//! distinct name is resolved and validated at most once even when several
//! registry resources list it.

use std::collections::HashMap;

use svcload_domain::error::{Error, Result};
use svcload_domain::ports::TypeResolver;
use svcload_domain::value_objects::{Category, TypeHandle};
use tracing::trace;

/// Outcome of resolving a provider name within a session
#[derive(Debug, Clone)]
pub enum Resolution {
    /// First time this name was seen in the session
    Fresh(TypeHandle),
    /// The name was already resolved earlier in the session
    Cached(TypeHandle),
}

impl Resolution {
    /// The resolved handle, fresh or cached
    pub fn handle(&self) -> &TypeHandle {
        match self {
            Self::Fresh(handle) | Self::Cached(handle) => handle,
        }
    }
}

/// Name → type handle memo for one session
#[derive(Debug, Default)]
pub struct TypeCache {
    handles: HashMap<String, TypeHandle>,
    order: Vec<String>,
}

impl TypeCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `name` for category `C`, consulting the cache first
    ///
    /// `resource` is the location the name was read from and only feeds
    /// diagnostics. Failures are never cached.
    pub fn resolve<C: Category>(
        &mut self,
        name: &str,
        resource: &str,
        resolver: &dyn TypeResolver,
    ) -> Result<Resolution> {
        if let Some(handle) = self.handles.get(name) {
            return Ok(Resolution::Cached(handle.clone()));
        }

        let handle = resolver
            .resolve(name)
            .ok_or_else(|| Error::type_resolution(name, resource))?;

        if !handle.satisfies::<C>() {
            return Err(Error::type_mismatch(
                name,
                resource,
                C::NAME,
                C::contract().name(),
                handle.contract().name(),
            ));
        }

        trace!(provider = name, category = C::NAME, "Resolved provider type");
        self.handles.insert(name.to_string(), handle.clone());
        self.order.push(name.to_string());
        Ok(Resolution::Fresh(handle))
    }

    /// Names resolved so far, in first-seen order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Number of distinct names resolved
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether nothing has been resolved yet
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
