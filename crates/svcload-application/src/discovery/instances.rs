//! Instance iterator
//!
//! Wraps a stream of type handles and constructs one instance per distinct
//! handle, caching it for the rest of the session.

use std::collections::HashMap;
use std::sync::Arc;

use svcload_domain::error::{Error, Result};
use svcload_domain::ports::TypeResolver;
use svcload_domain::value_objects::{Category, TypeHandle, downcast_instance};
use tracing::debug;

use super::classes::Classes;
use crate::policy::FailurePolicy;

/// Lazy stream of provider instances for category `C`
///
/// Pulls handles from `I` (normally a [`Classes`] iterator) one at a time.
/// A handle seen before in this session yields the cached instance instead
/// of a new one. The first fatal error is yielded once, the upstream is
/// dropped (releasing any open resource) and the stream ends.
pub struct Instances<C: Category, I = Classes<C>> {
    classes: Option<I>,
    resolver: Arc<dyn TypeResolver>,
    policy: FailurePolicy,
    cache: HashMap<TypeHandle, Arc<C::Service>>,
}

impl<C, I> Instances<C, I>
where
    C: Category,
    I: Iterator<Item = Result<TypeHandle>>,
{
    /// Wrap a stream of type handles
    pub fn new(classes: I, resolver: Arc<dyn TypeResolver>, policy: FailurePolicy) -> Self {
        Self {
            classes: Some(classes),
            resolver,
            policy,
            cache: HashMap::new(),
        }
    }

    /// The upstream handle stream, until the session ends on error
    pub fn classes(&self) -> Option<&I> {
        self.classes.as_ref()
    }

    /// Number of instances constructed in this session
    pub fn instantiated(&self) -> usize {
        self.cache.len()
    }

    fn instantiate(&self, handle: &TypeHandle) -> Result<Arc<C::Service>> {
        self.resolver
            .construct(handle)
            .and_then(|instance| downcast_instance::<C::Service>(handle.name(), instance))
            .map_err(|e| Error::instantiation(handle.name(), C::NAME, e))
    }

    fn fail(&mut self, error: Error) -> Error {
        self.classes = None;
        error
    }
}

impl<C, I> Iterator for Instances<C, I>
where
    C: Category,
    I: Iterator<Item = Result<TypeHandle>>,
{
    type Item = Result<Arc<C::Service>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let handle = match self.classes.as_mut()?.next()? {
                Ok(handle) => handle,
                Err(e) => return Some(Err(self.fail(e))),
            };

            if let Some(instance) = self.cache.get(&handle) {
                debug!(provider = handle.name(), "Reusing cached provider instance");
                return Some(Ok(Arc::clone(instance)));
            }

            match self.instantiate(&handle) {
                Ok(instance) => {
                    debug!(
                        provider = handle.name(),
                        category = C::NAME,
                        "Instantiated provider"
                    );
                    self.cache.insert(handle, Arc::clone(&instance));
                    return Some(Ok(instance));
                }
                Err(e) => {
                    if let Err(e) = self.policy.admit(e) {
                        return Some(Err(self.fail(e)));
                    }
                }
            }
        }
    }
}
