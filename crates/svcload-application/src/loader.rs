//! Service loader facade
//!
//! Entry points for provider discovery against an explicit
//! [`LookupContext`]. Each call starts an independent session with its own
//! caches; nothing is read until the returned iterator is pulled.
//!
//! ## Example
//!
//! ```ignore
//! let loader = ServiceLoader::new(context);
//!
//! for greeter in loader.lookup::<Greeters>() {
//!     println!("{}", greeter?.greet());
//! }
//!
//! let first = loader.lookup_first::<Greeters>()?;
//! ```

use std::sync::Arc;

use svcload_domain::error::Result;
use svcload_domain::value_objects::Category;
use tracing::debug;

use crate::context::LookupContext;
use crate::discovery::{Classes, Instances};

/// Discovers and instantiates providers of a category
#[derive(Debug, Clone)]
pub struct ServiceLoader {
    context: LookupContext,
}

impl ServiceLoader {
    /// Create a loader over `context`
    pub fn new(context: LookupContext) -> Self {
        Self { context }
    }

    /// The context every session of this loader runs against
    pub fn context(&self) -> &LookupContext {
        &self.context
    }

    /// Lazily enumerate provider instances of `C`
    pub fn lookup<C: Category>(&self) -> Instances<C> {
        Instances::new(
            self.lookup_classes::<C>(),
            Arc::clone(self.context.resolver()),
            self.context.policy(),
        )
    }

    /// The first provider instance of `C`, if any
    ///
    /// Reads no further than the first entry that yields an instance; the
    /// session, and with it any open resource, is released before returning.
    pub fn lookup_first<C: Category>(&self) -> Result<Option<Arc<C::Service>>> {
        let mut instances = self.lookup::<C>();
        let first = instances.next().transpose();
        drop(instances);
        first
    }

    /// Lazily enumerate provider type handles of `C` without instantiating them
    pub fn lookup_classes<C: Category>(&self) -> Classes<C> {
        debug!(category = C::NAME, "Starting provider discovery");
        Classes::new(
            self.context.locator().locate(C::NAME),
            Arc::clone(self.context.resolver()),
            self.context.policy(),
        )
    }
}
