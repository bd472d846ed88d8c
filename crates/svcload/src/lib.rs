//! # svcload
//!
//! Discover and instantiate implementations ("providers") of an abstract
//! capability ("category") without compile-time knowledge of which
//! implementations exist.
//!
//! Provider types register themselves in the link-time
//! [`PROVIDER_TYPES`] table. Which of them a deployment uses is decided by
//! registry files: one file per category under `<root>/services/` of every
//! search-path root, one provider name per line, `#` starting a comment.
//!
//! ## Example
//!
//! ```ignore
//! use svcload::{Category, Contract, ProviderTypeEntry, PROVIDER_TYPES, boxed_instance};
//!
//! pub trait Greeter: Send + Sync {
//!     fn greet(&self) -> String;
//! }
//!
//! pub struct Greeters;
//!
//! impl Category for Greeters {
//!     type Service = dyn Greeter;
//!     const NAME: &'static str = "demo.Greeter";
//! }
//!
//! #[linkme::distributed_slice(PROVIDER_TYPES)]
//! static ENGLISH: ProviderTypeEntry = ProviderTypeEntry {
//!     name: "demo.English",
//!     description: "Greets in English",
//!     contract: Contract::of::<dyn Greeter>,
//!     factory: || Ok(boxed_instance::<dyn Greeter>(Arc::new(English))),
//! };
//!
//! // services/demo.Greeter contains the line `demo.English`
//! for greeter in svcload::lookup::<Greeters>(None)? {
//!     println!("{}", greeter?.greet());
//! }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Error taxonomy, `Category`, `TypeHandle` and ports
//! - `application` - Discovery engine, registries and the `ServiceLoader` facade
//! - `infrastructure` - Search path, configuration, logging

use std::sync::Arc;

pub mod cli;

/// Domain layer - core types and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use svcload_domain::*;
}

/// Application layer - discovery engine and registries
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use svcload_application::*;
}

/// Infrastructure layer - locators, config and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use svcload_infrastructure::*;
}

// Re-export commonly used types at the crate root
pub use svcload_application::{
    Classes, FailurePolicy, Instances, LookupContext, PROVIDER_TYPES, ProviderTypeEntry,
    ServiceLoader, StaticTypeResolver, TableTypeResolver, list_provider_types,
};
pub use svcload_domain::{
    AnyInstance, BoxError, Category, Contract, Error, Result, TypeHandle, boxed_instance,
};
pub use svcload_infrastructure::ambient_context;

fn loader(context: Option<&LookupContext>) -> Result<ServiceLoader> {
    let context = match context {
        Some(context) => context.clone(),
        None => ambient_context()?,
    };
    Ok(ServiceLoader::new(context))
}

/// Lazily enumerate provider instances of `C`
///
/// Uses `context`, or the ambient context when `None`. Only loading the
/// ambient configuration can fail here; discovery errors surface while
/// iterating.
pub fn lookup<C: Category>(context: Option<&LookupContext>) -> Result<Instances<C>> {
    Ok(loader(context)?.lookup::<C>())
}

/// The first provider instance of `C`, if any
pub fn lookup_first<C: Category>(
    context: Option<&LookupContext>,
) -> Result<Option<Arc<C::Service>>> {
    loader(context)?.lookup_first::<C>()
}

/// Lazily enumerate provider type handles of `C` without instantiating them
pub fn lookup_classes<C: Category>(context: Option<&LookupContext>) -> Result<Classes<C>> {
    Ok(loader(context)?.lookup_classes::<C>())
}
