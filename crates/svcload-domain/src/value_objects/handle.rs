//! Type handles
//!
//! A [`TypeHandle`] is the resolved, constructible reference to one
//! provider's concrete type. Construction is type-erased: the factory hands
//! back an [`AnyInstance`] holding an `Arc<Service>`, which the caller
//! recovers with [`downcast_instance`].

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use super::category::{Category, Contract};

/// Boxed error used for provider construction failures
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Type-erased provider instance, always an `Arc<Service>` inside
pub type AnyInstance = Box<dyn Any>;

type Factory = dyn Fn() -> Result<AnyInstance, BoxError> + Send + Sync;

/// Erase a service instance for return from a provider factory
///
/// ```ignore
/// factory: || Ok(boxed_instance::<dyn Greeter>(Arc::new(English))),
/// ```
pub fn boxed_instance<S: ?Sized + 'static>(instance: Arc<S>) -> AnyInstance {
    Box::new(instance)
}

/// Recover the `Arc<S>` a provider factory erased with [`boxed_instance`]
pub fn downcast_instance<S: ?Sized + 'static>(
    name: &str,
    instance: AnyInstance,
) -> Result<Arc<S>, BoxError> {
    instance.downcast::<Arc<S>>().map(|boxed| *boxed).map_err(|_| {
        format!(
            "factory for '{name}' did not produce an Arc<{}>",
            std::any::type_name::<S>()
        )
        .into()
    })
}

/// Resolved, constructible reference to a provider type
#[derive(Clone)]
pub struct TypeHandle {
    inner: Arc<TypeHandleInner>,
}

struct TypeHandleInner {
    name: String,
    contract: Contract,
    factory: Box<Factory>,
}

impl TypeHandle {
    /// Create a handle from a provider name, its contract and a no-argument factory
    pub fn new<N, F>(name: N, contract: Contract, factory: F) -> Self
    where
        N: Into<String>,
        F: Fn() -> Result<AnyInstance, BoxError> + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(TypeHandleInner {
                name: name.into(),
                contract,
                factory: Box::new(factory),
            }),
        }
    }

    /// Fully-qualified provider name
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Contract the provider implements
    pub fn contract(&self) -> Contract {
        self.inner.contract
    }

    /// Whether this provider satisfies the category's contract
    pub fn satisfies<C: Category>(&self) -> bool {
        self.inner.contract == C::contract()
    }

    /// Construct a new type-erased instance
    pub fn instantiate(&self) -> Result<AnyInstance, BoxError> {
        (self.inner.factory)()
    }
}

impl PartialEq for TypeHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
            || (self.inner.name == other.inner.name && self.inner.contract == other.inner.contract)
    }
}

impl Eq for TypeHandle {}

impl Hash for TypeHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.name.hash(state);
        self.inner.contract.hash(state);
    }
}

impl fmt::Debug for TypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeHandle")
            .field("name", &self.inner.name)
            .field("contract", &self.inner.contract)
            .finish_non_exhaustive()
    }
}
