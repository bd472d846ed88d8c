//! Category and contract value objects

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// An abstract capability that providers implement
///
/// A category pairs a registry identifier with the service type every
/// provider must hand out, usually a trait object.
///
/// # Example
///
/// ```ignore
/// pub trait Greeter: Send + Sync {
///     fn greet(&self) -> String;
/// }
///
/// pub struct Greeters;
///
/// impl Category for Greeters {
///     type Service = dyn Greeter;
///     const NAME: &'static str = "demo.Greeter";
/// }
/// ```
pub trait Category: 'static {
    /// Service type produced by every provider of this category
    type Service: ?Sized + 'static;

    /// Identifier naming the registry resource for this category
    const NAME: &'static str;

    /// Contract every provider of this category must satisfy
    fn contract() -> Contract {
        Contract::of::<Self::Service>()
    }
}

/// Runtime identity of a capability contract
///
/// Two contracts are equal when they denote the same Rust type; the name is
/// carried for diagnostics only.
#[derive(Clone, Copy)]
pub struct Contract {
    id: TypeId,
    name: &'static str,
}

impl Contract {
    /// Contract for the service type `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Human-readable type name of the contract
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for Contract {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Contract {}

impl Hash for Contract {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Contract").field(&self.name).finish()
    }
}

impl fmt::Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
