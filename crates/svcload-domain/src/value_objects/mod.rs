//! Value Objects
//!
//! Immutable types describing categories and the type handles resolved for
//! their providers.

/// Category trait and capability contract identity
pub mod category;
/// Resolved, constructible provider type handles
pub mod handle;

pub use category::{Category, Contract};
pub use handle::{AnyInstance, BoxError, TypeHandle, boxed_instance, downcast_instance};
