//! Domain Layer - svcload
//!
//! Core types for discovering provider implementations of an abstract
//! capability ("category") at runtime.
//!
//! ## Architecture
//!
//! The domain layer:
//! - Defines the error taxonomy shared by every layer
//! - Defines the [`Category`] contract and the resolved [`TypeHandle`]
//! - Defines ports for the external collaborators (resource location and
//!   type resolution)
//! - Has no dependencies on infrastructure or I/O frameworks
//!
//! ## Data Flow
//!
//! ```text
//! ResourceLocator → RegistryResource → (reader/parser) → TypeResolver → TypeHandle
//! ```

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{RegistryResource, ResourceIter, ResourceLocator, TypeResolver};
pub use value_objects::{
    AnyInstance, BoxError, Category, Contract, TypeHandle, boxed_instance, downcast_instance,
};
