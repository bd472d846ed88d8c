//! Domain Port Interfaces
//!
//! Contracts for the two external collaborators of the discovery engine.
//!
//! ## Organization
//!
//! - **resource** - Locating and opening registry resources on a search path
//! - **resolver** - Resolving provider names into constructible type handles

/// Registry resource location ports
pub mod resource;
/// Type resolution ports
pub mod resolver;

pub use resolver::TypeResolver;
pub use resource::{RegistryResource, ResourceIter, ResourceLocator};
