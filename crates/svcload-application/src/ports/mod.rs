//! Application ports
//!
//! Registries and resolver implementations that back the domain
//! [`TypeResolver`](svcload_domain::ports::TypeResolver) port.

pub mod registry;
