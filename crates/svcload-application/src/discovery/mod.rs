//! Discovery engine
//!
//! Leaves first: [`parse_line`] and [`RegistryReader`] turn one resource into
//! provider names, [`TypeCache`] resolves and memoizes them, [`Classes`]
//! merges every resource of a category into one ordered stream of type
//! handles, and [`Instances`] turns that stream into cached instances.

mod classes;
mod instances;
mod parser;
mod reader;
mod type_cache;

pub use classes::Classes;
pub use instances::Instances;
pub use parser::parse_line;
pub use reader::RegistryReader;
pub use type_cache::{Resolution, TypeCache};
