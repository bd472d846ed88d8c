//! Resource locators
//!
//! Implementations of the [`ResourceLocator`](svcload_domain::ports::ResourceLocator)
//! port.

pub mod memory;
pub mod search_path;

pub use memory::MemoryLocator;
pub use search_path::{FileResource, SearchPathLocator};

use svcload_domain::constants::REGISTRY_COMMENT_CHAR;

/// Whether `category` is usable as a registry file name
///
/// Category identifiers become a single path component under the registry
/// directory, so separators, parent references and comment markers are
/// rejected.
pub fn is_valid_category(category: &str) -> bool {
    !category.is_empty()
        && category != "."
        && category != ".."
        && !category.contains(['/', '\\', '\0', REGISTRY_COMMENT_CHAR])
        && category.trim() == category
}
