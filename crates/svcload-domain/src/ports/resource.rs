//! Registry resource ports

use std::io::BufRead;

use crate::error::Result;

/// Lazily produced sequence of registry resources for one category
pub type ResourceIter = Box<dyn Iterator<Item = Result<Box<dyn RegistryResource>>> + Send>;

/// Handle to one registry resource found on the search path
///
/// A handle is cheap to hold; nothing is opened until [`open`](Self::open)
/// is called by the registry reader, which then owns the stream exclusively.
pub trait RegistryResource: Send {
    /// Location of the resource, used in diagnostics
    fn location(&self) -> &str;

    /// Open the resource for reading
    fn open(&self) -> std::io::Result<Box<dyn BufRead + Send>>;
}

/// Finds registry resources for a category across an ordered search path
///
/// Implementations must yield resources in search-path order and must not
/// open them eagerly.
pub trait ResourceLocator: Send + Sync {
    /// Enumerate the registry resources defined for `category`
    fn locate(&self, category: &str) -> ResourceIter;
}
