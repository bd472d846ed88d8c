//! In-memory locator
//!
//! Serves registry resources compiled into the binary or assembled at
//! runtime, e.g. `include_str!("../services/demo.Greeter")`.

use std::collections::HashMap;
use std::io::{BufRead, Cursor};
use std::sync::Arc;

use svcload_domain::ports::{RegistryResource, ResourceIter, ResourceLocator};

/// Locator over registry text held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryLocator {
    resources: HashMap<String, Vec<MemoryResource>>,
}

impl MemoryLocator {
    /// Create an empty locator
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a registry resource for `category`, after any added before
    pub fn with_resource(
        mut self,
        category: impl Into<String>,
        location: impl Into<String>,
        contents: impl Into<String>,
    ) -> Self {
        self.resources
            .entry(category.into())
            .or_default()
            .push(MemoryResource {
                location: location.into(),
                contents: Arc::from(contents.into()),
            });
        self
    }
}

impl ResourceLocator for MemoryLocator {
    fn locate(&self, category: &str) -> ResourceIter {
        let resources = self.resources.get(category).cloned().unwrap_or_default();
        Box::new(
            resources
                .into_iter()
                .map(|resource| Ok(Box::new(resource) as Box<dyn RegistryResource>)),
        )
    }
}

/// Registry resource held in memory
#[derive(Debug, Clone)]
pub struct MemoryResource {
    location: String,
    contents: Arc<str>,
}

impl RegistryResource for MemoryResource {
    fn location(&self) -> &str {
        &self.location
    }

    fn open(&self) -> std::io::Result<Box<dyn BufRead + Send>> {
        Ok(Box::new(Cursor::new(ArcText(Arc::clone(&self.contents)))))
    }
}

struct ArcText(Arc<str>);

impl AsRef<[u8]> for ArcText {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}
