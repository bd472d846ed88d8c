//! Filesystem search-path locator
//!
//! The registry for category `NAME` at root `R` lives at
//! `R/<registry_dir>/NAME`. Roots are visited in order and each is probed
//! only when the session asks for its next resource.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use svcload_domain::constants::DEFAULT_REGISTRY_DIR;
use svcload_domain::error::Error;
use svcload_domain::ports::{RegistryResource, ResourceIter, ResourceLocator};
use tracing::trace;

use super::is_valid_category;
use crate::config::LoaderConfig;

/// Locates registry files under an ordered list of root directories
#[derive(Debug, Clone)]
pub struct SearchPathLocator {
    roots: Vec<PathBuf>,
    registry_dir: PathBuf,
}

impl SearchPathLocator {
    /// Create a locator over `roots` using the default registry directory
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
            registry_dir: PathBuf::from(DEFAULT_REGISTRY_DIR),
        }
    }

    /// Create a locator from loader configuration
    pub fn from_config(config: &LoaderConfig) -> Self {
        Self::new(config.search_path.iter().cloned()).with_registry_dir(&config.registry_dir)
    }

    /// Set the registry directory name
    pub fn with_registry_dir<P: Into<PathBuf>>(mut self, registry_dir: P) -> Self {
        self.registry_dir = registry_dir.into();
        self
    }

    /// Roots in search order
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Path where `root` would hold the registry for `category`
    pub fn registry_path(&self, root: &Path, category: &str) -> PathBuf {
        root.join(&self.registry_dir).join(category)
    }
}

impl ResourceLocator for SearchPathLocator {
    fn locate(&self, category: &str) -> ResourceIter {
        if !is_valid_category(category) {
            return Box::new(std::iter::once(Err(Error::resource_access(
                category,
                "invalid category identifier",
            ))));
        }

        let candidates: Vec<PathBuf> = self
            .roots
            .iter()
            .map(|root| self.registry_path(root, category))
            .collect();

        Box::new(candidates.into_iter().filter_map(|path| {
            match std::fs::metadata(&path) {
                Ok(meta) if meta.is_file() => {
                    trace!(path = %path.display(), "Found registry resource");
                    Some(Ok(Box::new(FileResource::new(path)) as Box<dyn RegistryResource>))
                }
                Ok(_) => None,
                Err(e) if e.kind() == ErrorKind::NotFound => None,
                Err(e) => Some(Err(Error::resource_access_with_source(
                    path.display().to_string(),
                    e,
                ))),
            }
        }))
    }
}

/// Registry resource backed by a file
#[derive(Debug, Clone)]
pub struct FileResource {
    path: PathBuf,
    location: String,
}

impl FileResource {
    /// Create a resource for the file at `path`
    pub fn new(path: PathBuf) -> Self {
        let location = path.display().to_string();
        Self { path, location }
    }

    /// Path of the registry file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RegistryResource for FileResource {
    fn location(&self) -> &str {
        &self.location
    }

    fn open(&self) -> std::io::Result<Box<dyn BufRead + Send>> {
        Ok(Box::new(BufReader::new(File::open(&self.path)?)))
    }
}
