//! Registry inspection
//!
//! Lists what the registry resources of a category contain without
//! instantiating anything. Used by tooling to diagnose misconfigured
//! registries.

use std::collections::HashSet;

use serde::Serialize;
use svcload_application::{RegistryReader, parse_line};
use svcload_domain::error::Result;
use svcload_domain::ports::{ResourceLocator, TypeResolver};

/// Parsed contents of one registry resource
#[derive(Debug, Clone, Serialize)]
pub struct RegistryListing {
    /// Location of the resource
    pub location: String,
    /// Provider entries in file order
    pub entries: Vec<RegistryEntry>,
}

/// One provider entry in a registry resource
#[derive(Debug, Clone, Serialize)]
pub struct RegistryEntry {
    /// 1-based line number
    pub line: usize,
    /// Provider name
    pub name: String,
    /// Contract of the resolved type, `None` when the name does not resolve
    pub contract: Option<&'static str>,
    /// Whether an earlier entry (in this or a previous resource) has the same name
    pub duplicate: bool,
}

/// List every registry resource of `category` with its parsed entries
///
/// Resources are read in search order and each is closed before the next
/// one is opened. The first resource access error aborts the listing.
pub fn inspect(
    locator: &dyn ResourceLocator,
    resolver: &dyn TypeResolver,
    category: &str,
) -> Result<Vec<RegistryListing>> {
    let mut seen = HashSet::new();
    let mut listings = Vec::new();

    for resource in locator.locate(category) {
        let resource = resource?;
        let mut reader = RegistryReader::open(resource.as_ref())?;
        let mut entries = Vec::new();

        while let Some(line) = reader.next_line()? {
            let Some(name) = parse_line(&line) else {
                continue;
            };
            entries.push(RegistryEntry {
                line: reader.line_number(),
                name: name.to_string(),
                contract: resolver.resolve(name).map(|h| h.contract().name()),
                duplicate: !seen.insert(name.to_string()),
            });
        }

        listings.push(RegistryListing {
            location: reader.location().to_string(),
            entries,
        });
    }

    Ok(listings)
}
