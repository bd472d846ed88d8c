//! Tests for registry inspection

use svcload_infrastructure::{MemoryLocator, SearchPathLocator, inspect};
use tempfile::TempDir;

use crate::support::{resolver, root_with_registry};

#[test]
fn test_inspect_lists_entries_with_status() {
    let locator = MemoryLocator::new()
        .with_resource("demo.Greeter", "embedded:f1", "plugin.A\n")
        .with_resource(
            "demo.Greeter",
            "embedded:f2",
            "plugin.A\n# comment\n\nplugin.Missing\n",
        );

    let listings = inspect(&locator, &resolver(), "demo.Greeter").unwrap();

    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0].location, "embedded:f1");
    assert!(!listings[0].entries[0].duplicate);

    let second = &listings[1].entries;
    assert_eq!(second.len(), 2);
    assert_eq!(second[0].name, "plugin.A");
    assert!(second[0].duplicate);
    assert!(second[0].contract.is_some());
    assert_eq!(second[1].name, "plugin.Missing");
    assert_eq!(second[1].line, 4);
    assert!(second[1].contract.is_none());
}

#[test]
fn test_inspect_serializes_to_json() {
    let locator = MemoryLocator::new().with_resource("demo.Greeter", "embedded:f1", "plugin.B\n");
    let listings = inspect(&locator, &resolver(), "demo.Greeter").unwrap();

    let json = serde_json::to_value(&listings).unwrap();
    assert_eq!(json[0]["location"], "embedded:f1");
    assert_eq!(json[0]["entries"][0]["name"], "plugin.B");
    assert_eq!(json[0]["entries"][0]["duplicate"], false);
}

#[test]
fn test_inspect_reads_search_path() {
    let root = root_with_registry("demo.Greeter", "plugin.A\nplugin.B\n");
    let empty = TempDir::new().unwrap();
    let locator = SearchPathLocator::new([empty.path(), root.path()]);

    let listings = inspect(&locator, &resolver(), "demo.Greeter").unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].entries.len(), 2);
}

#[test]
fn test_inspect_empty_registry() {
    let listings = inspect(&MemoryLocator::new(), &resolver(), "demo.Greeter").unwrap();
    assert!(listings.is_empty());
}
