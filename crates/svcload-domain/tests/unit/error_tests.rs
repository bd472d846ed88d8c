//! Unit tests for domain error types

use std::error::Error as _;

use svcload_domain::Error;

#[test]
fn test_resource_access_error() {
    let error = Error::resource_access("/srv/a/services/demo.Greeter", "permission denied");
    match &error {
        Error::ResourceAccess {
            location, message, ..
        } => {
            assert_eq!(location, "/srv/a/services/demo.Greeter");
            assert_eq!(message, "permission denied");
        }
        _ => panic!("Expected ResourceAccess error"),
    }
    assert!(!error.is_entry_failure());
}

#[test]
fn test_resource_access_keeps_io_source() {
    let io = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad utf-8");
    let error = Error::resource_access_with_source("mem:f1", io);
    let source = error.source().expect("source should be kept");
    assert!(source.to_string().contains("bad utf-8"));
}

#[test]
fn test_type_resolution_error_names_resource() {
    let error = Error::type_resolution("plugin.Missing", "mem:f1");
    let display = error.to_string();
    assert!(display.contains("plugin.Missing"));
    assert!(display.contains("mem:f1"));
    assert!(error.is_entry_failure());
}

#[test]
fn test_type_mismatch_error_names_category() {
    let error = Error::type_mismatch(
        "plugin.A",
        "mem:f1",
        "demo.Greeter",
        "dyn Greeter",
        "dyn Other",
    );
    match &error {
        Error::TypeMismatch {
            name,
            resource,
            category,
            ..
        } => {
            assert_eq!(name, "plugin.A");
            assert_eq!(resource, "mem:f1");
            assert_eq!(category, "demo.Greeter");
        }
        _ => panic!("Expected TypeMismatch error"),
    }
    assert!(error.is_entry_failure());
}

#[test]
fn test_instantiation_error_wraps_cause() {
    let error = Error::instantiation("plugin.A", "demo.Greeter", "boom".into());
    assert!(error.is_entry_failure());
    let source = error.source().expect("cause should be kept");
    assert_eq!(source.to_string(), "boom");
}

#[test]
fn test_config_error() {
    let error = Error::config("Missing required config");
    match error {
        Error::Config { message } => assert_eq!(message, "Missing required config"),
        _ => panic!("Expected Config error"),
    }
}
