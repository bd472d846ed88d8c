//! Tests for the class iterator state machine

use svcload_application::FailurePolicy;
use svcload_domain::Error;

use crate::support::{FixtureLocator, Greeters};

fn names(locator: &FixtureLocator) -> Vec<String> {
    locator
        .loader()
        .lookup_classes::<Greeters>()
        .map(|h| h.expect("resolution should succeed").name().to_string())
        .collect()
}

#[test]
fn test_no_resources_yields_nothing() {
    let locator = FixtureLocator::new();
    let mut classes = locator.loader().lookup_classes::<Greeters>();
    assert!(classes.next().is_none());
    assert!(classes.next().is_none());
    assert_eq!(classes.resources_opened(), 0);
}

#[test]
fn test_merges_resources_and_skips_duplicates() {
    let locator = FixtureLocator::new()
        .with_lines("mem:f1", &["plugin.A"])
        .with_lines("mem:f2", &["plugin.A", "# comment", "", "plugin.B"]);

    assert_eq!(names(&locator), vec!["plugin.A", "plugin.B"]);
}

#[test]
fn test_order_is_resource_then_line() {
    let locator = FixtureLocator::new()
        .with_lines("mem:f1", &["plugin.C", "plugin.A"])
        .with_lines("mem:f2", &["plugin.B", "plugin.C"]);

    assert_eq!(names(&locator), vec!["plugin.C", "plugin.A", "plugin.B"]);
}

#[test]
fn test_repeated_lookups_are_deterministic() {
    let locator = FixtureLocator::new()
        .with_lines("mem:f1", &["plugin.B", "plugin.A"])
        .with_lines("mem:f2", &["  plugin.C  # trailing comment"]);

    let first = names(&locator);
    for _ in 0..5 {
        assert_eq!(names(&locator), first);
    }
}

#[test]
fn test_nothing_is_read_before_first_pull() {
    let locator = FixtureLocator::new().with_lines("mem:f1", &["plugin.Missing"]);
    let mut classes = locator.loader().lookup_classes::<Greeters>();

    assert_eq!(locator.tracker.located(), 0);
    assert_eq!(locator.tracker.opened(), 0);

    let err = classes.next().expect("an item").unwrap_err();
    assert!(matches!(err, Error::TypeResolution { .. }));
}

#[test]
fn test_unresolvable_entry_is_fatal_after_earlier_items() {
    let locator = FixtureLocator::new()
        .with_lines("mem:f1", &["plugin.A", "plugin.Missing", "plugin.B"]);
    let mut classes = locator.loader().lookup_classes::<Greeters>();

    let first = classes.next().expect("an item").expect("plugin.A resolves");
    assert_eq!(first.name(), "plugin.A");

    match classes.next() {
        Some(Err(Error::TypeResolution { name, resource })) => {
            assert_eq!(name, "plugin.Missing");
            assert_eq!(resource, "mem:f1");
        }
        other => panic!("Expected TypeResolution error, got {other:?}"),
    }

    assert!(classes.next().is_none());
    assert!(!classes.is_resource_open());
    assert_eq!(locator.tracker.open_now(), 0);
}

#[test]
fn test_wrong_contract_is_type_mismatch() {
    let locator = FixtureLocator::new().with_lines("mem:f1", &["plugin.Counter"]);

    match locator.loader().lookup_classes::<Greeters>().next() {
        Some(Err(Error::TypeMismatch {
            name,
            resource,
            category,
            ..
        })) => {
            assert_eq!(name, "plugin.Counter");
            assert_eq!(resource, "mem:f1");
            assert_eq!(category, "demo.Greeter");
        }
        other => panic!("Expected TypeMismatch error, got {other:?}"),
    }
}

#[test]
fn test_unopenable_resource_aborts_session() {
    let locator = FixtureLocator::new()
        .with_lines("mem:f1", &["plugin.A"])
        .with_unopenable("mem:locked")
        .with_lines("mem:f3", &["plugin.B"]);
    let mut classes = locator.loader().lookup_classes::<Greeters>();

    assert_eq!(classes.next().unwrap().unwrap().name(), "plugin.A");
    match classes.next() {
        Some(Err(Error::ResourceAccess { location, .. })) => assert_eq!(location, "mem:locked"),
        other => panic!("Expected ResourceAccess error, got {other:?}"),
    }
    assert!(classes.next().is_none());
    assert_eq!(locator.tracker.located(), 2);
}

#[test]
fn test_invalid_utf8_is_resource_access_error() {
    let locator =
        FixtureLocator::new().with_bytes("mem:f1", b"plugin.A\n\xc3\x28\nplugin.B\n".to_vec());
    let mut classes = locator.loader().lookup_classes::<Greeters>();

    assert_eq!(classes.next().unwrap().unwrap().name(), "plugin.A");
    assert!(matches!(
        classes.next(),
        Some(Err(Error::ResourceAccess { .. }))
    ));
    assert_eq!(locator.tracker.open_now(), 0);
}

#[test]
fn test_drained_resource_is_closed_before_next_one() {
    let locator = FixtureLocator::new()
        .with_lines("mem:f1", &["plugin.A"])
        .with_lines("mem:f2", &["plugin.B"]);
    let mut classes = locator.loader().lookup_classes::<Greeters>();

    classes.next().unwrap().unwrap();
    assert_eq!(locator.tracker.open_now(), 1);

    classes.next().unwrap().unwrap();
    assert_eq!(locator.tracker.opened(), 2);
    assert_eq!(locator.tracker.open_now(), 1);

    assert!(classes.next().is_none());
    assert_eq!(locator.tracker.open_now(), 0);
    assert_eq!(classes.resources_opened(), 2);
}

#[test]
fn test_abandoned_iteration_releases_resource() {
    let locator = FixtureLocator::new().with_lines("mem:f1", &["plugin.A", "plugin.B"]);
    let mut classes = locator.loader().lookup_classes::<Greeters>();

    classes.next().unwrap().unwrap();
    assert!(classes.is_resource_open());
    assert_eq!(locator.tracker.open_now(), 1);

    drop(classes);
    assert_eq!(locator.tracker.open_now(), 0);
}

#[test]
fn test_has_next_reads_ahead_once() {
    let locator = FixtureLocator::new().with_lines("mem:f1", &["# header", "plugin.A"]);
    let mut classes = locator.loader().lookup_classes::<Greeters>();

    assert!(classes.has_next().unwrap());
    assert!(classes.has_next().unwrap());
    assert_eq!(locator.tracker.lines_served(), 2);
    assert_eq!(classes.provider_names().collect::<Vec<_>>(), vec!["plugin.A"]);

    assert_eq!(classes.next().unwrap().unwrap().name(), "plugin.A");
    assert!(!classes.has_next().unwrap());
}

#[test]
fn test_skip_invalid_policy_continues_past_bad_entries() {
    let locator = FixtureLocator::new()
        .with_lines("mem:f1", &["plugin.Missing", "plugin.A", "plugin.Counter"])
        .with_lines("mem:f2", &["plugin.B"]);

    let names: Vec<String> = locator
        .loader_with_policy(FailurePolicy::SkipInvalid)
        .lookup_classes::<Greeters>()
        .map(|h| h.unwrap().name().to_string())
        .collect();

    assert_eq!(names, vec!["plugin.A", "plugin.B"]);
}

#[test]
fn test_skip_invalid_policy_keeps_resource_errors_fatal() {
    let locator = FixtureLocator::new()
        .with_unopenable("mem:locked")
        .with_lines("mem:f2", &["plugin.B"]);
    let mut classes = locator
        .loader_with_policy(FailurePolicy::SkipInvalid)
        .lookup_classes::<Greeters>();

    assert!(matches!(
        classes.next(),
        Some(Err(Error::ResourceAccess { .. }))
    ));
    assert!(classes.next().is_none());
}
