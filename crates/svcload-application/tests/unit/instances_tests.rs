//! Tests for the instance iterator and its session cache

use std::error::Error as _;
use std::sync::Arc;

use svcload_application::{FailurePolicy, Instances, TableTypeResolver};
use svcload_domain::Error;
use svcload_domain::ports::TypeResolver;

use crate::support::{FixtureLocator, Greeters, greetings, resolver};

#[test]
fn test_instances_follow_class_order() {
    let locator = FixtureLocator::new()
        .with_lines("mem:f1", &["plugin.A"])
        .with_lines("mem:f2", &["plugin.A", "# comment", "", "plugin.B"]);

    let greetings = greetings(locator.loader().lookup::<Greeters>());
    assert_eq!(greetings, vec!["hello from A", "hello from B"]);
}

#[test]
fn test_lookup_does_no_work_until_pulled() {
    let locator = FixtureLocator::new().with_lines("mem:f1", &["plugin.Broken"]);
    let mut instances = locator.loader().lookup::<Greeters>();

    assert_eq!(locator.tracker.located(), 0);
    assert!(matches!(
        instances.next(),
        Some(Err(Error::Instantiation { .. }))
    ));
}

#[test]
fn test_separate_lookups_build_separate_instances() {
    let locator = FixtureLocator::new().with_lines("mem:f1", &["plugin.A"]);
    let loader = locator.loader();

    let first = loader.lookup::<Greeters>().next().unwrap().unwrap();
    let second = loader.lookup::<Greeters>().next().unwrap().unwrap();

    assert!(!Arc::ptr_eq(&first, &second));
}

#[test]
fn test_repeated_handle_reuses_cached_instance() {
    let resolver = resolver();
    let handle = resolver.resolve("plugin.A").unwrap();
    let upstream = vec![Ok(handle.clone()), Ok(handle)].into_iter();

    let mut instances: Instances<Greeters, _> =
        Instances::new(upstream, Arc::new(resolver), FailurePolicy::FailFast);

    let first = instances.next().unwrap().unwrap();
    let second = instances.next().unwrap().unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(instances.instantiated(), 1);
    assert!(instances.next().is_none());
}

#[test]
fn test_instantiation_failure_wraps_cause_and_ends_session() {
    let locator =
        FixtureLocator::new().with_lines("mem:f1", &["plugin.A", "plugin.Broken", "plugin.B"]);
    let mut instances = locator.loader().lookup::<Greeters>();

    assert_eq!(instances.next().unwrap().unwrap().greet(), "hello from A");

    let err = instances.next().unwrap().err().expect("construction should fail");
    match &err {
        Error::Instantiation { name, category, .. } => {
            assert_eq!(name, "plugin.Broken");
            assert_eq!(category, "demo.Greeter");
        }
        other => panic!("Expected Instantiation error, got {other:?}"),
    }
    assert_eq!(err.source().unwrap().to_string(), "constructor exploded");

    assert!(instances.next().is_none());
    assert!(instances.classes().is_none());
    assert_eq!(locator.tracker.open_now(), 0);
}

#[test]
fn test_skip_invalid_policy_skips_failed_construction() {
    let locator = FixtureLocator::new().with_lines(
        "mem:f1",
        &["plugin.Broken", "plugin.Missing", "plugin.B"],
    );

    let greetings = greetings(
        locator
            .loader_with_policy(FailurePolicy::SkipInvalid)
            .lookup::<Greeters>(),
    );
    assert_eq!(greetings, vec!["hello from B"]);
}

#[test]
fn test_factory_returning_wrong_service_is_instantiation_error() {
    // Claims the greeter contract but builds a bare string.
    let liar = svcload_domain::TypeHandle::new(
        "plugin.Liar",
        svcload_domain::Contract::of::<dyn crate::support::Greeter>(),
        || Ok(Box::new("not a greeter".to_string()) as svcload_domain::AnyInstance),
    );
    let resolver = TableTypeResolver::new().with_type(liar);
    let locator = FixtureLocator::new().with_lines("mem:f1", &["plugin.Liar"]);
    let context = locator.context().with_resolver(Arc::new(resolver));

    let result = svcload_application::ServiceLoader::new(context).lookup_first::<Greeters>();
    assert!(matches!(result, Err(Error::Instantiation { .. })));
}
