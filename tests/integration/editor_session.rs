//! End-to-end editor session flows.
//!
//! Drives the store and registry together the way a launcher's config
//! editor screen would: bind, load, toggle auto-start, rename, save,
//! and rebind in a later session.

use launchconf::autostart::AutoStartRegistry;
use launchconf::prefs::JsonPrefStore;
use launchconf::store::ConfigStore;

use crate::common::fixtures::TestSession;
use crate::common::init_test_logging;

#[test]
fn test_full_edit_rename_session() {
    init_test_logging();
    let session = TestSession::new();
    let registry = AutoStartRegistry::new(&session.prefs);

    // Bind and load.
    let mut store = session.bound_config("proxy1.launch", "log level=1");
    assert_eq!(store.load().unwrap(), "log level=1");

    // Mark for auto-start.
    registry.set_member(store.basename(), true).unwrap();
    assert!(registry.is_member("proxy1.launch").unwrap());

    // Rename; membership follows the new name.
    store.rename("proxy2.launch", &registry).unwrap();
    assert!(registry.is_member("proxy2.launch").unwrap());
    assert!(!registry.is_member("proxy1.launch").unwrap());

    // Save the edited text.
    store.save("log level=2").unwrap();

    // A later session binding the renamed file sees the edit.
    let rebound = ConfigStore::bind(session.dir.path().join("proxy2.launch")).unwrap();
    assert_eq!(rebound.load().unwrap(), "log level=2");
}

#[test]
fn test_membership_survives_session_boundaries() {
    init_test_logging();
    let session = TestSession::new();

    let store = session.bound_config("proxy1.launch", "listen :1080");
    {
        let registry = AutoStartRegistry::new(&session.prefs);
        registry.set_member(store.basename(), true).unwrap();
    }

    // Next session: fresh store handles, same files.
    let prefs = JsonPrefStore::open(session.prefs.path());
    let registry = AutoStartRegistry::new(&prefs);
    let rebound = ConfigStore::bind(store.path()).unwrap();

    assert!(registry.is_member(rebound.basename()).unwrap());
    assert_eq!(rebound.load().unwrap(), "listen :1080");
}

#[test]
fn test_rename_then_reuse_old_name_starts_clean() {
    init_test_logging();
    let session = TestSession::new();
    let registry = AutoStartRegistry::new(&session.prefs);

    let mut store = session.bound_config("proxy1.launch", "original");
    registry.set_member("proxy1.launch", true).unwrap();
    store.rename("proxy2.launch", &registry).unwrap();

    // A brand-new config reusing the old name must not inherit stale
    // auto-start status.
    let fresh = session.bound_config("proxy1.launch", "unrelated");
    assert!(!registry.is_member(fresh.basename()).unwrap());
    assert!(registry.is_member("proxy2.launch").unwrap());
}

#[test]
fn test_independent_configs_do_not_interfere() {
    init_test_logging();
    let session = TestSession::new();
    let registry = AutoStartRegistry::new(&session.prefs);

    let mut first = session.bound_config("proxy1.launch", "one");
    let second = session.bound_config("other.launch", "two");

    registry.set_member(first.basename(), true).unwrap();
    registry.set_member(second.basename(), true).unwrap();

    first.rename("renamed.launch", &registry).unwrap();

    assert!(registry.is_member("renamed.launch").unwrap());
    assert!(registry.is_member("other.launch").unwrap());
    assert!(!registry.is_member("proxy1.launch").unwrap());
    assert_eq!(second.load().unwrap(), "two");
}
