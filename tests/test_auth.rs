//! Auth gate tests.

mod common;

use pockecards::store::Storage;
use pockecards::{AuthGate, PersistedStore, StorefrontError};

#[test]
fn anonymous_by_default() {
    let (store, _) = common::memory_store();
    assert!(!AuthGate::new(&store).is_authenticated());
}

#[test]
fn empty_identifier_or_secret_is_rejected() {
    let (store, storage) = common::memory_store();
    let auth = AuthGate::new(&store);

    assert!(!auth.login("", "x"));
    assert!(!auth.login("a@b.com", ""));
    assert!(!auth.login("", ""));
    assert!(!auth.is_authenticated());
    assert!(!storage.contains_key("adminAuth"));
}

#[test]
fn login_then_logout() {
    let (store, storage) = common::memory_store();
    let auth = AuthGate::new(&store);

    assert!(auth.login("a@b.com", "pw"));
    assert!(auth.is_authenticated());
    assert_eq!(storage.get_item("adminAuth").unwrap().as_deref(), Some("true"));

    auth.logout();
    assert!(!auth.is_authenticated());
    assert!(!storage.contains_key("adminAuth"));
}

#[test]
fn failed_login_keeps_existing_session() {
    let (store, _) = common::memory_store();
    let auth = AuthGate::new(&store);

    auth.login("a@b.com", "pw");
    assert!(!auth.login("", "pw"));
    assert!(auth.is_authenticated());
}

#[test]
fn only_literal_true_counts() {
    let (store, storage) = common::memory_store();
    storage.set_item("adminAuth", "yes").unwrap();
    assert!(!AuthGate::new(&store).is_authenticated());

    storage.set_item("adminAuth", "true").unwrap();
    assert!(AuthGate::new(&store).is_authenticated());
}

#[test]
fn logout_when_anonymous_is_fine() {
    let (store, _) = common::memory_store();
    let auth = AuthGate::new(&store);
    auth.logout();
    assert!(!auth.is_authenticated());
}

#[test]
fn no_medium_is_never_authenticated() {
    let store = PersistedStore::null();
    let auth = AuthGate::new(&store);

    assert!(auth.login("a@b.com", "pw"));
    assert!(!auth.is_authenticated());
}

#[test]
fn require_admin() {
    let (store, _) = common::memory_store();
    let auth = AuthGate::new(&store);

    assert!(matches!(auth.require_admin(), Err(StorefrontError::Unauthorized)));
    auth.login("admin", "secret");
    assert!(auth.require_admin().is_ok());
}
