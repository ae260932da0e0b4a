//! Lifecycle Tests
//!
//! Tests for reset, close, backend shutdown and shared backends.

use crate::*;

// =============================================================================
// RESET
// =============================================================================

#[test]
fn test_reset_removes_entries() {
    let store = create_store();

    let keys: Vec<_> = (0..10).map(|i| store.store(i).unwrap()).collect();
    store.reset().unwrap();

    for key in &keys {
        assert_eq!(store.get(key).unwrap(), None);
    }
    assert!(store.is_empty().unwrap());
}

#[test]
fn test_reset_zeroes_counters_and_history() {
    let store = create_auditing_store();

    let key = store.store("x").unwrap();
    store.get(&key).unwrap();
    store.reset().unwrap();

    assert_eq!(store.call_count(ops::STORE).unwrap(), 0);
    assert_eq!(store.call_count(ops::GET).unwrap(), 0);
    assert!(store.call_history(ops::STORE).unwrap().is_empty());
    assert!(store.call_history(ops::GET).unwrap().is_empty());
}

#[test]
fn test_store_after_reset_counts_from_zero() {
    let store = create_store();

    store.store("a").unwrap();
    store.store("b").unwrap();
    store.reset().unwrap();
    let key = store.store("c").unwrap();

    assert_eq!(store.call_count(ops::STORE).unwrap(), 1);
    assert_eq!(store.get(&key).unwrap(), Some(Value::Text("c".into())));
}

// =============================================================================
// SHARED BACKENDS
// =============================================================================

#[test]
fn test_open_does_not_wipe_shared_backend() {
    let (backend, first) = create_shared();

    let key = first.store("persisted").unwrap();

    let second = KeyStore::attach(StoreConfig::default(), backend).unwrap();
    assert_eq!(
        second.get(&key).unwrap(),
        Some(Value::Text("persisted".into()))
    );
    assert_eq!(second.call_count(ops::STORE).unwrap(), 1);
}

#[test]
fn test_reset_is_visible_to_every_attached_store() {
    let (backend, first) = create_shared();
    let second = KeyStore::builder().backend(backend).open().unwrap();

    let key = first.store("x").unwrap();
    second.reset().unwrap();

    assert_eq!(first.get(&key).unwrap(), None);
    assert_eq!(first.call_count(ops::STORE).unwrap(), 0);
}

// =============================================================================
// CLOSE / SHUTDOWN
// =============================================================================

#[test]
fn test_close_makes_every_operation_unavailable() {
    let store = create_store();
    let key = store.store("x").unwrap();

    store.close();
    assert!(store.is_closed());

    assert!(store.store("y").unwrap_err().is_storage_unavailable());
    assert!(store.get(&key).unwrap_err().is_storage_unavailable());
    assert!(store.get_as_text(&key).unwrap_err().is_storage_unavailable());
    assert!(store.get_as_integer(&key).unwrap_err().is_storage_unavailable());
    assert!(store.call_count(ops::STORE).unwrap_err().is_storage_unavailable());
    assert!(store.call_history(ops::STORE).unwrap_err().is_storage_unavailable());
    assert!(store.replay(ops::STORE).unwrap_err().is_storage_unavailable());
    assert!(store.reset().unwrap_err().is_storage_unavailable());
    assert!(store.len().unwrap_err().is_storage_unavailable());
}

#[test]
fn test_close_twice_is_noop() {
    let store = create_store();
    store.close();
    store.close();
    assert!(store.is_closed());
}

#[test]
fn test_close_leaves_other_connections_working() {
    let (backend, first) = create_shared();
    let second = KeyStore::attach(StoreConfig::default(), backend).unwrap();

    let key = first.store("x").unwrap();
    first.close();

    assert_eq!(second.get(&key).unwrap(), Some(Value::Text("x".into())));
}

#[test]
fn test_backend_shutdown_fails_every_attached_store() {
    let (backend, first) = create_shared();
    let second = KeyStore::attach(StoreConfig::default(), backend.clone()).unwrap();

    backend.shutdown();

    assert!(first.store("x").unwrap_err().is_storage_unavailable());
    assert!(second.get("any").unwrap_err().is_retryable());
}

// =============================================================================
// CONFIGURATION
// =============================================================================

#[test]
fn test_open_from_json_config() {
    let config = StoreConfig::from_json(r#"{"socket": "/var/run/cache.sock"}"#).unwrap();
    let store = KeyStore::open(config).unwrap();

    assert_eq!(store.config().endpoint(), "unix:/var/run/cache.sock");
    assert!(!store.config().audit_reads);
}

#[test]
fn test_builder_rejects_invalid_config() {
    let err = KeyStore::builder().host("").open().unwrap_err();
    assert!(matches!(err, Error::InvalidConfig(_)));
}
