//! In-memory backend
//!
//! One `parking_lot::Mutex` guards both the entry map and the call logs,
//! so an insert and its audit record are applied in the same critical
//! section. Every method takes the lock once and releases it before
//! returning.
//!
//! # Design
//!
//! - FxHashMap: O(1) lookups, fast non-crypto hash
//! - Single lock: one global order for writes, reads and flushes
//! - Call logs keyed by operation identity, created on first record

use crate::call_log::CallLog;
use crate::traits::{Audit, Storage};
use callstore_core::{CallRecord, Error, Result, Value};
use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicBool, Ordering};

/// State guarded by the store lock
#[derive(Debug, Default)]
struct Inner {
    entries: FxHashMap<String, Value>,
    calls: FxHashMap<String, CallLog>,
}

/// In-memory backend shared by one or more `KeyStore` handles.
///
/// # Example
///
/// ```ignore
/// use callstore_storage::{MemoryStore, Storage};
/// use std::sync::Arc;
///
/// let backend = Arc::new(MemoryStore::new());
/// assert!(backend.insert_new("k", "v".into(), None)?);
/// ```
#[derive(Debug)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
    available: AtomicBool,
}

impl MemoryStore {
    /// Create new empty store
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
            available: AtomicBool::new(true),
        }
    }

    /// Create with pre-allocated entry capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(Inner {
                entries: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
                calls: FxHashMap::default(),
            }),
            available: AtomicBool::new(true),
        }
    }

    #[inline]
    fn ensure_available(&self) -> Result<()> {
        if self.available.load(Ordering::Acquire) {
            Ok(())
        } else {
            Err(Error::StorageUnavailable(
                "backend has been shut down".to_string(),
            ))
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for MemoryStore {
    fn insert_new(&self, key: &str, value: Value, audit: Option<Audit<'_>>) -> Result<bool> {
        self.ensure_available()?;
        let mut inner = self.inner.lock();

        if inner.entries.contains_key(key) {
            return Ok(false);
        }
        inner.entries.insert(key.to_string(), value);

        if let Some(audit) = audit {
            let record = CallRecord::new(audit.args, Some(Value::Text(key.to_string())));
            inner
                .calls
                .entry(audit.operation.to_string())
                .or_default()
                .record(record);
        }
        Ok(true)
    }

    fn get(&self, key: &str, audit: Option<Audit<'_>>) -> Result<Option<Value>> {
        self.ensure_available()?;
        let mut inner = self.inner.lock();

        let found = inner.entries.get(key).cloned();
        if let Some(audit) = audit {
            let record = CallRecord::new(audit.args, found.clone());
            inner
                .calls
                .entry(audit.operation.to_string())
                .or_default()
                .record(record);
        }
        Ok(found)
    }

    fn call_count(&self, operation: &str) -> Result<u64> {
        self.ensure_available()?;
        let inner = self.inner.lock();
        Ok(inner.calls.get(operation).map(CallLog::count).unwrap_or(0))
    }

    fn call_history(&self, operation: &str) -> Result<Vec<CallRecord>> {
        self.ensure_available()?;
        let inner = self.inner.lock();
        Ok(inner
            .calls
            .get(operation)
            .map(|log| log.records().to_vec())
            .unwrap_or_default())
    }

    fn len(&self) -> Result<usize> {
        self.ensure_available()?;
        Ok(self.inner.lock().entries.len())
    }

    fn flush(&self) -> Result<usize> {
        self.ensure_available()?;
        let mut inner = self.inner.lock();
        let removed = inner.entries.len();
        inner.entries.clear();
        inner.calls.clear();
        tracing::debug!(removed, "memory store flushed");
        Ok(removed)
    }

    fn shutdown(&self) {
        if self.available.swap(false, Ordering::AcqRel) {
            tracing::debug!("memory store shut down");
        }
    }

    fn is_available(&self) -> bool {
        self.available.load(Ordering::Acquire)
    }
}
