//! Backend trait behind `KeyStore`.
//!
//! Each method is one atomic step against the backend: an insert and its
//! audit record, or a lookup and its audit record, become visible together.

use callstore_core::{CallRecord, Result, Value};

/// Audit request attached to a write or read.
///
/// The backend completes the record with the call's result: the key for
/// an insert, the looked-up value (or `None`) for a read.
#[derive(Debug, Clone)]
pub struct Audit<'a> {
    /// Operation identity the record is filed under
    pub operation: &'a str,
    /// Argument snapshots
    pub args: Vec<Value>,
}

impl<'a> Audit<'a> {
    /// Create an audit request
    pub fn new(operation: &'a str, args: Vec<Value>) -> Self {
        Self { operation, args }
    }
}

/// Backing store for generated-key entries and call histories.
///
/// Implementations must be linearizable: every method behaves as if it ran
/// alone at some instant between its call and return.
pub trait Storage: Send + Sync {
    /// Insert `value` under `key` if the key is free.
    ///
    /// Returns `false` (and records nothing) when the key already exists.
    fn insert_new(&self, key: &str, value: Value, audit: Option<Audit<'_>>) -> Result<bool>;

    /// Look up `key`, recording the read when `audit` is given.
    fn get(&self, key: &str, audit: Option<Audit<'_>>) -> Result<Option<Value>>;

    /// Number of recorded calls for `operation` (0 if never invoked)
    fn call_count(&self, operation: &str) -> Result<u64>;

    /// Recorded calls for `operation`, in call order
    fn call_history(&self, operation: &str) -> Result<Vec<CallRecord>>;

    /// Number of live entries
    fn len(&self) -> Result<usize>;

    /// Check if the backend holds no entries
    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Remove every entry and every call log. Returns the number of entries removed.
    fn flush(&self) -> Result<usize>;

    /// Take the backend offline; every later call fails with `StorageUnavailable`.
    fn shutdown(&self);

    /// Whether the backend still accepts calls
    fn is_available(&self) -> bool;
}
