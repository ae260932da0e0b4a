//! Main entry point for callstore.
//!
//! This module provides the `KeyStore` struct: generated-key storage with
//! typed reads and a per-operation call history.

use crate::config::StoreConfig;
use crate::decode::{Base10Integer, Decoder, Utf8Text};
use crate::{ops, CallRecord, Error, Result, Value};
use callstore_storage::{Audit, MemoryStore, Storage};
use std::fmt::Write as _;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use uuid::Uuid;

/// Connection state shared by clones of one handle
struct Connection {
    backend: Arc<dyn Storage>,
    closed: AtomicBool,
}

/// Key-value store with generated keys and call auditing.
///
/// Create one with [`KeyStore::open`], [`KeyStore::attach`] or
/// [`KeyStore::builder`]. Handles are cheap to clone; clones share the
/// same connection, so closing one closes all of them.
///
/// # Example
///
/// ```ignore
/// use callstore::prelude::*;
///
/// let store = KeyStore::open(StoreConfig::default())?;
///
/// let key = store.store("42")?;
/// assert_eq!(store.get_as_integer(&key)?, Some(42));
/// assert_eq!(store.call_count(ops::STORE)?, 1);
///
/// store.close();
/// ```
#[derive(Clone)]
pub struct KeyStore {
    conn: Arc<Connection>,
    config: Arc<StoreConfig>,
}

impl KeyStore {
    /// Open a store backed by a private in-memory backend.
    pub fn open(config: StoreConfig) -> Result<Self> {
        Self::attach(config, Arc::new(MemoryStore::new()))
    }

    /// Connect to an existing backend.
    ///
    /// Existing entries and call histories are left untouched; call
    /// [`reset`](Self::reset) for a clean slate.
    pub fn attach(config: StoreConfig, backend: Arc<dyn Storage>) -> Result<Self> {
        config.validate()?;
        if !backend.is_available() {
            return Err(Error::StorageUnavailable(format!(
                "cannot connect to {}",
                config.endpoint()
            )));
        }

        tracing::info!(
            endpoint = %config.endpoint(),
            audit_reads = config.audit_reads,
            "key store connected"
        );

        Ok(Self {
            conn: Arc::new(Connection {
                backend,
                closed: AtomicBool::new(false),
            }),
            config: Arc::new(config),
        })
    }

    /// Create a builder for store configuration.
    ///
    /// ```ignore
    /// let store = KeyStore::builder()
    ///     .host("cache.local")
    ///     .port(6380)
    ///     .audit_reads(true)
    ///     .open()?;
    /// ```
    pub fn builder() -> KeyStoreBuilder {
        KeyStoreBuilder::new()
    }

    /// The configuration this store was opened with
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn backend(&self) -> Result<&dyn Storage> {
        if self.conn.closed.load(Ordering::Acquire) {
            return Err(Error::StorageUnavailable(format!(
                "connection to {} is closed",
                self.config.endpoint()
            )));
        }
        Ok(self.conn.backend.as_ref())
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Store a value under a freshly generated key and return the key.
    ///
    /// The write, the `"store"` counter increment and the history record
    /// are applied together. Keys are random v4 UUIDs; on the rare
    /// collision with a live key a new one is drawn.
    pub fn store(&self, value: impl Into<Value>) -> Result<String> {
        let backend = self.backend()?;
        let value = value.into();

        loop {
            let key = Uuid::new_v4().to_string();
            let audit = Audit::new(ops::STORE, vec![value.clone()]);
            if backend.insert_new(&key, value.clone(), Some(audit))? {
                tracing::trace!(key = %key, kind = value.type_name(), "stored");
                return Ok(key);
            }
            tracing::trace!(key = %key, "generated key collided, redrawing");
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Get the stored value, or `None` if the key is absent.
    pub fn get(&self, key: &str) -> Result<Option<Value>> {
        let backend = self.backend()?;
        let audit = self
            .config
            .audit_reads
            .then(|| Audit::new(ops::GET, vec![Value::Text(key.to_string())]));
        backend.get(key, audit)
    }

    /// Get the stored value and run it through `decoder`.
    ///
    /// A missing key yields `Ok(None)` without calling the decoder. Decoder
    /// failures are returned as [`Error::Decode`]. The decoder runs after
    /// the backend lock is released.
    pub fn get_with<D: Decoder>(&self, key: &str, decoder: D) -> Result<Option<D::Output>> {
        match self.get(key)? {
            Some(raw) => Ok(Some(decoder.decode(&raw)?)),
            None => Ok(None),
        }
    }

    /// Get the value as UTF-8 text.
    ///
    /// Fails with an encoding error if a binary value is not valid UTF-8.
    pub fn get_as_text(&self, key: &str) -> Result<Option<String>> {
        self.get_with(key, Utf8Text)
    }

    /// Get the value parsed as a base-10 integer.
    ///
    /// Fails with a format error if the raw form is not an integer literal.
    pub fn get_as_integer(&self, key: &str) -> Result<Option<i64>> {
        self.get_with(key, Base10Integer)
    }

    /// Number of live entries
    pub fn len(&self) -> Result<usize> {
        self.backend()?.len()
    }

    /// Check if the store holds no entries
    pub fn is_empty(&self) -> Result<bool> {
        self.backend()?.is_empty()
    }

    // =========================================================================
    // Call history
    // =========================================================================

    /// Number of recorded calls of `operation` (0 if never invoked).
    pub fn call_count(&self, operation: &str) -> Result<u64> {
        self.backend()?.call_count(operation)
    }

    /// Recorded calls of `operation`, in call order.
    pub fn call_history(&self, operation: &str) -> Result<Vec<CallRecord>> {
        self.backend()?.call_history(operation)
    }

    /// Render the call history of `operation` for display.
    ///
    /// ```text
    /// store was called 2 times:
    /// store("foo") -> "3f1c..."
    /// store(42) -> "9a0b..."
    /// ```
    pub fn replay(&self, operation: &str) -> Result<String> {
        let history = self.call_history(operation)?;
        let plural = if history.len() == 1 { "" } else { "s" };

        let mut out = format!("{} was called {} time{}:", operation, history.len(), plural);
        for record in &history {
            // Writing to a String cannot fail
            let _ = write!(out, "\n{}", record.render(operation));
        }
        Ok(out)
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Remove every entry, counter and call history.
    ///
    /// Any call ordered after a completed reset sees an empty store.
    pub fn reset(&self) -> Result<()> {
        let removed = self.backend()?.flush()?;
        tracing::debug!(endpoint = %self.config.endpoint(), removed, "key store reset");
        Ok(())
    }

    /// Close this connection.
    ///
    /// Every later call on this handle (and its clones) fails with
    /// `StorageUnavailable`. The backend itself and other connections to
    /// it are unaffected. Closing twice is a no-op.
    pub fn close(&self) {
        if !self.conn.closed.swap(true, Ordering::AcqRel) {
            tracing::info!(endpoint = %self.config.endpoint(), "key store closed");
        }
    }

    /// Check if [`close`](Self::close) has been called
    pub fn is_closed(&self) -> bool {
        self.conn.closed.load(Ordering::Acquire)
    }
}

impl std::fmt::Debug for KeyStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyStore")
            .field("endpoint", &self.config.endpoint())
            .field("audit_reads", &self.config.audit_reads)
            .field("closed", &self.is_closed())
            .finish()
    }
}

/// Builder for store configuration.
///
/// ```ignore
/// // Private in-memory backend
/// let store = KeyStore::builder().open()?;
///
/// // Shared backend
/// let backend: Arc<dyn Storage> = Arc::new(MemoryStore::new());
/// let a = KeyStore::builder().backend(backend.clone()).open()?;
/// let b = KeyStore::builder().backend(backend).open()?;
/// ```
#[derive(Default)]
pub struct KeyStoreBuilder {
    config: StoreConfig,
    backend: Option<Arc<dyn Storage>>,
}

impl KeyStoreBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the backing store host
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the backing store port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Connect through a Unix socket instead of host/port
    pub fn socket(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.config.socket = Some(path.into());
        self
    }

    /// Record `get` calls in the call history
    pub fn audit_reads(mut self, enabled: bool) -> Self {
        self.config.audit_reads = enabled;
        self
    }

    /// Use a shared backend instead of a private one
    pub fn backend(mut self, backend: Arc<dyn Storage>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Open the store.
    pub fn open(self) -> Result<KeyStore> {
        match self.backend {
            Some(backend) => KeyStore::attach(self.config, backend),
            None => KeyStore::open(self.config),
        }
    }
}
