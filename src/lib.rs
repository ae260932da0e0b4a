//! # callstore
//!
//! Embeddable key-value cache with generated keys, typed reads and a
//! per-operation call history.
//!
//! ## Quick Start
//!
//! ```ignore
//! use callstore::prelude::*;
//!
//! let store = KeyStore::open(StoreConfig::default())?;
//!
//! let key = store.store("42")?;
//! assert_eq!(store.get(&key)?, Some(Value::Text("42".into())));
//! assert_eq!(store.get_as_integer(&key)?, Some(42));
//!
//! // Every store call is audited
//! assert_eq!(store.call_count(ops::STORE)?, 1);
//! println!("{}", store.replay(ops::STORE)?);
//!
//! // Explicit clean slate and teardown
//! store.reset()?;
//! store.close();
//! ```
//!
//! ## Layers
//!
//! - `callstore-core`: [`Value`], [`CallRecord`], [`Error`]
//! - `callstore-storage`: the [`Storage`] trait and [`MemoryStore`]
//! - this crate: [`KeyStore`], [`StoreConfig`], [`Decoder`]s

#![warn(missing_docs)]

mod config;
mod decode;
mod store;

pub mod prelude;

// Re-export main entry points
pub use config::{StoreConfig, DEFAULT_HOST, DEFAULT_PORT};
pub use decode::{Base10Integer, Decoder, Utf8Text};
pub use store::{KeyStore, KeyStoreBuilder};

// Re-export core types
pub use callstore_core::{ops, CallRecord, DecodeError, Error, Result, Value};

// Re-export storage backends
pub use callstore_storage::{MemoryStore, Storage};
