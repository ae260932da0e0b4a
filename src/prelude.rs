//! Convenient imports for callstore.
//!
//! ```ignore
//! use callstore::prelude::*;
//!
//! let store = KeyStore::open(StoreConfig::default())?;
//! store.store("value")?;
//! ```

// Main entry point
pub use crate::config::StoreConfig;
pub use crate::store::{KeyStore, KeyStoreBuilder};

// Error handling
pub use crate::{DecodeError, Error, Result};

// Core types
pub use crate::{ops, CallRecord, Value};

// Decoders
pub use crate::decode::{Base10Integer, Decoder, Utf8Text};
