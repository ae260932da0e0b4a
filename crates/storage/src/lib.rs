//! Storage layer for callstore
//!
//! This crate implements the backing store behind `KeyStore`:
//! - Storage: object-safe backend trait
//! - MemoryStore: single-mutex FxHashMap store with per-operation call logs
//! - CallLog: append-only (args, result) log plus call counter

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod call_log;
pub mod memory;
pub mod traits;

pub use call_log::CallLog;
pub use memory::MemoryStore;
pub use traits::{Audit, Storage};
