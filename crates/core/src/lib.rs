//! Core types for callstore
//!
//! This crate defines the types shared by every layer:
//! - [`Value`]: the stored value model (text, binary, integer, float)
//! - [`CallRecord`]: one audited invocation (argument snapshots + result)
//! - [`Error`] / [`DecodeError`]: the error taxonomy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod call;
pub mod error;
pub mod value;

pub use call::{ops, CallRecord};
pub use error::{DecodeError, Error, Result};
pub use value::Value;
