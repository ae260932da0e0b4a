//! Call records for the per-operation audit log
//!
//! Every audited operation appends one [`CallRecord`] to the log for its
//! operation identity. Logs are append-only and read back in call order.

use crate::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Operation identities used as call-history keys.
pub mod ops {
    /// Identity of `KeyStore::store`
    pub const STORE: &str = "store";
    /// Identity of the `KeyStore::get` family (only audited when enabled)
    pub const GET: &str = "get";
}

/// One audited invocation: argument snapshots and the produced result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallRecord {
    /// Argument snapshots, in parameter order
    pub args: Vec<Value>,
    /// Result of the call; `None` when the call produced no value
    pub result: Option<Value>,
}

impl CallRecord {
    /// Create a record
    pub fn new(args: Vec<Value>, result: Option<Value>) -> Self {
        Self { args, result }
    }

    /// Render as one replay line: `op("foo") -> "key"`
    pub fn render(&self, operation: &str) -> String {
        format!("{}{}", operation, self)
    }
}

impl fmt::Display for CallRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", arg)?;
        }
        write!(f, ") -> ")?;
        match &self.result {
            Some(v) => write!(f, "{}", v),
            None => write!(f, "None"),
        }
    }
}
