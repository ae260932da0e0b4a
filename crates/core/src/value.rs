//! Value types for callstore
//!
//! This module defines the canonical Value type stored under every key.
//! The Value enum has exactly 4 variants.
//!
//! ## Contract
//!
//! - No implicit type coercions on equality
//! - IEEE-754 float equality semantics
//! - Binary and Text are distinct types
//!
//! ## Raw Form
//!
//! Every value also has a *raw form*: the bytes a byte-oriented datastore
//! would hold for it. Decoders on the read path (text, integer) operate on
//! the raw form, so a value stored as `Text("42")` reads back as integer 42.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Canonical callstore Value type
///
/// ## The Four Types
///
/// 1. `Text` - UTF-8 encoded string
/// 2. `Binary` - Arbitrary binary data (distinct from Text)
/// 3. `Integer` - 64-bit signed integer
/// 4. `Float` - 64-bit IEEE-754 floating point
///
/// ## Equality Rules
///
/// - Different types are NEVER equal (no type coercion)
/// - `Integer(1)` != `Float(1.0)`
/// - `Text("abc")` != `Binary([97, 98, 99])`
/// - Float uses IEEE-754 equality: `NaN != NaN`, `-0.0 == 0.0`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Value {
    /// UTF-8 encoded string
    Text(String),

    /// Arbitrary binary data
    /// NOT equivalent to Text - distinct type
    Binary(Vec<u8>),

    /// 64-bit signed integer
    Integer(i64),

    /// 64-bit IEEE-754 floating point
    Float(f64),
}

impl Value {
    /// Returns the type name as a string (for error messages)
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Text(_) => "Text",
            Value::Binary(_) => "Binary",
            Value::Integer(_) => "Integer",
            Value::Float(_) => "Float",
        }
    }

    /// Try to get as string slice
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as bytes slice
    pub fn as_binary(&self) -> Option<&[u8]> {
        match self {
            Value::Binary(b) => Some(b),
            _ => None,
        }
    }

    /// Try to get as i64
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as f64
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// The raw byte form of this value.
    ///
    /// Text and Binary borrow their contents. Numbers are rendered as
    /// base-10 ASCII; floats always carry a fractional part or exponent
    /// (`1.0`, not `1`), so they never parse as integers.
    pub fn raw_bytes(&self) -> Cow<'_, [u8]> {
        match self {
            Value::Text(s) => Cow::Borrowed(s.as_bytes()),
            Value::Binary(b) => Cow::Borrowed(b.as_slice()),
            Value::Integer(i) => Cow::Owned(i.to_string().into_bytes()),
            Value::Float(f) => Cow::Owned(format!("{:?}", f).into_bytes()),
        }
    }

    /// Size of the raw form in bytes
    pub fn raw_len(&self) -> usize {
        match self {
            Value::Text(s) => s.len(),
            Value::Binary(b) => b.len(),
            _ => self.raw_bytes().len(),
        }
    }
}

// ============================================================================
// Custom PartialEq Implementation (IEEE-754 semantics, no type coercion)
// ============================================================================

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Binary(a), Value::Binary(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            // IEEE-754 equality: NaN != NaN, but -0.0 == 0.0
            (Value::Float(a), Value::Float(b)) => a == b,

            // Different types: NEVER equal
            _ => false,
        }
    }
}

/// Replay rendering: text is quoted, binary uses a `b"..."` literal with
/// non-printable bytes escaped.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{:?}", s),
            Value::Binary(b) => write!(f, "b\"{}\"", b.escape_ascii()),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{:?}", x),
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Value::Binary(b.to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Binary(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float(f64::from(f))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

// ============================================================================
// Tests
// ============================================================================
