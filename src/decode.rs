//! Read-path decoders.
//!
//! A [`Decoder`] turns a stored [`Value`] into a caller type. Built-in
//! decoders work on the value's raw form; closures of the shape
//! `Fn(&Value) -> Result<T, DecodeError>` are decoders too.
//!
//! ```ignore
//! let n = store.get_with(&key, |raw: &Value| {
//!     raw.as_integer().ok_or_else(|| DecodeError::custom("not an integer"))
//! })?;
//! ```

use crate::{DecodeError, Value};

/// Transform applied to a stored value on read.
pub trait Decoder {
    /// Decoded type
    type Output;

    /// Decode one stored value
    fn decode(&self, raw: &Value) -> Result<Self::Output, DecodeError>;
}

impl<T, F> Decoder for F
where
    F: Fn(&Value) -> Result<T, DecodeError>,
{
    type Output = T;

    fn decode(&self, raw: &Value) -> Result<T, DecodeError> {
        self(raw)
    }
}

/// Interpret the raw form as UTF-8 text.
///
/// Fails with [`DecodeError::Encoding`] for binary values that are not UTF-8.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8Text;

impl Decoder for Utf8Text {
    type Output = String;

    fn decode(&self, raw: &Value) -> Result<String, DecodeError> {
        match raw {
            Value::Text(s) => Ok(s.clone()),
            other => Ok(std::str::from_utf8(&other.raw_bytes())?.to_owned()),
        }
    }
}

/// Parse the raw form as a base-10 `i64`.
///
/// Surrounding ASCII whitespace and a leading sign are accepted. Anything
/// else, including float values, fails with [`DecodeError::Format`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Base10Integer;

impl Decoder for Base10Integer {
    type Output = i64;

    fn decode(&self, raw: &Value) -> Result<i64, DecodeError> {
        if let Value::Integer(i) = raw {
            return Ok(*i);
        }
        let bytes = raw.raw_bytes();
        let text = std::str::from_utf8(&bytes)
            .map_err(|e| DecodeError::format(&bytes, e))?;
        text.trim_matches(|c: char| c.is_ascii_whitespace())
            .parse::<i64>()
            .map_err(|e| DecodeError::format(&bytes, e))
    }
}
