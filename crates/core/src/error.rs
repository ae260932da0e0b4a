//! Error types for callstore.
//!
//! A missing key is never an error: lookups return `Ok(None)`.
//! Every other failure is returned to the immediate caller unchanged;
//! nothing in the store retries or discards errors.

use thiserror::Error;

/// All callstore errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Backing storage unreachable (connection closed or backend shut down)
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// A decoder rejected the stored value
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Rejected configuration
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Internal error (bug or invariant violation)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Failures raised by decoders on the read path.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Raw bytes are not valid UTF-8
    #[error("invalid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// Raw form does not parse as the requested type
    #[error("cannot parse {input:?}: {reason}")]
    Format {
        /// Lossy rendering of the rejected input
        input: String,
        /// Parser message
        reason: String,
    },

    /// Failure raised by a caller-supplied decoder
    #[error("{0}")]
    Custom(String),
}

impl DecodeError {
    /// Build a `Format` error from raw input and a parser message
    pub fn format(input: &[u8], reason: impl ToString) -> Self {
        DecodeError::Format {
            input: String::from_utf8_lossy(input).into_owned(),
            reason: reason.to_string(),
        }
    }

    /// Build a `Custom` error
    pub fn custom(message: impl Into<String>) -> Self {
        DecodeError::Custom(message.into())
    }
}

/// Result type for callstore operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is retryable.
    ///
    /// Only storage outages may succeed on retry; the store itself never retries.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::StorageUnavailable(_))
    }

    /// Check if this is a storage outage.
    pub fn is_storage_unavailable(&self) -> bool {
        matches!(self, Error::StorageUnavailable(_))
    }

    /// Check if this is any decoder failure.
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Error::Decode(_))
    }

    /// Check if this is a UTF-8 decoding failure.
    pub fn is_encoding_error(&self) -> bool {
        matches!(self, Error::Decode(DecodeError::Encoding(_)))
    }

    /// Check if this is a parse failure.
    pub fn is_format_error(&self) -> bool {
        matches!(self, Error::Decode(DecodeError::Format { .. }))
    }
}

// Convert from serde_json errors
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
