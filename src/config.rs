//! Store configuration.
//!
//! A [`StoreConfig`] names the backing store connection (host/port or a
//! Unix socket) and toggles read auditing. Configurations can be built in
//! code or loaded from JSON.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default backing store host
pub const DEFAULT_HOST: &str = "localhost";

/// Default backing store port
pub const DEFAULT_PORT: u16 = 6379;

/// Configuration for a [`KeyStore`](crate::KeyStore).
///
/// # Example
///
/// ```ignore
/// let config = StoreConfig::from_json(r#"{"port": 6380, "audit_reads": true}"#)?;
/// assert_eq!(config.endpoint(), "localhost:6380");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Backing store host
    pub host: String,
    /// Backing store port
    pub port: u16,
    /// Unix socket path; takes precedence over host/port
    pub socket: Option<PathBuf>,
    /// Record `get` calls in the call history
    pub audit_reads: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            socket: None,
            audit_reads: false,
        }
    }
}

impl StoreConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: StoreConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration names a usable connection.
    pub fn validate(&self) -> Result<()> {
        match &self.socket {
            Some(path) if path.as_os_str().is_empty() => {
                Err(Error::InvalidConfig("socket path is empty".to_string()))
            }
            Some(_) => Ok(()),
            None if self.host.trim().is_empty() => {
                Err(Error::InvalidConfig("host is empty".to_string()))
            }
            None if self.port == 0 => Err(Error::InvalidConfig("port must be non-zero".to_string())),
            None => Ok(()),
        }
    }

    /// Connection descriptor: `unix:<path>` or `<host>:<port>`
    pub fn endpoint(&self) -> String {
        match &self.socket {
            Some(path) => format!("unix:{}", path.display()),
            None => format!("{}:{}", self.host, self.port),
        }
    }
}
