//! Connection configuration types.
//!
//! Responsibilities:
//! - Define connection settings (host, TLS verification, timeout).
//! - Define the main `Config` structure combining connection and auth.
//!
//! Does NOT handle:
//! - Configuration loading from env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - `host` never carries a trailing slash.
//! - `timeout` of `None` means the HTTP client's own default applies.

use secrecy::SecretString;
use std::time::Duration;

use crate::constants::DEFAULT_ES_HOST;
use crate::types::auth::AuthConfig;

/// Connection settings for the Elasticsearch cluster.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Base URL of the cluster (e.g., http://localhost:9200)
    pub host: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
    /// Per-request timeout
    pub timeout: Option<Duration>,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_ES_HOST.to_string(),
            skip_verify: false,
            timeout: None,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub auth: AuthConfig,
}

impl Config {
    /// Create a config for `host` authenticating as `elastic` with `password`.
    pub fn new(host: String, password: SecretString) -> Self {
        Self {
            connection: ConnectionConfig {
                host,
                ..ConnectionConfig::default()
            },
            auth: AuthConfig::elastic(password),
        }
    }
}
