//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read `ES_HOST`, `ELASTIC_PASSWORD`, `ES_TIMEOUT` and `ES_SKIP_VERIFY`.
//! - Apply the values to a ConfigLoader instance.
//!
//! Does NOT handle:
//! - Building the final Config (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric or boolean values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
///
/// Values already set through builder methods are kept.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if loader.host().is_none() {
        if let Some(host) = env_var_or_none("ES_HOST") {
            loader.set_host(Some(host));
        }
    }
    if !loader.has_password() {
        if let Some(password) = env_var_or_none("ELASTIC_PASSWORD") {
            loader.set_password(Some(SecretString::new(password.into())));
        }
    }
    if loader.timeout().is_none() {
        if let Some(timeout) = env_var_or_none("ES_TIMEOUT") {
            let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
                var: "ES_TIMEOUT".to_string(),
                message: "must be a number of seconds".to_string(),
            })?;
            loader.set_timeout(Some(Duration::from_secs(secs)));
        }
    }
    if loader.skip_verify().is_none() {
        if let Some(skip) = env_var_or_none("ES_SKIP_VERIFY") {
            loader.set_skip_verify(Some(parse_bool(&skip).ok_or_else(|| {
                ConfigError::InvalidValue {
                    var: "ES_SKIP_VERIFY".to_string(),
                    message: "must be true or false".to_string(),
                }
            })?));
        }
    }

    Ok(())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
