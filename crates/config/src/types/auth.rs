//! Authentication types.
//!
//! Responsibilities:
//! - Hold the basic-auth credential pair used for every request.
//!
//! Does NOT handle:
//! - Attaching credentials to requests (see client crate).
//!
//! Invariants:
//! - The password is a `secrecy::SecretString` and is redacted from `Debug` output.
//! - The username is always `elastic`.

use secrecy::SecretString;

use crate::constants::ELASTIC_USERNAME;

/// Basic authentication credentials.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Username sent with basic auth.
    pub username: String,
    /// Password sent with basic auth.
    pub password: SecretString,
}

impl AuthConfig {
    /// Credentials for the built-in `elastic` superuser.
    pub fn elastic(password: SecretString) -> Self {
        Self {
            username: ELASTIC_USERNAME.to_string(),
            password,
        }
    }
}
