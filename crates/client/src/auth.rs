//! Basic authentication for Elasticsearch requests.
//!
//! Invariants:
//! - The password is only exposed at the moment it is attached to a request.

use es_config::AuthConfig;
use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};

/// Username/password pair sent as an HTTP `Authorization: Basic` header.
#[derive(Debug, Clone)]
pub struct Credentials {
    username: String,
    password: SecretString,
}

impl Credentials {
    /// Create credentials from a username and password.
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }

    /// The username sent with each request.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Attach the credentials to a request.
    pub(crate) fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.basic_auth(&self.username, Some(self.password.expose_secret()))
    }
}

impl From<&AuthConfig> for Credentials {
    fn from(auth: &AuthConfig) -> Self {
        Self::new(auth.username.clone(), auth.password.clone())
    }
}
