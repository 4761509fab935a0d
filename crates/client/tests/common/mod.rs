//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the Elasticsearch client.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

use secrecy::SecretString;

#[allow(unused_imports)]
pub use es_client::testing::{load_fixture, load_text_fixture};

#[allow(unused_imports)]
pub use es_client::{Credentials, EsClient, endpoints};
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Basic auth header value for `elastic:test-password`.
#[allow(dead_code)]
pub const TEST_AUTH_HEADER: &str = "Basic ZWxhc3RpYzp0ZXN0LXBhc3N3b3Jk";

/// Credentials for the built-in `elastic` user with a fixed test password.
#[allow(dead_code)]
pub fn test_credentials() -> Credentials {
    Credentials::new("elastic", SecretString::new("test-password".to_string().into()))
}

/// A client pointed at the mock server.
#[allow(dead_code)]
pub fn test_client(server: &MockServer) -> EsClient {
    EsClient::builder()
        .base_url(server.uri())
        .credentials(test_credentials())
        .build()
        .expect("client should build")
}
