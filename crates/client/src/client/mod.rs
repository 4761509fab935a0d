//! Main Elasticsearch client and API methods.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `cluster`: Cluster health
//! - `templates`: Index templates
//! - `indices`: Cat indices
//! - `search`: Document search
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Interpreting 404 as an empty result (left to callers)

pub mod builder;

mod cluster;
mod indices;
mod search;
mod templates;

use crate::auth::Credentials;

/// Elasticsearch REST API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use es_client::{Credentials, EsClient};
/// use secrecy::SecretString;
///
/// let client = EsClient::builder()
///     .base_url("http://localhost:9200".to_string())
///     .credentials(Credentials::new("elastic", SecretString::new("changeme".into())))
///     .build()?;
/// ```
#[derive(Debug)]
pub struct EsClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) credentials: Credentials,
}

impl EsClient {
    /// Create a new client builder.
    pub fn builder() -> builder::EsClientBuilder {
        builder::EsClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Username used for basic auth.
    pub fn username(&self) -> &str {
        self.credentials.username()
    }
}
