//! CLI command implementations.
//!
//! Each handler issues its requests in order, prints its section to stdout
//! and returns the first failure as a [`crate::error::CommandError`].

pub mod health;
pub mod indices;
pub mod logs;
pub mod templates;

use anyhow::{Context, Result};
use es_client::EsClient;
use es_config::Config;

/// Build an Elasticsearch client from resolved configuration.
pub fn build_client_from_config(config: &Config) -> Result<EsClient> {
    EsClient::builder()
        .from_config(config)
        .build()
        .context("Failed to build Elasticsearch client")
}
