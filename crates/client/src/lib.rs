//! Elasticsearch REST API client.
//!
//! This crate provides a small, typed client for the read-only Elasticsearch
//! endpoints used by the manager tools: cluster health, index templates,
//! cat indices and search. Every request carries basic authentication.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use auth::Credentials;
pub use client::EsClient;
pub use client::builder::EsClientBuilder;
pub use error::{ClientError, Result};
pub use models::{
    CatIndices, ClusterHealth, ClusterStatus, IndexTemplate, IndexTemplateListResponse,
    IndexTemplateSpec, LogDocument, SearchHit, SearchRequest, SearchResponse,
};
