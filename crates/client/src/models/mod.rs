//! Data models for Elasticsearch API requests and responses.
//!
//! Types are organized by endpoint family in submodules and re-exported here
//! for convenient access.

pub mod cluster;
pub mod indices;
pub mod search;
pub mod templates;

pub use cluster::{ClusterHealth, ClusterStatus};
pub use indices::CatIndices;
pub use search::{LogDocument, SearchHit, SearchHits, SearchRequest, SearchResponse, SortOrder};
pub use templates::{IndexTemplate, IndexTemplateListResponse, IndexTemplateSpec};
