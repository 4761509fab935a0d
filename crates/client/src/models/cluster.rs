//! Cluster health models.

use serde::Deserialize;
use std::fmt;

/// Response of `GET /_cluster/health`.
///
/// Only the fields the tools display are modelled; the rest are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ClusterHealth {
    pub cluster_name: String,
    pub status: ClusterStatus,
    pub number_of_nodes: u64,
    pub active_primary_shards: u64,
}

/// Cluster health status.
///
/// Matching is case-sensitive on the literal value Elasticsearch returns;
/// anything other than `green` or `yellow` is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ClusterStatus {
    Green,
    Yellow,
    Other(String),
}

impl From<String> for ClusterStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "green" => Self::Green,
            "yellow" => Self::Yellow,
            _ => Self::Other(value),
        }
    }
}

impl fmt::Display for ClusterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Green => f.write_str("green"),
            Self::Yellow => f.write_str("yellow"),
            Self::Other(value) => f.write_str(value),
        }
    }
}
