//! Search request and response models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Body of `POST /{index}/_search`.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub size: usize,
    pub sort: Vec<BTreeMap<String, SortSpec>>,
    pub query: Query,
}

/// Sort clause for a single field.
#[derive(Debug, Clone, Serialize)]
pub struct SortSpec {
    pub order: SortOrder,
}

/// Sort direction. Log queries only ever sort newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Desc,
}

/// Query clause. Only `match_all` is supported.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Query {
    pub match_all: MatchAll,
}

/// Empty `match_all` object.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MatchAll {}

impl SearchRequest {
    /// Match every document, newest first by `sort_field`, returning `size` hits.
    pub fn latest(size: usize, sort_field: &str) -> Self {
        let mut clause = BTreeMap::new();
        clause.insert(
            sort_field.to_string(),
            SortSpec {
                order: SortOrder::Desc,
            },
        );

        Self {
            size,
            sort: vec![clause],
            query: Query::default(),
        }
    }
}

/// Response of a search request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub hits: SearchHits,
}

/// The `hits` envelope of a search response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchHits {
    #[serde(default)]
    pub hits: Vec<SearchHit>,
}

/// A single matching document with its metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    #[serde(rename = "_index", default)]
    pub index: String,
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(rename = "_score", default)]
    pub score: Option<f64>,
    #[serde(rename = "_source", default)]
    pub source: LogDocument,
}

/// A log document as stored in `_source`.
///
/// Arbitrary JSON object; key order is preserved so the document can be
/// re-encoded exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogDocument(Map<String, Value>);

impl LogDocument {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Raw field value, if the key exists.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Field value if present, not null, and not an empty string.
    pub fn non_empty(&self, key: &str) -> Option<&Value> {
        match self.0.get(key) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s.is_empty() => None,
            Some(value) => Some(value),
        }
    }

    /// Pretty-printed JSON with two-space indentation.
    ///
    /// Non-ASCII is kept literal and numbers keep the exact text they were
    /// received with, including integers wider than 64 bits.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.0)
    }
}

impl From<Map<String, Value>> for LogDocument {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}
