//! Cat indices models.

/// Tabular output of `GET /_cat/indices?v`.
///
/// The header and rows are kept verbatim; column alignment is whatever
/// Elasticsearch produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatIndices {
    pub header: String,
    pub rows: Vec<String>,
}

impl CatIndices {
    /// Split a `v`-formatted cat response into header and data rows.
    ///
    /// Returns `None` when the body is empty or holds only the header line.
    pub fn parse(body: &str) -> Option<Self> {
        let mut lines = body.trim().split('\n');
        let header = lines.next()?.to_string();
        let rows: Vec<String> = lines.map(str::to_string).collect();

        if rows.is_empty() {
            return None;
        }

        Some(Self { header, rows })
    }
}
