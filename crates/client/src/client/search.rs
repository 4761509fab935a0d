//! Search API methods for [`EsClient`].
//!
//! # What this module handles:
//! - Running arbitrary search requests
//! - Fetching the newest log documents of an index pattern

use es_config::constants::LOG_TIMESTAMP_FIELD;

use crate::client::EsClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{SearchHit, SearchRequest, SearchResponse};

impl EsClient {
    /// Run a search request against `index_pattern`.
    pub async fn search(
        &self,
        index_pattern: &str,
        request: &SearchRequest,
    ) -> Result<SearchResponse> {
        endpoints::search(
            &self.http,
            &self.base_url,
            &self.credentials,
            index_pattern,
            request,
        )
        .await
    }

    /// Fetch the `size` newest log documents by `asctime`, newest first.
    pub async fn latest_logs(&self, index_pattern: &str, size: usize) -> Result<Vec<SearchHit>> {
        let request = SearchRequest::latest(size, LOG_TIMESTAMP_FIELD);
        let response = self.search(index_pattern, &request).await?;
        Ok(response.hits.hits)
    }
}
