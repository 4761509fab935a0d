//! Index listing API methods for [`EsClient`].

use crate::client::EsClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::CatIndices;

impl EsClient {
    /// List indices matching `pattern` as a cat table, `None` if no rows.
    pub async fn cat_indices(&self, pattern: &str) -> Result<Option<CatIndices>> {
        endpoints::cat_indices(&self.http, &self.base_url, &self.credentials, pattern).await
    }
}
