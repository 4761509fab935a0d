//! Index template API methods for [`EsClient`].

use crate::client::EsClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::IndexTemplateListResponse;

impl EsClient {
    /// List all index templates.
    pub async fn list_index_templates(&self) -> Result<IndexTemplateListResponse> {
        endpoints::list_index_templates(&self.http, &self.base_url, &self.credentials).await
    }
}
