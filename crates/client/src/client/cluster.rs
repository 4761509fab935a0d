//! Cluster API methods for [`EsClient`].

use crate::client::EsClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::ClusterHealth;

impl EsClient {
    /// Get cluster health.
    pub async fn cluster_health(&self) -> Result<ClusterHealth> {
        endpoints::get_cluster_health(&self.http, &self.base_url, &self.credentials).await
    }
}
