//! Cluster health endpoint.

use reqwest::Client;
use tracing::debug;

use crate::auth::Credentials;
use crate::endpoints::request::{decode_json, send_request};
use crate::error::Result;
use crate::models::ClusterHealth;

/// Get cluster health.
pub async fn get_cluster_health(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
) -> Result<ClusterHealth> {
    let url = format!("{}/_cluster/health", base_url);
    debug!("Fetching cluster health from {}", url);

    let builder = credentials.apply(client.get(&url));
    let response = send_request(builder).await?;

    decode_json(response, "/_cluster/health").await
}
