//! Health command implementation.

use anyhow::Result;
use es_client::EsClient;
use tracing::{debug, info};

use crate::error::CommandError;
use crate::formatters::format_health;

pub async fn run(client: &EsClient) -> Result<()> {
    info!("Checking cluster health at {}", client.base_url());

    let health = client.cluster_health().await.map_err(|e| {
        debug!("Health check failed: {}", e);
        CommandError::ConnectionFailed
    })?;

    print!("{}", format_health(&health));
    Ok(())
}
