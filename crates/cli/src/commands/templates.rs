//! Templates command implementation.

use anyhow::Result;
use es_client::EsClient;
use es_config::constants::CUSTOM_TEMPLATE_MARKER;
use tracing::info;

use crate::error::CommandError;
use crate::formatters::format_templates;

pub async fn run(client: &EsClient) -> Result<()> {
    info!("Listing index templates...");

    let templates = client
        .list_index_templates()
        .await
        .map_err(CommandError::from_request)?
        .named_containing(CUSTOM_TEMPLATE_MARKER);

    print!("{}", format_templates(&templates));
    Ok(())
}
