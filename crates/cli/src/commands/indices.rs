//! Indices command implementation.

use anyhow::Result;
use es_client::EsClient;
use tracing::info;

use crate::error::CommandError;
use crate::formatters::{format_indices, format_no_indices};

pub async fn run(client: &EsClient, pattern: &str) -> Result<()> {
    info!("Listing indices matching {}", pattern);

    let table = match client.cat_indices(pattern).await {
        Ok(table) => table,
        Err(e) if e.is_not_found() => {
            print!("{}", format_no_indices(pattern));
            return Ok(());
        }
        Err(e) => return Err(CommandError::from_request(e).into()),
    };

    print!("{}", format_indices(pattern, table.as_ref()));
    Ok(())
}
