//! Logs command implementation, shared by `es-manager logs` and `es-logs`.

use anyhow::Result;
use es_client::EsClient;
use tracing::info;

use crate::error::CommandError;
use crate::formatters::{LogView, Palette, format_logs, format_no_log_indices};

pub async fn run(
    client: &EsClient,
    pattern: &str,
    size: usize,
    view: LogView,
    palette: Palette,
) -> Result<()> {
    info!("Fetching last {} logs from {}", size, pattern);

    let hits = match client.latest_logs(pattern, size).await {
        Ok(hits) => hits,
        Err(e) if e.is_not_found() => {
            print!("{}", format_no_log_indices(pattern));
            return Ok(());
        }
        Err(e) => return Err(CommandError::from_query(e).into()),
    };

    print!("{}", format_logs(pattern, &hits, view, palette)?);
    Ok(())
}
