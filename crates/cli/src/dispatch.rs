//! Command dispatch logic for es-manager.
//!
//! Responsibilities:
//! - Route parsed commands to their handlers.
//! - Run the implicit health check in front of `templates` and `indices`.
//!
//! Does NOT handle:
//! - Argument parsing (see `args`).
//! - Configuration loading (see `startup`).
//!
//! Invariants:
//! - Steps run sequentially; the first failure stops the remaining steps.

use anyhow::Result;
use es_client::EsClient;
use es_config::constants::DEFAULT_INDEX_PATTERN;

use crate::args::Commands;
use crate::commands;
use crate::formatters::{LogView, Palette};

/// Run an es-manager command. `None` is the full overview.
pub async fn run_command(
    command: Option<Commands>,
    client: &EsClient,
    palette: Palette,
) -> Result<()> {
    match command {
        None => {
            commands::health::run(client).await?;
            commands::templates::run(client).await?;
            commands::indices::run(client, DEFAULT_INDEX_PATTERN).await?;
        }
        Some(Commands::Health) => {
            commands::health::run(client).await?;
        }
        Some(Commands::Templates) => {
            commands::health::run(client).await?;
            commands::templates::run(client).await?;
        }
        Some(Commands::Indices { pattern }) => {
            commands::health::run(client).await?;
            commands::indices::run(client, &pattern).await?;
        }
        Some(Commands::Logs { pattern, size }) => {
            commands::logs::run(client, &pattern, size, LogView::Compact, palette).await?;
        }
    }
    Ok(())
}
