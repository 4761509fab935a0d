//! es-logs - show the most recent FastAPI log documents.
//!
//! Compact colored summaries by default; `--full` prints each document as
//! pretty JSON with its index name.

use clap::Parser;
use es_cli::args::LogsCli;
use es_cli::commands;
use es_cli::formatters::{LogView, Palette};
use es_cli::startup;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    startup::load_environment();

    let cli = LogsCli::try_parse().unwrap_or_else(|err| startup::exit_on_parse_error(err));

    startup::init_tracing();

    let client = startup::connect();
    let view = if cli.full {
        LogView::Full
    } else {
        LogView::Compact
    };
    let palette = Palette::detect(cli.no_color);

    startup::finish(commands::logs::run(&client, &cli.pattern, cli.size, view, palette).await);
}
