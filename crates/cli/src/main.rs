//! es-manager - inspect an Elasticsearch cluster used for FastAPI logs.
//!
//! Responsibilities:
//! - Parse the command line and dispatch health, templates, indices and logs.
//! - Report unknown commands with the usage text.
//!
//! Does NOT handle:
//! - REST API implementation (see `crates/client`).
//!
//! Invariants:
//! - `.env` is loaded BEFORE CLI parsing.
//! - Help output never requires credentials.

use clap::{CommandFactory, Parser};
use es_cli::args::Cli;
use es_cli::dispatch::run_command;
use es_cli::error::ExitCode;
use es_cli::formatters::Palette;
use es_cli::startup;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    startup::load_environment();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match startup::invalid_subcommand(&err) {
            Some(name) => {
                println!("❌ Unknown command: {}", name);
                println!("{}", Cli::command().render_help());
                std::process::exit(ExitCode::GeneralError.as_i32());
            }
            None => startup::exit_on_parse_error(err),
        },
    };

    startup::init_tracing();

    let client = startup::connect();
    let palette = Palette::detect(cli.no_color);

    startup::finish(run_command(cli.command, &client, palette).await);
}
