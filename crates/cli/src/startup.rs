//! Process startup shared by both binaries.
//!
//! Responsibilities:
//! - Load `.env` before argument parsing.
//! - Initialise diagnostic logging on stderr.
//! - Resolve configuration and build the client, aborting on failure.
//! - Convert a command result into the process exit code.
//!
//! Invariants:
//! - User-facing failures are printed to stdout as `❌ <message>`.
//! - Configuration errors abort before any network call.
//! - Parse errors exit with 1; help and version output exit with 0.

use anyhow::Result;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use es_client::EsClient;
use es_config::{Config, ConfigError, ConfigLoader};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::commands::build_client_from_config;
use crate::error::ExitCode;

/// Load `.env` so that it can feed the environment read later.
pub fn load_environment() {
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        println!("❌ {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }
}

/// Install the tracing subscriber. Filtering follows `RUST_LOG`.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Resolve configuration from the process environment.
pub fn load_config() -> Result<Config, ConfigError> {
    ConfigLoader::new().from_env()?.build()
}

/// Resolve configuration and build the client, exiting on failure.
pub fn connect() -> EsClient {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            println!("❌ {}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    match build_client_from_config(&config) {
        Ok(client) => client,
        Err(e) => {
            println!("❌ {:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    }
}

/// Name of the unrecognized subcommand carried by a clap error, if any.
pub fn invalid_subcommand(err: &clap::Error) -> Option<String> {
    if err.kind() != ErrorKind::InvalidSubcommand {
        return None;
    }
    match err.get(ContextKind::InvalidSubcommand) {
        Some(ContextValue::String(name)) => Some(name.clone()),
        _ => None,
    }
}

/// Print a clap error and exit: 0 for help/version, 1 otherwise.
pub fn exit_on_parse_error(err: clap::Error) -> ! {
    let code = match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::Success,
        _ => ExitCode::GeneralError,
    };
    let _ = err.print();
    std::process::exit(code.as_i32());
}

/// Print the failure, if any, and exit with the matching code.
pub fn finish(result: Result<()>) -> ! {
    let code = match result {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            println!("❌ {}", e);
            ExitCode::GeneralError
        }
    };
    std::process::exit(code.as_i32());
}
