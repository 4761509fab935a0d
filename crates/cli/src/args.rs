//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define both command-line interfaces using clap derive macros.
//! - Supply the default index patterns and log count.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not handle config loading (see `startup` module).

use clap::{Parser, Subcommand};
use es_config::constants::{DEFAULT_INDEX_PATTERN, DEFAULT_LOG_COUNT, DEFAULT_LOGS_INDEX_PATTERN};

/// Arguments of `es-manager`.
#[derive(Debug, Parser)]
#[command(name = "es-manager")]
#[command(about = "Elasticsearch Manager - Manage templates, indices, and logs", long_about = None)]
#[command(version)]
#[command(
    after_help = "Running without a command shows health, templates and indices.\n\nExamples:\n  es-manager health\n  es-manager templates\n  es-manager indices\n  es-manager indices 'fastapi-logs-rag-chat-*'\n  es-manager logs\n  es-manager logs 'fastapi-logs-*' 50\n"
)]
pub struct Cli {
    /// Disable ANSI colors in log output (also honours NO_COLOR)
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show cluster health
    Health,

    /// List all custom templates
    Templates,

    /// List indices matching a pattern
    Indices {
        /// Index pattern
        #[arg(default_value = DEFAULT_INDEX_PATTERN)]
        pattern: String,
    },

    /// Show the most recent log documents
    Logs {
        /// Index pattern
        #[arg(default_value = DEFAULT_INDEX_PATTERN)]
        pattern: String,

        /// Number of documents to show
        #[arg(default_value_t = DEFAULT_LOG_COUNT)]
        size: usize,
    },
}

/// Arguments of `es-logs`.
#[derive(Debug, Parser)]
#[command(name = "es-logs")]
#[command(about = "Show the latest FastAPI logs stored in Elasticsearch", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  es-logs\n  es-logs 'fastapi-logs-*' 50\n  es-logs --full\n  es-logs 'fastapi-logs-rag-chat-*' 5 -f\n"
)]
pub struct LogsCli {
    /// Index pattern
    #[arg(default_value = DEFAULT_LOGS_INDEX_PATTERN)]
    pub pattern: String,

    /// Number of documents to show
    #[arg(default_value_t = DEFAULT_LOG_COUNT)]
    pub size: usize,

    /// Print every document as pretty JSON
    #[arg(short, long)]
    pub full: bool,

    /// Disable ANSI colors (also honours NO_COLOR)
    #[arg(long)]
    pub no_color: bool,
}
