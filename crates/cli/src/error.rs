//! CLI exit codes and user-facing command failures.
//!
//! Responsibilities:
//! - Define the exit codes returned by both binaries.
//! - Map client failures to the one-line messages printed on stdout.
//!
//! Does NOT handle:
//! - Printing (see `startup::finish`).
//!
//! Invariants:
//! - Benign "nothing found" results are not errors and exit with 0.
//! - Every failure exits with 1.

use es_client::ClientError;
use thiserror::Error;

/// Exit codes for es-manager and es-logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Command completed, including empty results.
    Success = 0,

    /// Missing credential, failed request or invalid arguments.
    GeneralError = 1,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// A command step that failed. Display output is the text after `❌ `.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The cluster did not answer, or answered the health check with an error.
    #[error("Could not connect to Elasticsearch")]
    ConnectionFailed,

    /// A listing request returned a non-success status.
    #[error("Request failed: {status}")]
    RequestFailed { status: u16 },

    /// A search returned a non-success status other than 404.
    #[error("Query failed: {status}\n{body}")]
    QueryFailed { status: u16, body: String },

    /// The cluster answered with a body that could not be interpreted.
    #[error("{0}")]
    Client(ClientError),
}

impl CommandError {
    /// Map a failed listing request (templates, indices).
    pub fn from_request(err: ClientError) -> Self {
        match err {
            ClientError::ApiError { status, .. } => Self::RequestFailed { status },
            err if err.is_connection_error() => Self::ConnectionFailed,
            err => Self::Client(err),
        }
    }

    /// Map a failed search request, keeping the raw response body.
    pub fn from_query(err: ClientError) -> Self {
        match err {
            ClientError::ApiError { status, body, .. } => Self::QueryFailed { status, body },
            err if err.is_connection_error() => Self::ConnectionFailed,
            err => Self::Client(err),
        }
    }
}
