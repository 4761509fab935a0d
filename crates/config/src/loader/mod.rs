//! Configuration loader for `.env` files and environment variables.
//!
//! Responsibilities:
//! - Load `.env` files and environment variables into a builder-pattern `ConfigLoader`.
//! - Enforce the `DOTENV_DISABLED` gate so tests stay hermetic.
//! - Reject configurations without a password before any request is made.
//!
//! Invariants / Assumptions:
//! - Builder overrides take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

mod builder;
mod env;
mod error;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;

#[cfg(test)]
mod tests;
