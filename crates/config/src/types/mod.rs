//! Configuration types.

mod auth;
mod connection;

pub use auth::AuthConfig;
pub use connection::{Config, ConnectionConfig};
