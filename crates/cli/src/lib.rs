//! Command-line front end for the Elasticsearch manager tools.
//!
//! Two binaries share this library:
//! - `es-manager`: cluster health, custom templates, indices and recent logs.
//! - `es-logs`: recent log documents, compact or as full JSON.

pub mod args;
pub mod commands;
pub mod dispatch;
pub mod error;
pub mod formatters;
pub mod startup;
