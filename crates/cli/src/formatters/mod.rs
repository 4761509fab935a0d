//! Terminal output formatting.
//!
//! Responsibilities:
//! - Render each command's result as the exact text written to stdout.
//!
//! Does NOT handle:
//! - Fetching data or deciding which results are errors (see `commands`).
//!
//! Invariants:
//! - Formatters are pure: they return the text and never print.
//! - Every rendered block ends with a newline.

pub mod health;
pub mod indices;
pub mod logs;
pub mod templates;

pub use health::{format_health, health_indicator};
pub use indices::{format_indices, format_no_indices};
pub use logs::{LogView, Palette, format_logs, format_no_log_indices};
pub use templates::format_templates;

use serde_json::Value;

/// Render a JSON value for display: strings unquoted, anything else as JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
