//! Log document formatter shared by `es-manager logs` and `es-logs`.
//!
//! Responsibilities:
//! - Render hits as colored one-line summaries with request details (compact view).
//! - Render hits as numbered, pretty-printed JSON blocks (full view).
//!
//! Invariants:
//! - Hits are rendered in the order the server returned them.
//! - Detail lines appear only for fields that are present, non-null and non-empty.
//! - Unknown levels are printed without escape codes.

use anyhow::{Context, Result};
use es_client::{LogDocument, SearchHit};
use es_config::env_var_or_none;

use super::display_value;

const RESET: &str = "\x1b[0m";
const SEPARATOR_WIDTH: usize = 80;

/// How each hit is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogView {
    #[default]
    Compact,
    Full,
}

/// ANSI color selection for log levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub const COLORED: Self = Self { enabled: true };
    pub const PLAIN: Self = Self { enabled: false };

    /// Colors unless `--no-color` was given or `NO_COLOR` is set.
    pub fn detect(no_color_flag: bool) -> Self {
        Self {
            enabled: !no_color_flag && env_var_or_none("NO_COLOR").is_none(),
        }
    }

    /// Escape code for a level name, if it is a known level and colors are on.
    pub fn level_color(&self, level: &str) -> Option<&'static str> {
        if !self.enabled {
            return None;
        }
        match level {
            "ERROR" => Some("\x1b[91m"),
            "WARNING" => Some("\x1b[93m"),
            "INFO" => Some("\x1b[92m"),
            "DEBUG" => Some("\x1b[94m"),
            _ => None,
        }
    }
}

/// Message for a search against a pattern with no indices (HTTP 404).
pub fn format_no_log_indices(pattern: &str) -> String {
    format!(
        "📋 No indices found matching '{}'\n   (Logs haven't been sent to Elasticsearch yet)\n",
        pattern
    )
}

/// Format search hits for display.
///
/// # Errors
///
/// Fails only if a document cannot be re-encoded as JSON in the full view.
pub fn format_logs(
    pattern: &str,
    hits: &[SearchHit],
    view: LogView,
    palette: Palette,
) -> Result<String> {
    if hits.is_empty() {
        return Ok(format!("📋 No logs found in '{}'\n", pattern));
    }

    let mut output = format!("📋 Last {} logs from '{}':\n\n", hits.len(), pattern);
    for (i, hit) in hits.iter().enumerate() {
        match view {
            LogView::Compact => output.push_str(&format_compact(&hit.source, palette)),
            LogView::Full => output.push_str(&format_full(i + 1, hit)?),
        }
    }
    Ok(output)
}

fn format_compact(source: &LogDocument, palette: Palette) -> String {
    let timestamp = field_or(source, "asctime", "N/A");
    let level = field_or(source, "levelname", "INFO");
    let message = field_or(source, "message", "");

    let mut output = match palette.level_color(&level) {
        Some(color) => format!("{color}[{timestamp}] {level}{RESET} - {message}\n"),
        None => format!("[{timestamp}] {level} - {message}\n"),
    };

    if let Some(request_id) = source.non_empty("request_id") {
        output.push_str(&format!("  Request: {}\n", display_value(request_id)));
    }
    if let (Some(method), Some(path)) = (source.non_empty("method"), source.non_empty("path")) {
        output.push_str(&format!(
            "  {} {} → {}\n",
            display_value(method),
            display_value(path),
            field_or(source, "status_code", "?")
        ));
    }
    if let Some(latency) = source.non_empty("latency_s") {
        output.push_str(&format!("  Latency: {}s\n", display_value(latency)));
    }
    if let Some(user) = source.non_empty("user_email") {
        output.push_str(&format!("  User: {}\n", display_value(user)));
    }

    output.push('\n');
    output
}

fn format_full(position: usize, hit: &SearchHit) -> Result<String> {
    let rule = "=".repeat(SEPARATOR_WIDTH);
    let body = hit
        .source
        .to_pretty_json()
        .with_context(|| format!("Failed to encode log #{position}"))?;

    Ok(format!(
        "{rule}\nLog #{position} (Index: {})\n{rule}\n{body}\n\n",
        hit.index
    ))
}

/// Display a field, falling back to `default` when missing or null.
fn field_or(source: &LogDocument, key: &str, default: &str) -> String {
    match source.get(key) {
        None | Some(serde_json::Value::Null) => default.to_string(),
        Some(value) => display_value(value),
    }
}
