//! Testing utilities for client tests.
//!
//! Available when running tests or when the `test-utils` feature is enabled.

use std::path::{Path, PathBuf};

fn fixture_path(fixture_path: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(fixture_path)
}

/// Load a JSON fixture file from the fixtures directory.
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path_str: &str) -> serde_json::Value {
    let content = load_text_fixture(fixture_path_str);
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// Load a fixture file verbatim (for plain-text cat API responses).
///
/// # Panics
/// - If the fixture file cannot be read
pub fn load_text_fixture(fixture_path_str: &str) -> String {
    let full_path = fixture_path(fixture_path_str);
    std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()))
}
