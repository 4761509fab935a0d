//! Cat indices formatter.

use es_client::CatIndices;

const RULE_WIDTH: usize = 100;

/// Message for a pattern that matched no indices.
pub fn format_no_indices(pattern: &str) -> String {
    format!("📋 No indices found matching '{}'\n", pattern)
}

/// Format the index table, or the "no indices" message when there is none.
pub fn format_indices(pattern: &str, table: Option<&CatIndices>) -> String {
    let Some(table) = table else {
        return format_no_indices(pattern);
    };

    let mut output = format!("📋 Indices matching '{}':\n\n", pattern);
    output.push_str(&table.header);
    output.push('\n');
    output.push_str(&"-".repeat(RULE_WIDTH));
    output.push('\n');
    for row in &table.rows {
        output.push_str(row);
        output.push('\n');
    }
    output.push('\n');
    output
}
