//! Custom index template formatter.

use es_client::IndexTemplate;

/// Format the already-filtered custom templates.
pub fn format_templates(templates: &[IndexTemplate]) -> String {
    if templates.is_empty() {
        return "📋 No custom templates found (no fastapi-* templates)\n".to_string();
    }

    let mut output = format!("📋 Found {} custom template(s):\n\n", templates.len());
    for template in templates {
        output.push_str(&format!("  • {}\n", template.name));
        output.push_str(&format!("    Pattern: {}\n", template.patterns_display()));
        output.push_str(&format!("    Priority: {}\n", template.priority()));
        output.push('\n');
    }
    output
}
