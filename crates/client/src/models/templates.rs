//! Index template models.

use serde::Deserialize;

/// Response of `GET /_index_template`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IndexTemplateListResponse {
    #[serde(default)]
    pub index_templates: Vec<IndexTemplate>,
}

/// A composable index template.
#[derive(Debug, Clone, Deserialize)]
pub struct IndexTemplate {
    pub name: String,
    pub index_template: IndexTemplateSpec,
}

/// Body of an index template. Settings and mappings are not modelled.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IndexTemplateSpec {
    #[serde(default)]
    pub index_patterns: Vec<String>,
    #[serde(default)]
    pub priority: Option<i64>,
}

impl IndexTemplate {
    /// Template priority, `0` when unset.
    pub fn priority(&self) -> i64 {
        self.index_template.priority.unwrap_or(0)
    }

    /// Index patterns joined with `", "`.
    pub fn patterns_display(&self) -> String {
        self.index_template.index_patterns.join(", ")
    }
}

impl IndexTemplateListResponse {
    /// Templates whose name contains `needle`, in server order.
    ///
    /// The match is a case-sensitive substring test.
    pub fn named_containing(self, needle: &str) -> Vec<IndexTemplate> {
        self.index_templates
            .into_iter()
            .filter(|t| t.name.contains(needle))
            .collect()
    }
}
