// List registered template combinations

use anyhow::{Context, Result};
use mlchain_scaffold::{CatalogKey, PluginCategory, TemplateCatalog};

use crate::output::OutputStyle;

#[derive(Debug)]
struct CategoryLanguages<'a> {
    category: PluginCategory,
    languages: Vec<&'a str>,
}

/// Lists the `(category, language)` pairs a catalog supports
pub struct ListCommand {
    json: bool,
}

impl ListCommand {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    /// Render the catalog listing
    pub fn execute(&self, catalog: &TemplateCatalog, style: &OutputStyle) -> Result<String> {
        if self.json {
            let keys: Vec<&CatalogKey> = catalog.combinations().collect();
            return serde_json::to_string_pretty(&keys).context("failed to serialize catalog");
        }

        let groups: Vec<CategoryLanguages> = PluginCategory::ALL
            .into_iter()
            .map(|category| CategoryLanguages {
                category,
                languages: catalog.languages(category),
            })
            .collect();

        let mut lines = vec![style.header("Available templates")];
        for group in groups {
            let languages = if group.languages.is_empty() {
                "(none)".to_string()
            } else {
                group.languages.join(", ")
            };
            lines.push(format!("  {:<16} {}", group.category.as_str(), languages));
        }
        Ok(lines.join("\n"))
    }
}
