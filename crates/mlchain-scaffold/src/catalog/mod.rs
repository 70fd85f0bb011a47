//! Template catalog
//!
//! Maps a `(category, language)` pair to the ordered set of template
//! resources that make up a scaffold. Lookups are exact; a language with no
//! entry for a category is an error, never a fallback to another language.
//! Templates are parsed once when the catalog is built.

pub mod builtin;
pub mod loader;

use std::{collections::BTreeMap, fmt, path::PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::{
    error::{Result, ScaffoldError},
    models::{PluginCategory, TemplateResource},
    templates::{ParsedTemplate, TemplateParser},
};

pub use loader::CatalogLoader;

/// Key of a catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CatalogKey {
    /// Plugin category
    pub category: PluginCategory,
    /// Implementation language
    pub language: String,
}

impl CatalogKey {
    /// Create a new key
    pub fn new(category: PluginCategory, language: impl Into<String>) -> Self {
        Self {
            category,
            language: language.into(),
        }
    }
}

impl fmt::Display for CatalogKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.category, self.language)
    }
}

/// A template resource with its path and body parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledResource {
    source: TemplateResource,
    path: ParsedTemplate,
    body: ParsedTemplate,
}

impl CompiledResource {
    /// Parse a resource's path and body
    pub fn compile(source: TemplateResource) -> Self {
        let path = TemplateParser::parse(&source.path_template);
        let body = TemplateParser::parse(&source.body);
        Self { source, path, body }
    }

    /// The unparsed resource
    pub fn source(&self) -> &TemplateResource {
        &self.source
    }

    /// Output path template as written in the catalog
    pub fn path_template(&self) -> &str {
        &self.source.path_template
    }

    /// Parsed output path
    pub fn path(&self) -> &ParsedTemplate {
        &self.path
    }

    /// Parsed body
    pub fn body(&self) -> &ParsedTemplate {
        &self.body
    }
}

/// Immutable registry of scaffold templates
#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    entries: BTreeMap<CatalogKey, Vec<CompiledResource>>,
}

impl TemplateCatalog {
    /// Start building a catalog
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// Catalog of the templates bundled with the crate
    pub fn builtin() -> Self {
        builtin::register(CatalogBuilder::new()).build()
    }

    /// Bundled templates overlaid with the entries found in `template_dirs`
    ///
    /// Directories are applied in order; an entry replaces any earlier entry
    /// for the same pair.
    pub fn load(template_dirs: &[PathBuf]) -> Result<Self> {
        let mut builder = builtin::register(CatalogBuilder::new());
        let loader = CatalogLoader::new();

        for dir in template_dirs {
            for (key, resources) in loader.load_directory(dir)? {
                debug!(entry = %key, dir = %dir.display(), "Overriding catalog entry");
                builder = builder.register(key.category, key.language, resources);
            }
        }

        let catalog = builder.build();
        info!(entries = catalog.len(), "Template catalog loaded");
        Ok(catalog)
    }

    /// Resources for a category and language, in output order
    pub fn resolve(&self, category: PluginCategory, language: &str) -> Result<&[CompiledResource]> {
        self.entries
            .get(&CatalogKey::new(category, language))
            .map(Vec::as_slice)
            .ok_or_else(|| ScaffoldError::UnsupportedCombination {
                category,
                language: language.to_string(),
            })
    }

    /// Whether templates exist for the pair
    pub fn supports(&self, category: PluginCategory, language: &str) -> bool {
        self.entries.contains_key(&CatalogKey::new(category, language))
    }

    /// Every registered pair, sorted by category then language
    pub fn combinations(&self) -> impl Iterator<Item = &CatalogKey> {
        self.entries.keys()
    }

    /// Languages registered for a category
    pub fn languages(&self, category: PluginCategory) -> Vec<&str> {
        self.entries
            .keys()
            .filter(|key| key.category == category)
            .map(|key| key.language.as_str())
            .collect()
    }

    /// Number of registered pairs
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Collects catalog entries before they are parsed and frozen
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    entries: BTreeMap<CatalogKey, Vec<TemplateResource>>,
}

impl CatalogBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the resources for a pair, replacing any previous entry
    pub fn register(
        mut self,
        category: PluginCategory,
        language: impl Into<String>,
        resources: impl IntoIterator<Item = TemplateResource>,
    ) -> Self {
        self.entries.insert(
            CatalogKey::new(category, language),
            resources.into_iter().collect(),
        );
        self
    }

    /// Parse every template and freeze the catalog
    ///
    /// Pairs registered with no resources are dropped so that they resolve
    /// as unsupported.
    pub fn build(self) -> TemplateCatalog {
        let entries = self
            .entries
            .into_iter()
            .filter(|(_, resources)| !resources.is_empty())
            .map(|(key, resources)| {
                let compiled = resources.into_iter().map(CompiledResource::compile).collect();
                (key, compiled)
            })
            .collect();

        TemplateCatalog { entries }
    }
}
