//! Catalog entries loaded from template directories
//!
//! A template directory is laid out as
//! `<dir>/<category>/<language>/templates.yaml`. The manifest lists the
//! resources of the entry in output order:
//!
//! ```yaml
//! resources:
//!   - path: "tools/{{ name | SnakeCase }}.py"
//!     source: tool.py
//!   - path: README.md
//!     body: "# {{ name }}"
//! ```
//!
//! `source` is read relative to the manifest; `body` is inline template text.

use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::{
    catalog::CatalogKey,
    error::{Result, ScaffoldError},
    models::{PluginCategory, TemplateResource},
};

/// File name of an entry manifest
pub const MANIFEST_FILE: &str = "templates.yaml";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EntryManifest {
    resources: Vec<ResourceDecl>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ResourceDecl {
    path: String,
    source: Option<PathBuf>,
    body: Option<String>,
}

/// Loads catalog entries from template directories
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogLoader;

impl CatalogLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self
    }

    /// Load every entry found under `dir`, sorted by category then language
    ///
    /// A missing directory yields no entries. Directories that do not name a
    /// category, or language directories without a manifest, are skipped.
    pub fn load_directory(&self, dir: &Path) -> Result<Vec<(CatalogKey, Vec<TemplateResource>)>> {
        if !dir.exists() {
            debug!(dir = %dir.display(), "Template directory does not exist");
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();

        for category_dir in sorted_subdirs(dir)? {
            let Some(category) = dir_name(&category_dir).and_then(|n| n.parse::<PluginCategory>().ok())
            else {
                warn!(dir = %category_dir.display(), "Skipping directory that is not a plugin category");
                continue;
            };

            for language_dir in sorted_subdirs(&category_dir)? {
                let manifest = language_dir.join(MANIFEST_FILE);
                if !manifest.is_file() {
                    warn!(dir = %language_dir.display(), "Skipping language directory without {}", MANIFEST_FILE);
                    continue;
                }

                let Some(language) = dir_name(&language_dir) else {
                    continue;
                };

                let resources = self.load_entry(&manifest)?;
                entries.push((CatalogKey::new(category, language), resources));
            }
        }

        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(entries)
    }

    /// Load the resources listed in one entry manifest
    pub fn load_entry(&self, manifest_path: &Path) -> Result<Vec<TemplateResource>> {
        let content = fs::read_to_string(manifest_path)?;
        let manifest: EntryManifest =
            serde_yaml::from_str(&content).map_err(|e| catalog_error(manifest_path, e.to_string()))?;

        let base = manifest_path.parent().unwrap_or_else(|| Path::new("."));

        manifest
            .resources
            .into_iter()
            .map(|decl| {
                let body = match (decl.source, decl.body) {
                    (Some(source), None) => self.read_source(manifest_path, base, &source)?,
                    (None, Some(body)) => body,
                    _ => {
                        return Err(catalog_error(
                            manifest_path,
                            format!("resource '{}' needs exactly one of 'source' or 'body'", decl.path),
                        ))
                    }
                };
                Ok(TemplateResource::new(decl.path, body))
            })
            .collect()
    }

    fn read_source(&self, manifest_path: &Path, base: &Path, source: &Path) -> Result<String> {
        let contained = source
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if !contained {
            return Err(catalog_error(
                manifest_path,
                format!("source '{}' must stay inside the entry directory", source.display()),
            ));
        }

        fs::read_to_string(base.join(source)).map_err(|e| {
            catalog_error(
                manifest_path,
                format!("failed to read source '{}': {}", source.display(), e),
            )
        })
    }
}

fn catalog_error(path: &Path, message: String) -> ScaffoldError {
    ScaffoldError::Catalog {
        path: path.to_path_buf(),
        message,
    }
}

fn dir_name(path: &Path) -> Option<String> {
    path.file_name().and_then(|n| n.to_str()).map(str::to_string)
}

fn sorted_subdirs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}
