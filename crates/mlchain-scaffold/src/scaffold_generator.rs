//! Scaffold generator
//!
//! Drives one generation request: validates the plugin name, builds the
//! binding context, resolves the catalog, then renders and writes every
//! resource in catalog order. Only an invalid name or an unsupported
//! `(category, language)` pair fails the request; everything that goes
//! wrong for a single file is recorded in the [`GenerationResult`].

use std::{
    path::{Component, Path, PathBuf},
    sync::Arc,
};

use tracing::{debug, info, warn};

use crate::{
    catalog::{CompiledResource, TemplateCatalog},
    config::ScaffoldConfig,
    conflict_detector::ConflictDetector,
    error::{InvalidIdentifierError, Result},
    models::{
        FailedFile, FailureKind, GenerationResult, PluginSpec, RenderedFile, SkipReason,
        SkippedFile,
    },
    output_writer::{OutputWriter, OutputWriterConfig, WriteOutcome},
    templates::{BindingContext, TemplateRenderer},
};

/// Longest accepted plugin name
pub const MAX_NAME_LEN: usize = 128;

/// Check that a plugin name can seed every derived identifier
///
/// Names may contain ASCII letters, digits, `_` and `-`, and must contain at
/// least one letter or digit.
pub fn validate_plugin_name(name: &str) -> std::result::Result<(), InvalidIdentifierError> {
    if name.trim().is_empty() {
        return Err(InvalidIdentifierError::new(name, "plugin name is empty"));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(InvalidIdentifierError::new(
            name,
            format!("plugin name is longer than {} characters", MAX_NAME_LEN),
        ));
    }
    if let Some(c) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-'))
    {
        return Err(InvalidIdentifierError::new(
            name,
            format!("character '{}' is not allowed; use letters, digits, '_' or '-'", c),
        ));
    }
    if !name.chars().any(|c| c.is_ascii_alphanumeric()) {
        return Err(InvalidIdentifierError::new(
            name,
            "plugin name contains only separators",
        ));
    }
    Ok(())
}

/// Generates plugin scaffolds from a shared template catalog
///
/// The generator holds no per-request state, so one instance can serve
/// concurrent requests against distinct destination roots.
#[derive(Debug, Clone)]
pub struct ScaffoldGenerator {
    catalog: Arc<TemplateCatalog>,
    renderer: TemplateRenderer,
    writer: OutputWriter,
    config: ScaffoldConfig,
}

impl ScaffoldGenerator {
    /// Create a generator with default configuration
    pub fn new(catalog: Arc<TemplateCatalog>) -> Self {
        Self::with_config(catalog, &ScaffoldConfig::default())
    }

    /// Create a generator with the given configuration
    pub fn with_config(catalog: Arc<TemplateCatalog>, config: &ScaffoldConfig) -> Self {
        Self {
            catalog,
            renderer: TemplateRenderer::new(),
            writer: OutputWriter::with_config(OutputWriterConfig {
                dry_run: config.dry_run,
            }),
            config: config.clone(),
        }
    }

    /// Switch dry-run mode on or off
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.writer = OutputWriter::with_config(OutputWriterConfig { dry_run });
        self
    }

    /// Whether files are only rendered, never written
    pub fn is_dry_run(&self) -> bool {
        self.writer.is_dry_run()
    }

    /// The catalog this generator reads from
    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    /// Generate the scaffold for `spec` under `root`
    ///
    /// # Errors
    /// * [`ScaffoldError::InvalidIdentifier`](crate::ScaffoldError::InvalidIdentifier)
    ///   before any catalog work
    /// * [`ScaffoldError::UnsupportedCombination`](crate::ScaffoldError::UnsupportedCombination)
    ///   before any write
    pub fn generate(&self, spec: &PluginSpec, root: &Path) -> Result<GenerationResult> {
        validate_plugin_name(&spec.name)?;
        let ctx = self.binding_context(spec)?;
        let resources = self.catalog.resolve(spec.category, &spec.language)?;

        info!(
            name = %spec.name,
            category = %spec.category,
            language = %spec.language,
            root = %root.display(),
            resources = resources.len(),
            dry_run = self.writer.is_dry_run(),
            "Generating plugin scaffold"
        );

        let mut detector = ConflictDetector::new(root);
        let mut result = GenerationResult {
            dry_run: self.writer.is_dry_run(),
            ..GenerationResult::default()
        };

        for resource in resources {
            let file = match self.render_resource(resource, &ctx) {
                Ok(file) => file,
                Err(failed) => {
                    warn!(path = %failed.path.display(), kind = ?failed.kind, "{}", failed.message);
                    result.failed.push(failed);
                    continue;
                }
            };

            if let Some(reason) = detector.check(&file.path) {
                warn!(path = %file.path.display(), "Skipping file: {}", reason);
                result.skipped.push(SkippedFile {
                    path: file.path,
                    reason,
                });
                continue;
            }

            match self.writer.write(root, &file) {
                Ok(WriteOutcome::Written) | Ok(WriteOutcome::DryRun) => {
                    debug!(path = %file.path.display(), "Rendered file");
                    result.written_files.push(file.path);
                }
                Ok(WriteOutcome::AlreadyExists) => {
                    warn!(path = %file.path.display(), "File appeared before it could be written");
                    result.skipped.push(SkippedFile {
                        path: file.path,
                        reason: SkipReason::AlreadyExists,
                    });
                }
                Err(e) => {
                    warn!(path = %file.path.display(), error = %e, "Failed to write file");
                    result.failed.push(FailedFile {
                        path: file.path,
                        kind: FailureKind::Io,
                        message: e.to_string(),
                    });
                }
            }
        }

        info!(
            written = result.written_files.len(),
            skipped = result.skipped.len(),
            failed = result.failed.len(),
            "Generation finished"
        );
        Ok(result)
    }

    fn binding_context(&self, spec: &PluginSpec) -> Result<BindingContext> {
        let description = spec
            .description
            .clone()
            .unwrap_or_else(|| format!("An mlchain {} plugin", spec.category));

        Ok(BindingContext::from_name(&spec.name)?
            .with_value("author", self.config.author_or_default(spec.author.as_deref()))
            .with_value("description", description)
            .with_value("category", spec.category.as_str())
            .with_value("language", spec.language.as_str())
            .with_value("version", self.config.manifest.version.as_str())
            .with_value("memory", self.config.manifest.memory.to_string()))
    }

    fn render_resource(
        &self,
        resource: &CompiledResource,
        ctx: &BindingContext,
    ) -> std::result::Result<RenderedFile, FailedFile> {
        let rendered_path = self
            .renderer
            .render_parsed(resource.path(), ctx)
            .map_err(|e| FailedFile {
                path: PathBuf::from(resource.path_template()),
                kind: FailureKind::Render,
                message: e.to_string(),
            })?;

        let path = relative_output_path(&rendered_path).ok_or_else(|| FailedFile {
            path: PathBuf::from(&rendered_path),
            kind: FailureKind::InvalidPath,
            message: format!(
                "rendered path '{}' must be relative and stay inside the destination",
                rendered_path
            ),
        })?;

        let content = self
            .renderer
            .render_parsed(resource.body(), ctx)
            .map_err(|e| FailedFile {
                path: path.clone(),
                kind: FailureKind::Render,
                message: e.to_string(),
            })?;

        Ok(RenderedFile {
            path,
            content: content.into_bytes(),
        })
    }
}

/// Normalize a rendered path, rejecting empty, absolute and escaping paths
fn relative_output_path(rendered: &str) -> Option<PathBuf> {
    if rendered.trim().is_empty() {
        return None;
    }

    let mut path = PathBuf::new();
    for component in Path::new(rendered).components() {
        match component {
            Component::Normal(part) => path.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    if path.as_os_str().is_empty() {
        None
    } else {
        Some(path)
    }
}
