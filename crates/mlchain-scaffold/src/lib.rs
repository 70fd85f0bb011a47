#![warn(missing_docs)]

//! Scaffolding engine for mlchain plugins
//!
//! Generates starter projects for tool, tool provider, model provider and
//! agent strategy plugins. A [`TemplateCatalog`] maps each
//! `(category, language)` pair to an ordered set of templates; the
//! [`ScaffoldGenerator`] renders them against bindings derived from the
//! plugin name and writes the results without ever overwriting a file.

pub mod case;
pub mod catalog;
pub mod config;
pub mod conflict_detector;
pub mod error;
pub mod models;
pub mod output_writer;
pub mod scaffold_generator;
pub mod templates;

// Re-export public API
pub use case::{
    to_camel_case, to_kebab_case, to_pascal_case, to_screaming_snake_case, to_snake_case,
    CaseStyle,
};
pub use catalog::{CatalogBuilder, CatalogKey, CatalogLoader, CompiledResource, TemplateCatalog};
pub use config::{ManifestDefaults, ScaffoldConfig};
pub use conflict_detector::ConflictDetector;
pub use error::{InvalidIdentifierError, Result, ScaffoldError, TemplateError};
pub use models::{
    FailedFile, FailureKind, GenerationResult, PluginCategory, PluginSpec, RenderedFile,
    SkipReason, SkippedFile, TemplateResource,
};
pub use output_writer::{OutputWriter, OutputWriterConfig, WriteOutcome};
pub use scaffold_generator::{validate_plugin_name, ScaffoldGenerator};
pub use templates::{
    BindingContext, DerivationKey, Expression, ParsedTemplate, TemplateElement, TemplateParser,
    TemplateRenderer, Transform,
};
