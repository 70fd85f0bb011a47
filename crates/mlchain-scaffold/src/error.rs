//! Error types for plugin scaffolding

use std::path::PathBuf;

use thiserror::Error;

use crate::models::PluginCategory;

/// Result type for scaffolding operations
pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// An identifier that cannot be tokenized into words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid identifier '{input}': {reason}")]
pub struct InvalidIdentifierError {
    /// The rejected input
    pub input: String,
    /// Why it was rejected
    pub reason: String,
}

impl InvalidIdentifierError {
    /// Create a new identifier error
    pub fn new(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Errors raised while rendering a single template
///
/// These never abort a generation run; the generator records them against
/// the file whose template produced them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// Placeholder key not present in the binding context
    #[error("Undefined placeholder: {0}")]
    UndefinedPlaceholder(String),

    /// Transform name outside the built-in transform set
    #[error("Undefined transform: {0}")]
    UndefinedTransform(String),

    /// A transform rejected its input
    #[error("Transform {transform} failed: {source}")]
    TransformFailed {
        /// Name of the failing transform
        transform: String,
        /// Underlying case conversion error
        #[source]
        source: InvalidIdentifierError,
    },
}

/// Errors that abort a generation request or catalog load
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Plugin name failed identifier validation
    #[error(transparent)]
    InvalidIdentifier(#[from] InvalidIdentifierError),

    /// No templates are registered for the requested pair
    #[error("No templates registered for category '{category}' and language '{language}'")]
    UnsupportedCombination {
        /// Requested category
        category: PluginCategory,
        /// Requested language
        language: String,
    },

    /// Catalog overlay could not be loaded
    #[error("Catalog error in {path}: {message}")]
    Catalog {
        /// Offending file or directory
        path: PathBuf,
        /// What went wrong
        message: String,
    },

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for ScaffoldError {
    fn from(err: config::ConfigError) -> Self {
        ScaffoldError::Config(err.to_string())
    }
}
