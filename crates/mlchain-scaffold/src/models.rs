//! Core data models for plugin scaffolding

use std::{fmt, path::PathBuf, str::FromStr};

use serde::{Deserialize, Serialize};

/// Role a generated plugin implements on the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PluginCategory {
    /// A single tool plus the provider that hosts it
    Tool,
    /// A tool provider without any tools
    ToolProvider,
    /// A model provider
    ModelProvider,
    /// An agent strategy
    AgentStrategy,
}

impl PluginCategory {
    /// All categories, in display order
    pub const ALL: [PluginCategory; 4] = [
        PluginCategory::Tool,
        PluginCategory::ToolProvider,
        PluginCategory::ModelProvider,
        PluginCategory::AgentStrategy,
    ];

    /// Stable string key used in catalogs, manifests and the CLI
    pub fn as_str(&self) -> &'static str {
        match self {
            PluginCategory::Tool => "tool",
            PluginCategory::ToolProvider => "tool-provider",
            PluginCategory::ModelProvider => "model-provider",
            PluginCategory::AgentStrategy => "agent-strategy",
        }
    }
}

impl fmt::Display for PluginCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PluginCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PluginCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "unknown plugin category '{}', expected one of: tool, tool-provider, model-provider, agent-strategy",
                    s
                )
            })
    }
}

/// What the caller asks the generator to scaffold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginSpec {
    /// Plugin name, the seed for every derived identifier
    pub name: String,
    /// Plugin category
    pub category: PluginCategory,
    /// Implementation language key, matched exactly against the catalog
    pub language: String,
    /// Author written to the manifest
    pub author: Option<String>,
    /// Human readable description written to the manifest
    pub description: Option<String>,
}

impl PluginSpec {
    /// Create a spec with no profile information
    pub fn new(name: impl Into<String>, category: PluginCategory, language: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category,
            language: language.into(),
            author: None,
            description: None,
        }
    }

    /// Set the manifest author
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the manifest description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A file-shaped unit of a catalog entry, before parsing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateResource {
    /// Relative output path; may contain placeholders
    pub path_template: String,
    /// Template body
    pub body: String,
}

impl TemplateResource {
    /// Create a new template resource
    pub fn new(path_template: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            path_template: path_template.into(),
            body: body.into(),
        }
    }
}

/// A rendered file waiting to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Path relative to the destination root
    pub path: PathBuf,
    /// Bytes to write
    pub content: Vec<u8>,
}

/// Why a file was not written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// The path exists on disk or was already produced in this request
    AlreadyExists,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::AlreadyExists => f.write_str("already exists"),
        }
    }
}

/// A file that was skipped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedFile {
    /// Path relative to the destination root
    pub path: PathBuf,
    /// Why it was skipped
    pub reason: SkipReason,
}

/// Category of a per-file failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureKind {
    /// Path or body template failed to render
    Render,
    /// Rendered path is empty, absolute, or escapes the destination root
    InvalidPath,
    /// Writing the file failed
    Io,
}

/// A file that could not be produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedFile {
    /// Rendered path, or the path template when the path itself failed
    pub path: PathBuf,
    /// Failure category
    pub kind: FailureKind,
    /// Error message
    pub message: String,
}

/// Outcome of one generation request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Files written, relative to the destination root, in catalog order
    pub written_files: Vec<PathBuf>,
    /// Files skipped because of conflicts, in catalog order
    pub skipped: Vec<SkippedFile>,
    /// Files that failed to render or write, in catalog order
    pub failed: Vec<FailedFile>,
    /// Whether nothing was written to disk
    pub dry_run: bool,
}

impl GenerationResult {
    /// True when every resource was written
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty() && self.failed.is_empty()
    }

    /// True when at least one file failed
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    /// Total number of resources processed
    pub fn total(&self) -> usize {
        self.written_files.len() + self.skipped.len() + self.failed.len()
    }
}
