//! Scaffolding configuration
//!
//! Configuration is layered: built-in defaults, then the configuration file,
//! then `MLCHAIN_SCAFFOLD_*` environment variables. Nested keys use a double
//! underscore, e.g. `MLCHAIN_SCAFFOLD_MANIFEST__MEMORY`.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, ScaffoldError};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "MLCHAIN_SCAFFOLD";

/// Author written to manifests when neither the request nor the
/// configuration names one
pub const FALLBACK_AUTHOR: &str = "mlchain";

/// Values written into generated plugin manifests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestDefaults {
    /// Initial plugin version
    pub version: String,
    /// Memory limit of the plugin runtime, in bytes
    pub memory: u64,
}

impl Default for ManifestDefaults {
    fn default() -> Self {
        Self {
            version: "0.0.1".to_string(),
            memory: 256 * 1024 * 1024,
        }
    }
}

/// Scaffolding configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    /// Log level for the command line tool
    pub log_level: String,
    /// Render without writing anything
    pub dry_run: bool,
    /// Template directories overlaid on the bundled catalog, in order
    pub template_dirs: Vec<PathBuf>,
    /// Author used when a request does not name one
    pub default_author: Option<String>,
    /// Manifest values
    pub manifest: ManifestDefaults,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            dry_run: false,
            template_dirs: Vec::new(),
            default_author: None,
            manifest: ManifestDefaults::default(),
        }
    }
}

impl ScaffoldConfig {
    /// Default configuration file location
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mlchain-scaffold")
            .join("config.toml")
    }

    /// Load configuration
    ///
    /// An explicit `path` must exist; the default location is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (file, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (Self::default_config_path(), false),
        };
        debug!(path = %file.display(), required, "Loading configuration");

        let config = Config::builder()
            .add_source(File::from(file).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let scaffold_config: ScaffoldConfig = config.try_deserialize()?;
        scaffold_config.validate()?;
        Ok(scaffold_config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.manifest.version.trim().is_empty() {
            return Err(ScaffoldError::Config(
                "manifest.version must not be empty".to_string(),
            ));
        }
        if self.manifest.memory == 0 {
            return Err(ScaffoldError::Config(
                "manifest.memory must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Author for a request, falling back to the configured default
    pub fn author_or_default<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        requested
            .or(self.default_author.as_deref())
            .unwrap_or(FALLBACK_AUTHOR)
    }
}
