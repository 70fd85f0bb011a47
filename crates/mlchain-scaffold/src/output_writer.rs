//! Output writer for scaffolded files
//!
//! Writes rendered files under a destination root. Files are created with
//! create-new semantics so an existing file is never replaced, even when it
//! appeared after the conflict check.

use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::Path,
};

use tracing::{debug, warn};

use crate::models::RenderedFile;

/// Configuration for output writing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputWriterConfig {
    /// Whether to run in dry-run mode (preview only)
    pub dry_run: bool,
}

/// What happened to a file handed to the writer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// File was created
    Written,
    /// Another writer created the path first
    AlreadyExists,
    /// Dry-run mode; nothing touched
    DryRun,
}

/// Writes rendered files to disk without overwriting
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputWriter {
    config: OutputWriterConfig,
}

impl OutputWriter {
    /// Create a new output writer with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new output writer with custom configuration
    pub fn with_config(config: OutputWriterConfig) -> Self {
        Self { config }
    }

    /// Whether the writer is in dry-run mode
    pub fn is_dry_run(&self) -> bool {
        self.config.dry_run
    }

    /// Write one rendered file under `root`
    ///
    /// Parent directories are created as needed.
    pub fn write(&self, root: &Path, file: &RenderedFile) -> io::Result<WriteOutcome> {
        if self.config.dry_run {
            return Ok(WriteOutcome::DryRun);
        }

        let path = root.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let handle = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(handle) => handle,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                return Ok(WriteOutcome::AlreadyExists);
            }
            Err(e) => return Err(e),
        };

        finish_or_remove(&path, handle, &file.content)?;

        debug!(path = %path.display(), bytes = file.content.len(), "Wrote file");
        Ok(WriteOutcome::Written)
    }
}

/// Write `content` through `handle`; on failure the file at `path` is removed
fn finish_or_remove<W: Write>(path: &Path, mut handle: W, content: &[u8]) -> io::Result<()> {
    let written = handle.write_all(content).and_then(|()| handle.flush());
    drop(handle);

    if let Err(e) = written {
        if let Err(cleanup) = fs::remove_file(path) {
            warn!(path = %path.display(), error = %cleanup, "Failed to remove partial file");
        }
        return Err(e);
    }
    Ok(())
}
