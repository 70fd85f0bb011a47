//! Shared fixtures for the workspace end-to-end tests

use std::{fs, io, path::Path};

/// Write an overlay catalog entry under `templates_dir`
///
/// `manifest` is the content of the entry's `templates.yaml`.
pub fn write_overlay_entry(
    templates_dir: &Path,
    category: &str,
    language: &str,
    manifest: &str,
) -> io::Result<()> {
    let entry = templates_dir.join(category).join(language);
    fs::create_dir_all(&entry)?;
    fs::write(entry.join("templates.yaml"), manifest)
}
