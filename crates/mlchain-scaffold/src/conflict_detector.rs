//! Conflict detection for scaffolded files
//!
//! Detects output paths that already exist under the destination root or
//! were already claimed earlier in the same request. The on-disk check is a
//! point-in-time check; the output writer's create-new semantics cover the
//! window between check and write.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use crate::models::SkipReason;

/// Tracks the output paths of one generation request
#[derive(Debug)]
pub struct ConflictDetector {
    root: PathBuf,
    claimed: HashSet<PathBuf>,
}

impl ConflictDetector {
    /// Create a detector for files written under `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            claimed: HashSet::new(),
        }
    }

    /// Check a relative output path and claim it when free
    ///
    /// # Returns
    /// `None` when the path may be written, or the reason it must be skipped
    pub fn check(&mut self, relative: &Path) -> Option<SkipReason> {
        if !self.claimed.insert(relative.to_path_buf()) {
            return Some(SkipReason::AlreadyExists);
        }

        // symlink_metadata so that a dangling symlink still counts as existing
        if self.root.join(relative).symlink_metadata().is_ok() {
            return Some(SkipReason::AlreadyExists);
        }

        None
    }

    /// Whether `relative` was claimed earlier in this request
    pub fn is_claimed(&self, relative: &Path) -> bool {
        self.claimed.contains(relative)
    }
}
