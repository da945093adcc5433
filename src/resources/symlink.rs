//! Symlink resource.
use std::io;
use std::path::PathBuf;

use super::{ResourceChange, ResourceState};
use crate::operations::FileSystemOps;

/// A single symlink to be created at `target`, pointing at `source`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymlinkResource {
    /// The source file/directory (what the symlink points to).
    pub source: PathBuf,
    /// The target path (where the symlink will be created).
    pub target: PathBuf,
}

impl SymlinkResource {
    /// Create a new symlink resource.
    #[must_use]
    pub const fn new(source: PathBuf, target: PathBuf) -> Self {
        Self { source, target }
    }

    /// Human-readable `target -> source` description.
    #[must_use]
    pub fn description(&self) -> String {
        format!("{} -> {}", self.target.display(), self.source.display())
    }

    /// Whether the target path is free.
    #[must_use]
    pub fn current_state(&self, fs: &dyn FileSystemOps) -> ResourceState {
        if fs.exists(&self.target) {
            ResourceState::Occupied
        } else {
            ResourceState::Missing
        }
    }

    /// Create the link. Never replaces an existing target.
    ///
    /// # Errors
    ///
    /// Returns the I/O error from link creation for anything other than an
    /// occupied target, which is reported as [`ResourceChange::AlreadyExists`].
    pub fn apply(&self, fs: &dyn FileSystemOps) -> io::Result<ResourceChange> {
        if self.current_state(fs) == ResourceState::Occupied {
            return Ok(ResourceChange::AlreadyExists);
        }
        match fs.symlink(&self.source, &self.target) {
            Ok(()) => Ok(ResourceChange::Applied),
            // lost a race with something else creating the target
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(ResourceChange::AlreadyExists),
            Err(e) => Err(e),
        }
    }
}
