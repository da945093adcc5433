//! Link the immediate entries of one directory into another.
use std::collections::HashSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::classify::{Classification, classify};
use super::{EntryOutcome, LinkAbort, LinkReport, Linker};
use crate::config::LinkConfig;
use crate::error::LinkError;
use crate::logging::Log;
use crate::operations::{DirEntry, FileSystemOps, SystemFileSystemOps};
use crate::resources::{ResourceChange, ResourceState};
use crate::resources::symlink::SymlinkResource;

/// Links every eligible entry of `source` into `dest`.
///
/// Both directories are made absolute at construction. The operation is
/// single-level: with `recursive` set, directory entries are classified like
/// files (so a dot-directory is linked as a whole) but never descended into.
pub struct DirOperation {
    source: PathBuf,
    dest: PathBuf,
    whitelist: HashSet<OsString>,
    recursive: bool,
    fs_ops: Arc<dyn FileSystemOps>,
    log: Arc<dyn Log>,
}

impl std::fmt::Debug for DirOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirOperation")
            .field("source", &self.source)
            .field("dest", &self.dest)
            .field("whitelist", &self.whitelist)
            .field("recursive", &self.recursive)
            .field("fs_ops", &self.fs_ops)
            .field("log", &"<dyn Log>")
            .finish()
    }
}

impl DirOperation {
    /// Build an operation on the real filesystem.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::PathResolution`] if either directory cannot be
    /// made absolute.
    pub fn new(config: &LinkConfig, log: Arc<dyn Log>) -> Result<Self, LinkError> {
        Self::with_fs_ops(Arc::new(SystemFileSystemOps), config, log)
    }

    /// Build an operation on an injected filesystem.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::PathResolution`] if either directory cannot be
    /// made absolute.
    pub fn with_fs_ops(
        fs_ops: Arc<dyn FileSystemOps>,
        config: &LinkConfig,
        log: Arc<dyn Log>,
    ) -> Result<Self, LinkError> {
        let source = resolve(fs_ops.as_ref(), &config.source)?;
        let dest = resolve(fs_ops.as_ref(), &config.dest)?;
        let whitelist = config.whitelist.iter().map(OsString::from).collect();

        Ok(Self {
            source,
            dest,
            whitelist,
            recursive: config.recursive,
            fs_ops,
            log,
        })
    }

    /// Absolute source directory.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Absolute destination directory.
    #[must_use]
    pub fn dest(&self) -> &Path {
        &self.dest
    }

    /// Deduplicated whitelist.
    #[must_use]
    pub const fn whitelist(&self) -> &HashSet<OsString> {
        &self.whitelist
    }

    /// Whether directory entries are linked rather than skipped.
    #[must_use]
    pub const fn recursive(&self) -> bool {
        self.recursive
    }

    /// Process one entry. Every per-entry problem comes back as an `Err`;
    /// the caller decides with [`LinkError::is_fatal`] whether it stops the run.
    fn link_entry(&self, entry: &DirEntry) -> Result<EntryOutcome, LinkError> {
        let name = entry.name.as_os_str();
        let classification = classify(name, entry.is_dir, self.recursive, &self.whitelist);

        match classification {
            Classification::Blacklisted => {
                self.log
                    .warn(&format!("file '{}' is blacklisted", name.display()));
                return Ok(EntryOutcome::Blacklisted);
            }
            Classification::Directory => {
                self.log.info(&format!(
                    "entry is a dir {} - skipping...",
                    name.display()
                ));
                return Ok(EntryOutcome::Directory);
            }
            Classification::NotADotfile | Classification::Eligible => {}
        }

        let resource = SymlinkResource::new(self.source.join(name), self.dest.join(name));

        if resource.current_state(self.fs_ops.as_ref()) == ResourceState::Occupied {
            return Err(LinkError::AlreadyExists { name: name.into() });
        }

        if classification == Classification::NotADotfile {
            return Err(LinkError::InvalidDotfile { name: name.into() });
        }

        match resource.apply(self.fs_ops.as_ref()) {
            Ok(ResourceChange::Applied) => {
                self.log.debug(&format!("linked {}", resource.description()));
                Ok(EntryOutcome::Linked)
            }
            Ok(ResourceChange::AlreadyExists) => {
                Err(LinkError::AlreadyExists { name: name.into() })
            }
            Err(source) => Err(LinkError::LinkCreation {
                name: name.into(),
                source,
            }),
        }
    }
}

impl Linker for DirOperation {
    fn description(&self) -> String {
        format!("{} <- {}", self.dest.display(), self.source.display())
    }

    fn link(&self) -> Result<LinkReport, LinkAbort> {
        let entries = self
            .fs_ops
            .read_dir(&self.source)
            .map_err(|source| LinkAbort {
                report: LinkReport::default(),
                error: LinkError::DirectoryRead {
                    path: self.source.clone(),
                    source,
                },
            })?;

        let mut report = LinkReport::new(entries.len());
        if self.recursive {
            self.log.debug(
                "recursive: directories are linked as a whole, subdirectories are not descended",
            );
        }

        for entry in &entries {
            let error = match self.link_entry(entry) {
                Ok(outcome) => {
                    report.record(entry.name.clone(), outcome);
                    continue;
                }
                Err(error) => error,
            };
            let name = error.entry_name().unwrap_or(&entry.name);

            if error.is_fatal() {
                self.log
                    .error(&format!("file '{}' link error: {error}", name.display()));
                return Err(LinkAbort { report, error });
            }

            self.log.warn(&error.to_string());
            if let Some(outcome) = error.skipped_outcome() {
                report.record(name.clone(), outcome);
            }
        }

        Ok(report)
    }
}

fn resolve(fs_ops: &dyn FileSystemOps, path: &Path) -> Result<PathBuf, LinkError> {
    fs_ops
        .absolute(path)
        .map_err(|source| LinkError::PathResolution {
            path: path.to_path_buf(),
            source,
        })
}
