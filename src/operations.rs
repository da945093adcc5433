//! Filesystem operation abstractions for dependency injection.
//!
//! Provides the [`FileSystemOps`] trait so that the link engine can be
//! unit-tested without touching the real filesystem.  Production code uses
//! [`SystemFileSystemOps`]; tests use `MockFileSystemOps`.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

/// One item yielded by listing a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// File name of the entry (no leading path).
    pub name: OsString,
    /// Whether the entry itself is a directory (symlinks are not followed).
    pub is_dir: bool,
}

impl DirEntry {
    /// Create an entry view.
    #[must_use]
    pub fn new(name: impl Into<OsString>, is_dir: bool) -> Self {
        Self {
            name: name.into(),
            is_dir,
        }
    }
}

/// Abstraction over the filesystem capabilities the link engine needs.
///
/// Implement this trait to swap in a mock during unit tests, keeping link
/// logic independent of real I/O.
pub trait FileSystemOps: Send + Sync + std::fmt::Debug {
    /// Returns the immediate entries of `path`, in listing order.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` does not exist or cannot be read as a directory.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>>;

    /// Resolve `path` to an absolute path without touching the filesystem.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` is empty or the working directory is unavailable.
    fn absolute(&self, path: &Path) -> io::Result<PathBuf>;

    /// Returns `true` if anything (including a dangling symlink) exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Create a symbolic link at `target` pointing to `source`.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error; an occupied `target` surfaces as
    /// [`io::ErrorKind::AlreadyExists`].
    fn symlink(&self, source: &Path, target: &Path) -> io::Result<()>;
}

/// Production [`FileSystemOps`] implementation that delegates to [`std::fs`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemFileSystemOps;

impl FileSystemOps for SystemFileSystemOps {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        std::fs::read_dir(path)?
            .map(|entry| {
                let entry = entry?;
                let is_dir = entry.file_type()?.is_dir();
                Ok(DirEntry::new(entry.file_name(), is_dir))
            })
            .collect()
    }

    fn absolute(&self, path: &Path) -> io::Result<PathBuf> {
        std::path::absolute(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.symlink_metadata().is_ok()
    }

    fn symlink(&self, source: &Path, target: &Path) -> io::Result<()> {
        #[cfg(unix)]
        {
            std::os::unix::fs::symlink(source, target)
        }

        #[cfg(windows)]
        {
            if source.is_dir() {
                std::os::windows::fs::symlink_dir(source, target)
            } else {
                std::os::windows::fs::symlink_file(source, target)
            }
        }
    }
}

/// Mock [`FileSystemOps`] for unit tests.
///
/// Pre-configure directory listings, occupied paths and injected failures
/// using the builder-style methods, then pass the mock to
/// `DirOperation::with_fs_ops`.
///
/// # Example
///
/// ```ignore
/// use dotgo::operations::{DirEntry, MockFileSystemOps};
///
/// let fs = MockFileSystemOps::new()
///     .with_dir_entries("/src", vec![DirEntry::new(".bashrc", false)])
///     .with_existing("/home/.bashrc");
/// ```
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockFileSystemOps {
    existing: Vec<PathBuf>,
    dirs: std::collections::HashMap<PathBuf, Vec<DirEntry>>,
    failures: std::collections::HashMap<PathBuf, io::ErrorKind>,
    created: std::sync::Mutex<Vec<(PathBuf, PathBuf)>>,
}

#[cfg(test)]
impl MockFileSystemOps {
    /// Create an empty mock with nothing configured.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `path` as occupied.
    #[must_use]
    pub fn with_existing(mut self, path: impl Into<PathBuf>) -> Self {
        let p = path.into();
        if !self.existing.contains(&p) {
            self.existing.push(p);
        }
        self
    }

    /// Set the entries returned by [`FileSystemOps::read_dir`] for `dir`.
    #[must_use]
    pub fn with_dir_entries(mut self, dir: impl Into<PathBuf>, entries: Vec<DirEntry>) -> Self {
        self.dirs.insert(dir.into(), entries);
        self
    }

    /// Make [`FileSystemOps::symlink`] fail with `kind` when creating `target`.
    #[must_use]
    pub fn with_symlink_failure(mut self, target: impl Into<PathBuf>, kind: io::ErrorKind) -> Self {
        self.failures.insert(target.into(), kind);
        self
    }

    /// Links created so far as `(source, target)` pairs, in creation order.
    #[allow(clippy::expect_used)]
    pub fn created(&self) -> Vec<(PathBuf, PathBuf)> {
        self.created
            .lock()
            .expect("mock created list poisoned")
            .clone()
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
impl FileSystemOps for MockFileSystemOps {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        self.dirs.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("mock: no entries configured for {}", path.display()),
            )
        })
    }

    fn absolute(&self, path: &Path) -> io::Result<PathBuf> {
        if path.as_os_str().is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "cannot make an empty path absolute",
            ));
        }
        Ok(Path::new("/").join(path))
    }

    fn exists(&self, path: &Path) -> bool {
        self.existing.iter().any(|p| p == path)
            || self
                .created
                .lock()
                .expect("mock created list poisoned")
                .iter()
                .any(|(_, t)| t == path)
    }

    fn symlink(&self, source: &Path, target: &Path) -> io::Result<()> {
        if let Some(kind) = self.failures.get(target) {
            return Err(io::Error::from(*kind));
        }
        if self.exists(target) {
            return Err(io::Error::from(io::ErrorKind::AlreadyExists));
        }
        self.created
            .lock()
            .expect("mock created list poisoned")
            .push((source.to_path_buf(), target.to_path_buf()));
        Ok(())
    }
}
