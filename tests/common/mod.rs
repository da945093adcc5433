// Shared helpers for integration tests.
//
// Provides a pair of temporary source/destination directories and a fluent
// builder so each integration test can lay out a dotfiles tree without
// repeating filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use dotgo::config::LinkConfig;
use dotgo::logging::Log;

/// An isolated source and destination pair backed by [`tempfile::TempDir`].
///
/// Both directories are deleted when dropped.
pub struct IntegrationTestContext {
    /// Directory the dotfiles are read from.
    pub source: tempfile::TempDir,
    /// Directory the links are written to.
    pub dest: tempfile::TempDir,
}

impl IntegrationTestContext {
    /// Create a context with empty source and destination directories.
    pub fn new() -> Self {
        Self {
            source: tempfile::tempdir().expect("create source dir"),
            dest: tempfile::tempdir().expect("create dest dir"),
        }
    }

    /// Path to the source directory.
    pub fn source_path(&self) -> &Path {
        self.source.path()
    }

    /// Path to the destination directory.
    pub fn dest_path(&self) -> &Path {
        self.dest.path()
    }

    /// A [`LinkConfig`] pointing at this context's directories.
    pub fn config(&self) -> LinkConfig {
        LinkConfig::new(self.source_path(), self.dest_path())
    }

    /// Where a link for `name` would be created.
    pub fn dest_entry(&self, name: &str) -> PathBuf {
        self.dest_path().join(name)
    }
}

/// Fluent builder for [`IntegrationTestContext`].
pub struct TestContextBuilder {
    ctx: IntegrationTestContext,
}

impl TestContextBuilder {
    /// Start from empty directories.
    pub fn new() -> Self {
        Self {
            ctx: IntegrationTestContext::new(),
        }
    }

    /// Add a regular file to the source directory.
    pub fn with_file(self, name: &str) -> Self {
        std::fs::write(self.ctx.source_path().join(name), name).expect("write source file");
        self
    }

    /// Add a directory (holding one file) to the source directory.
    pub fn with_dir(self, name: &str) -> Self {
        let dir = self.ctx.source_path().join(name);
        std::fs::create_dir_all(&dir).expect("create source dir");
        std::fs::write(dir.join("nested"), "").expect("write nested file");
        self
    }

    /// Pre-create a regular file in the destination directory.
    pub fn with_existing_dest(self, name: &str) -> Self {
        std::fs::write(self.ctx.dest_path().join(name), "existing").expect("write dest file");
        self
    }

    /// Pre-create a symlink in the destination that points nowhere.
    #[cfg(unix)]
    pub fn with_dangling_dest(self, name: &str) -> Self {
        std::os::unix::fs::symlink(
            self.ctx.dest_path().join("gone"),
            self.ctx.dest_path().join(name),
        )
        .expect("create dangling symlink");
        self
    }

    /// Finish building.
    pub fn build(self) -> IntegrationTestContext {
        self.ctx
    }
}

/// A [`Log`] that keeps every line as `"<level>: <message>"`.
#[derive(Debug, Default)]
pub struct CapturingLog {
    lines: Mutex<Vec<String>>,
}

impl CapturingLog {
    /// A shared, empty capture.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Captured lines in order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("log lock").clone()
    }

    /// Whether any line at `level` contains `needle`.
    pub fn contains(&self, level: &str, needle: &str) -> bool {
        let prefix = format!("{level}: ");
        self.lines()
            .iter()
            .any(|l| l.starts_with(&prefix) && l.contains(needle))
    }

    fn push(&self, level: &str, msg: &str) {
        self.lines
            .lock()
            .expect("log lock")
            .push(format!("{level}: {msg}"));
    }
}

impl Log for CapturingLog {
    fn info(&self, msg: &str) {
        self.push("info", msg);
    }

    fn debug(&self, msg: &str) {
        self.push("debug", msg);
    }

    fn warn(&self, msg: &str) {
        self.push("warn", msg);
    }

    fn error(&self, msg: &str) {
        self.push("error", msg);
    }
}
