//! Domain-specific error types for the dotgo engine.
//!
//! Library code returns typed errors built with [`thiserror`]; the binary
//! converts them to [`anyhow::Error`] at the command boundary via `?`.
//!
//! # Error hierarchy
//!
//! ```text
//! DotgoError
//! ├── Config(ConfigError)  : settings file, flag resolution
//! ├── Link(LinkError)      : construction and per-entry link failures
//! └── Aborted(LinkAbort)   : fatal link failure with the partial report
//! ```

use std::ffi::OsString;
use std::path::PathBuf;

use thiserror::Error;

use crate::linker::{EntryOutcome, LinkAbort};

/// Top-level error type for the dotgo engine.
#[derive(Error, Debug)]
pub enum DotgoError {
    /// Configuration-related error (settings file, missing flags).
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The link operation could not be built or started.
    #[error("Link error: {0}")]
    Link(#[from] LinkError),

    /// The link operation stopped on a fatal error after processing some entries.
    #[error("Link aborted: {0}")]
    Aborted(#[from] LinkAbort),
}

/// Errors raised while building or running a link operation.
///
/// Each variant carries the offending path or entry name. Only
/// [`AlreadyExists`](Self::AlreadyExists) and
/// [`InvalidDotfile`](Self::InvalidDotfile) are absorbed by the link loop;
/// the rest are fatal (see [`LinkError::is_fatal`]).
#[derive(Error, Debug)]
pub enum LinkError {
    /// A source or destination directory could not be made absolute.
    #[error("cannot resolve path '{}': {source}", path.display())]
    PathResolution {
        /// The path as given by the caller.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The source directory could not be listed.
    #[error("cannot read directory {}: {source}", path.display())]
    DirectoryRead {
        /// Absolute source directory.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Something already occupies the destination path for this entry.
    #[error("{} already exists at destination", name.display())]
    AlreadyExists {
        /// Entry name.
        name: OsString,
    },

    /// The entry is neither dot-prefixed nor whitelisted.
    #[error("{} is not a valid dotfile", name.display())]
    InvalidDotfile {
        /// Entry name.
        name: OsString,
    },

    /// Creating the symbolic link failed for a reason other than an existing destination.
    #[error("{} failed symbolic link: {source}", name.display())]
    LinkCreation {
        /// Entry name.
        name: OsString,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

impl LinkError {
    /// Outcome to record when this error only skips its entry; `None` if fatal.
    #[must_use]
    pub const fn skipped_outcome(&self) -> Option<EntryOutcome> {
        match self {
            Self::AlreadyExists { .. } => Some(EntryOutcome::AlreadyExists),
            Self::InvalidDotfile { .. } => Some(EntryOutcome::NotADotfile),
            Self::PathResolution { .. } | Self::DirectoryRead { .. } | Self::LinkCreation { .. } => {
                None
            }
        }
    }

    /// Whether this error stops the whole operation rather than a single entry.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        self.skipped_outcome().is_none()
    }

    /// Entry name for per-entry errors, `None` for directory-level errors.
    #[must_use]
    pub fn entry_name(&self) -> Option<&OsString> {
        match self {
            Self::AlreadyExists { name }
            | Self::InvalidDotfile { name }
            | Self::LinkCreation { name, .. } => Some(name),
            Self::PathResolution { .. } | Self::DirectoryRead { .. } => None,
        }
    }
}

/// Errors that arise while resolving the run configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An explicitly requested settings file does not exist.
    #[error("settings file not found: {}", path.display())]
    NotFound {
        /// Requested path.
        path: PathBuf,
    },

    /// An I/O error occurred while reading the settings file.
    #[error("IO error reading settings file {}: {source}", path.display())]
    Io {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The settings file is not valid TOML for the expected schema.
    #[error("invalid settings file {}: {message}", path.display())]
    Parse {
        /// Path to the offending file.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// Neither the command line nor the settings file named a source directory.
    #[error("no source directory specified")]
    MissingSource,

    /// The home directory was needed but could not be determined.
    #[error("home directory could not be determined")]
    HomeDirUnavailable,
}
