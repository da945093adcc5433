//! The linking engine.
//!
//! A [`Linker`] turns a set of source entries into symbolic links and
//! reports, per entry, what happened. [`DirOperation`] is the only
//! implementor: it links the immediate entries of one directory.
pub mod classify;
pub mod directory;

use std::ffi::OsString;

use thiserror::Error;

use crate::error::LinkError;

pub use classify::{Classification, RESERVED, classify};
pub use directory::DirOperation;

/// Something that can create links between a source and a destination.
pub trait Linker {
    /// Human-readable description (`dest <- source`).
    fn description(&self) -> String;

    /// Create the links.
    ///
    /// # Errors
    ///
    /// Returns [`LinkAbort`] on the first fatal error, carrying the counts
    /// observed up to that point.
    fn link(&self) -> Result<LinkReport, LinkAbort>;
}

/// Run any [`Linker`].
///
/// # Errors
///
/// Propagates the linker's [`LinkAbort`].
pub fn link(linker: &dyn Linker) -> Result<LinkReport, LinkAbort> {
    linker.link()
}

/// What happened to a single entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOutcome {
    /// A symlink was created.
    Linked,
    /// Reserved name, never linked.
    Blacklisted,
    /// Directory skipped because recursion is disabled.
    Directory,
    /// The destination path was already occupied.
    AlreadyExists,
    /// Neither dot-prefixed nor whitelisted.
    NotADotfile,
}

impl std::fmt::Display for EntryOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Linked => "linked",
            Self::Blacklisted => "blacklisted",
            Self::Directory => "directory",
            Self::AlreadyExists => "already exists",
            Self::NotADotfile => "not a dotfile",
        };
        f.write_str(s)
    }
}

/// Aggregate result of a link run.
///
/// `unresolved` starts at `total` and drops by one per created link, so
/// skipped entries and entries never reached both count as unresolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkReport {
    /// Entries found in the source directory.
    pub total: usize,
    /// Entries not (yet) linked.
    pub unresolved: usize,
    /// Per-entry outcomes in processing order.
    pub entries: Vec<(OsString, EntryOutcome)>,
}

impl LinkReport {
    /// A report for `total` entries, none resolved yet.
    #[must_use]
    pub const fn new(total: usize) -> Self {
        Self {
            total,
            unresolved: total,
            entries: Vec::new(),
        }
    }

    /// Number of links created.
    #[must_use]
    pub const fn linked(&self) -> usize {
        self.total - self.unresolved
    }

    /// Record an outcome; a [`EntryOutcome::Linked`] resolves one entry.
    pub fn record(&mut self, name: OsString, outcome: EntryOutcome) {
        if outcome == EntryOutcome::Linked {
            self.unresolved = self.unresolved.saturating_sub(1);
        }
        self.entries.push((name, outcome));
    }

    /// Outcome recorded for `name`, if it was processed.
    #[must_use]
    pub fn outcome(&self, name: &str) -> Option<EntryOutcome> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, o)| *o)
    }
}

/// A fatal error together with the partial report.
#[derive(Error, Debug)]
#[error("{error} ({} of {} entries unresolved)", report.unresolved, report.total)]
pub struct LinkAbort {
    /// Counts observed before the failure.
    pub report: LinkReport,
    /// The failure itself.
    #[source]
    pub error: LinkError,
}
