//! Entry classification: which directory entries are eligible for linking.
use std::collections::HashSet;
use std::ffi::{OsStr, OsString};

/// Names that are never linked, whitelisted or not.
pub const RESERVED: [&str; 3] = [".git", ".gitignore", ".DS_Store"];

/// Decision for a single directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Name is in [`RESERVED`].
    Blacklisted,
    /// Entry is a directory and recursion is disabled.
    Directory,
    /// Neither dot-prefixed nor whitelisted.
    NotADotfile,
    /// May be linked.
    Eligible,
}

/// Returns `true` if `name` is one of the [`RESERVED`] names.
#[must_use]
pub fn is_reserved(name: &OsStr) -> bool {
    RESERVED.iter().any(|r| name == *r)
}

/// Returns `true` if `name` starts with a literal `.`.
#[must_use]
pub fn has_dot_prefix(name: &OsStr) -> bool {
    name.as_encoded_bytes().first() == Some(&b'.')
}

/// Classify one entry.
///
/// The reserved check runs first, so a whitelisted reserved name is still
/// [`Classification::Blacklisted`].
#[must_use]
pub fn classify(
    name: &OsStr,
    is_dir: bool,
    recursive: bool,
    whitelist: &HashSet<OsString>,
) -> Classification {
    if is_reserved(name) {
        Classification::Blacklisted
    } else if !recursive && is_dir {
        Classification::Directory
    } else if has_dot_prefix(name) || whitelist.contains(name) {
        Classification::Eligible
    } else {
        Classification::NotADotfile
    }
}
