//! Dotfile linking engine.
//!
//! Links the dotfiles of a source directory into a destination directory
//! (normally `$HOME`) as symbolic links. Non-dotfiles are skipped unless
//! whitelisted, `.git`, `.gitignore` and `.DS_Store` are never linked, and a
//! single bad entry does not stop the run.
//!
//! The public API is organised into layers:
//!
//! - **[`linker`]**: entry classification and the directory link operation
//! - **[`resources`]**: the per-entry symlink primitive
//! - **[`operations`]**: the injectable filesystem provider
//! - **[`config`]**: run configuration and the optional settings file
//! - **[`commands`]**: command-line orchestration
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod linker;
pub mod logging;
pub mod operations;
pub mod resources;
