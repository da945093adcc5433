//! Top-level subcommand handlers.
pub mod link;
