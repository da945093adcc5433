//! Command-line interface definitions.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI entry point.
#[derive(Parser, Debug)]
#[command(
    name = "dotgo",
    about = "dotgo is a tool to take your dotfiles to the moon",
    version
)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a symbolic link for files
    #[command(visible_alias = "ln")]
    Link(LinkOpts),
    /// Print version information
    Version,
}

/// Options for the `link` subcommand.
#[derive(Parser, Debug, Clone, Default)]
pub struct LinkOpts {
    /// Source directory to read from
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// Destination directory to write the links to (defaults to the home directory)
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// Link directory entries too; `-r false` skips them [default: true]
    #[arg(short, long, num_args = 0..=1, default_missing_value = "true")]
    pub recursive: Option<bool>,

    /// Files to link regardless of them being a dotfile (repeatable; duplicates are ignored)
    #[arg(short, long = "whitelist", value_name = "NAME")]
    pub whitelist: Vec<String>,

    /// Settings file [default: $XDG_CONFIG_HOME/dotgo/config.toml]
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
