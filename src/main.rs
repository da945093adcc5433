//! `dotgo` command-line entry point.
use anyhow::Result;
use clap::Parser;
use std::sync::Arc;

use dotgo::{cli, commands, logging};

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = cli::Cli::parse();

    match args.command {
        cli::Command::Link(opts) => {
            logging::init_subscriber(args.verbose, "link");
            let logger = Arc::new(logging::Logger::new("link"));
            let result = commands::link::run(&opts, logger.clone());
            if result.is_err()
                && let Some(path) = logger.log_path()
            {
                logger.info(&format!("full log: {}", path.display()));
            }
            result
        }
        cli::Command::Version => {
            let version = option_env!("DOTGO_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
            println!("dotgo {version}");
            Ok(())
        }
    }
}
