//! The `link` command: resolve configuration, run the link and print a summary.
use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

use crate::cli::LinkOpts;
use crate::config::{LinkConfig, Settings};
use crate::error::DotgoError;
use crate::linker::{self, DirOperation, LinkReport};
use crate::logging::Log;

/// Run the link command.
///
/// # Errors
///
/// Returns an error if the configuration cannot be resolved, the operation
/// cannot be built, or linking aborts on a fatal error.
pub fn run(opts: &LinkOpts, log: Arc<dyn Log>) -> Result<()> {
    let settings = Settings::discover(opts.config.as_deref()).map_err(DotgoError::from)?;
    let home = dirs::home_dir();
    let config = resolve_config(opts, settings, home.as_deref())?;

    log.debug(&format!(
        "source: {}, dest: {}, recursive: {}, whitelist: {:?}",
        config.source.display(),
        config.dest.display(),
        config.recursive,
        config.whitelist
    ));

    let report = execute(&config, log)?;
    println!("{}", summary(&report, &config.dest));
    Ok(())
}

/// Layer the command-line flags over the settings file.
///
/// # Errors
///
/// Returns an error if no source is given or the destination cannot be determined.
pub fn resolve_config(
    opts: &LinkOpts,
    settings: Settings,
    home: Option<&Path>,
) -> Result<LinkConfig, DotgoError> {
    let flags = Settings {
        source: opts.source.clone(),
        dest: opts.dest.clone(),
        recursive: opts.recursive,
        whitelist: opts.whitelist.clone(),
    };
    Ok(settings.merge(flags).into_link_config(home)?)
}

/// Build the directory operation for `config` and run it.
///
/// # Errors
///
/// Returns [`DotgoError::Link`] if the paths cannot be resolved and
/// [`DotgoError::Aborted`] if linking stops on a fatal error.
pub fn execute(config: &LinkConfig, log: Arc<dyn Log>) -> Result<LinkReport, DotgoError> {
    let op = DirOperation::new(config, log)?;
    Ok(linker::link(&op)?)
}

/// One-line human-readable summary of a finished run.
#[must_use]
pub fn summary(report: &LinkReport, dest: &Path) -> String {
    format!(
        "linked {}/{} files to {} ({} unresolved)",
        report.linked(),
        report.total,
        dest.display(),
        report.unresolved
    )
}
