//! Log initialisation.
//!
//! The terminal interface owns stdout, so log records go to a file.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::Path;

/// Returns the default filter for a `-v` count.
pub fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialises the global logger, appending to `path`.
///
/// `RUST_LOG` takes precedence over the verbosity-derived default.
pub fn init(path: &Path, verbose: u8) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory: {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file: {}", path.display()))?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_filter(verbose)),
    )
    .format_timestamp_secs()
    .format_module_path(true)
    .target(env_logger::Target::Pipe(Box::new(file)))
    .try_init()
    .context("failed to initialise logger")?;

    log::info!("logging to {}", path.display());
    Ok(())
}
