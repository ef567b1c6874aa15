//! zettl - a terminal notebook for short text notes backed by SQLite

pub mod cli;
pub mod domain;
pub mod logging;
pub mod store;
pub mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use cli::{Cli, config::Config};
use store::SqliteStore;
use tui::App;

/// Main entry point for the application.
///
/// Opens the store once, hands it to the terminal interface, and shuts it
/// down after the interface exits. A store that cannot be opened is fatal.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    let log_path = config.log_file(cli.log_file.as_ref());
    logging::init(&log_path, cli.verbose)?;

    let db_path = config.db_path(cli.db.as_ref());
    let store = SqliteStore::open(&db_path)
        .with_context(|| format!("failed to open note database: {}", db_path.display()))?;
    match store.count() {
        Ok(count) => info!("{count} notes in store"),
        Err(err) => warn!("could not count notes: {err}"),
    }

    let mut app = App::new(store).with_default_tag(config.default_tag());
    let outcome = tui::run(&mut app);

    let mut store = app.into_repo();
    let closed = store.shutdown().context("failed to close note database");
    outcome.and(closed)
}
