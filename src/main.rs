mod cards;
mod config;
mod error;
mod filter;
mod format;
mod forms;
mod models;
mod notifications;
mod registry;
mod run;
mod statement;
mod store;
mod summary;
mod ui;

use std::fs::{self, File};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let config = config::load().context("Failed to load configuration")?;
    let tui = args.len() < 2;
    init_tracing(&config.log_filter, tui);

    let mut store = store::Store::sample().context("Failed to load sample data")?;
    info!(tui, "findash starting");

    if tui {
        run::as_tui(&mut store, &config)
    } else {
        run::as_cli(&args, &mut store, &config)
    }
}

/// CLI logs go to stderr. The TUI owns the terminal, so its logs go to
/// `findash.log` in the data directory, or nowhere if that is unavailable.
fn init_tracing(fallback: &str, tui: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    if !tui {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
        return;
    }

    if let Some(file) = open_log_file() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    }
}

fn open_log_file() -> Option<File> {
    let proj_dirs = directories::ProjectDirs::from("com", "findash", "FinDash")?;
    let data_dir = proj_dirs.data_dir();
    fs::create_dir_all(data_dir).ok()?;
    File::options()
        .create(true)
        .append(true)
        .open(data_dir.join("findash.log"))
        .ok()
}
