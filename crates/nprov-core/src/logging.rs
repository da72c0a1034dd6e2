//! Logging init: file under the XDG state dir, or fallback to stderr.

use anyhow::Result;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,nprov=debug"))
}

/// Path of the log file, `~/.local/state/nprov/nprov.log`.
pub fn log_file_path() -> Result<PathBuf> {
    let state_dir = xdg::BaseDirectories::with_prefix("nprov")?.get_state_home();
    Ok(state_dir.join("nprov.log"))
}

/// Initialize structured logging to the state-dir log file.
/// Returns Err when the file cannot be opened (e.g. unwritable dir) so the
/// caller can fall back to [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let path = log_file_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;

    // Hand each log line a fresh handle; if cloning fails mid-run the line
    // goes to stderr instead of being lost.
    let writer = move || -> Box<dyn Write> {
        match file.try_clone() {
            Ok(f) => Box::new(f),
            Err(_) => Box::new(io::stderr()),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(default_filter())
        .with_writer(writer)
        .with_ansi(false)
        .init();

    tracing::debug!("nprov logging initialized at {}", path.display());
    Ok(())
}

/// Initialize logging to stderr only (no file). Use when [`init_logging`]
/// fails so the CLI doesn't crash.
pub fn init_logging_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(default_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}
