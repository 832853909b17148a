//! Diagnostic logging to disk.
//!
//! The terminal is owned by the UI, so tracing output goes to a file under
//! the user state directory (default: `~/.local/state/emojiform/emojiform.log`).
//! `RUST_LOG` overrides the configured filter.

use crate::config::model::LoggingConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn log_path() -> PathBuf {
    dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("emojiform")
        .join("emojiform.log")
}

/// Install the global tracing subscriber, appending to the log file.
/// On failure the caller should continue without diagnostics rather than
/// abort; tracing macros are no-ops when no subscriber is installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let path = log_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.filter.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(())
}
