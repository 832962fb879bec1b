use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::{AppError, Result};

/// Installs the global subscriber. Logs go to a file so they never draw over the TUI.
pub fn init(config: &Config) -> Result<PathBuf> {
    let filter = EnvFilter::try_new(&config.log_level).map_err(|source| AppError::LogFilter {
        filter: config.log_level.clone(),
        source,
    })?;

    let path = config.log_path();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(path)
}
