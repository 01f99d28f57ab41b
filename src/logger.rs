//! Logging setup.
//!
//! All logging goes through the `log` macros. At startup [`init`] installs a
//! `fern` dispatch that feeds two outputs: an in-memory [`Logger`] buffer
//! (shown in the logs dialog) and, when enabled in the config, a log file.
//! Nothing is written to the terminal while the UI owns it.

use crate::config::LoggingConfig;
use crate::constants::{APP_NAME, LOG_BUFFER_CAPACITY, LOG_FILE_NAME};
use anyhow::{Context, Result};
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Shared, bounded in-memory log buffer
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl Logger {
    pub fn new() -> Self {
        Self::with_capacity(LOG_BUFFER_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            logs: Arc::new(Mutex::new(VecDeque::new())),
            capacity: capacity.max(1),
        }
    }

    /// Add a log entry, dropping the oldest one when full
    pub fn log(&self, message: String) {
        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() == self.capacity {
                logs.pop_front();
            }
            logs.push_back(message);
        }
    }

    /// Get all logs, newest first
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    pub fn len(&self) -> usize {
        self.logs.lock().map(|logs| logs.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Default log file location under the XDG data directory
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join(APP_NAME).join(LOG_FILE_NAME))
}

/// Build the dispatch described by `config`, feeding `sink`.
pub fn dispatch(config: &LoggingConfig, sink: Logger) -> Result<fern::Dispatch> {
    let level = config.level_filter()?;

    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(fern::Output::call(move |record| sink.log(record.args().to_string())));

    if config.enabled {
        let path = match &config.file {
            Some(path) => path.clone(),
            None => get_log_file_path()?,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file =
            fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
        dispatch = dispatch.chain(file);
    }

    Ok(dispatch)
}

/// Install the global logger. Can only succeed once per process.
pub fn init(config: &LoggingConfig, sink: &Logger) -> Result<()> {
    dispatch(config, sink.clone())?
        .apply()
        .context("Failed to install logger")?;
    Ok(())
}
