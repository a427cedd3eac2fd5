//! Rolling File Logger
//!
//! Installs a global `tracing` subscriber that writes to `<dir>/<app>.log`,
//! rotating to `<app>.log.1`, `<app>.log.2`, ... once the active file grows
//! past a size limit. The most recent lines are also kept in memory.
//!
//! `log` records are forwarded too, so `log::info!` works after `init_logger`.

mod writer;

use std::path::PathBuf;
use std::sync::OnceLock;

use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::util::SubscriberInitExt;

pub use writer::{RollingConfig, RollingLog};

static LOGGER: OnceLock<RollingLog> = OnceLock::new();

/// Local wall-clock timestamps
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Initialize the global logger with default limits
pub fn init_logger(log_dir: PathBuf, app_name: &str) -> Result<(), String> {
    init_logger_with(log_dir, app_name, RollingConfig::default())
}

/// Initialize the global logger
pub fn init_logger_with(log_dir: PathBuf, app_name: &str, config: RollingConfig) -> Result<(), String> {
    if LOGGER.get().is_some() {
        return Err("logger already initialized".to_string());
    }

    let log = RollingLog::open(&log_dir, app_name, config)
        .map_err(|e| format!("failed to open log in {}: {}", log_dir.display(), e))?;

    tracing_subscriber::fmt()
        .with_writer(log.clone())
        .with_ansi(false)
        .with_target(true)
        .with_timer(LocalTime)
        .finish()
        .try_init()
        .map_err(|e| e.to_string())?;

    LOGGER.set(log).map_err(|_| "logger already initialized".to_string())?;
    tracing::info!(app = app_name, "Logger initialized");
    Ok(())
}

fn ensure_initialized() -> Result<(), String> {
    LOGGER.get().map(|_| ()).ok_or_else(|| "logger not initialized".to_string())
}

pub fn info(msg: &str) -> Result<(), String> {
    ensure_initialized()?;
    tracing::info!("{}", msg);
    Ok(())
}

pub fn error(msg: &str) -> Result<(), String> {
    ensure_initialized()?;
    tracing::error!("{}", msg);
    Ok(())
}

/// Most recent log lines, oldest first (empty before init)
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(RollingLog::recent_lines).unwrap_or_default()
}
