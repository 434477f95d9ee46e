//! Logging configuration using the tracing ecosystem.
//!
//! Logs go to a daily rotating file so that command output on stdout stays
//! machine-readable.

use std::path::PathBuf;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Default log level if neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "rccmd=info,warn";

/// Initialize the logging system.
///
/// Filter precedence: `RUST_LOG`, then `configured`, then
/// [`DEFAULT_LOG_FILTER`].
///
/// # Log Directory
///
/// Logs are stored in the platform-specific local data directory:
/// - Linux: `~/.local/share/rccmd/logs/`
/// - macOS: `~/Library/Application Support/rccmd/logs/`
/// - Windows: `C:\Users\<User>\AppData\Local\rccmd\logs\`
///
/// # Errors
///
/// Returns an error if:
/// - The log directory cannot be determined or created
/// - The tracing subscriber cannot be set
pub fn init(configured: Option<&str>) -> anyhow::Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "rccmd.log");

    let subscriber = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(build_filter(configured));

    tracing::subscriber::set_global_default(subscriber)?;

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "rccmd starting up");
    tracing::debug!(log_dir = %log_dir.display(), "Log directory");

    Ok(())
}

fn build_filter(configured: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured.unwrap_or(DEFAULT_LOG_FILTER)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Get the log directory path.
fn get_log_directory() -> anyhow::Result<PathBuf> {
    let base_dir = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine local data directory"))?;

    Ok(base_dir.join("rccmd").join("logs"))
}

/// Get the path where logs are stored.
pub fn log_directory() -> Option<PathBuf> {
    get_log_directory().ok()
}

/// Log application shutdown.
pub fn shutdown() {
    tracing::debug!("rccmd shutting down");
}
