use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{DirectoryError, Result};

/// Initialize the logging system
///
/// # Arguments
/// * `verbose` - Enable verbose (DEBUG) logging
/// * `log_file` - Optional path to log file. If None, logs only to stderr
///
/// Fails if the log directory cannot be created or opened, or if a global
/// subscriber is already installed.
pub fn init(verbose: bool, log_file: Option<PathBuf>) -> Result<()> {
    // RUST_LOG wins over the verbose flag
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    let result = match log_file {
        Some(log_path) => {
            let file_layer = fmt::layer()
                .with_writer(file_appender(&log_path)?)
                .with_ansi(false) // No colors in file
                .json();
            subscriber.with(file_layer).try_init()
        }
        None => subscriber.try_init(),
    };

    result.map_err(|e| DirectoryError::Logging(e.to_string()))
}

/// Daily-rotated appender writing `<dir>/<name>.<date>`.
fn file_appender(log_path: &Path) -> Result<RollingFileAppender> {
    let dir = log_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("user-directory.log");

    std::fs::create_dir_all(dir)?;

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(name)
        .build(dir)
        .map_err(|e| {
            DirectoryError::Logging(format!("cannot open log file in {}: {}", dir.display(), e))
        })
}

/// Filter used when `RUST_LOG` is unset.
fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("user_directory={}", level)
}
