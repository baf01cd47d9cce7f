//! File logging
//!
//! The terminal belongs to the UI, so tracing output goes to a daily rolling
//! file under the data directory.

use crate::{APP_NAME, LOG_FILE};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Keeps the background log writer alive; drop it last
pub struct LoggingGuard {
    _guard: WorkerGuard,
}

/// Directory for log files, created on demand
fn log_dir() -> std::io::Result<PathBuf> {
    let dir = dirs::data_dir()
        .map(|d| d.join(APP_NAME).join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join(APP_NAME).join("logs"));
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Install the global subscriber. `RUST_LOG` takes precedence over
/// `default_filter`. Returns `None` when logging could not be set up.
pub fn init(default_filter: &str) -> Option<LoggingGuard> {
    let log_dir = log_dir()
        .or_else(|_| -> std::io::Result<PathBuf> {
            let dir = std::env::temp_dir().join(APP_NAME).join("logs");
            std::fs::create_dir_all(&dir)?;
            Ok(dir)
        })
        .ok()?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .with_file(true)
            .with_line_number(true),
    );

    if subscriber.try_init().is_err() {
        return None;
    }

    std::panic::set_hook(Box::new(|panic_info| {
        tracing::error!(panic = %panic_info, "panic");
    }));

    tracing::info!(log_dir = %log_dir.display(), "tracing initialized");

    Some(LoggingGuard { _guard: guard })
}
