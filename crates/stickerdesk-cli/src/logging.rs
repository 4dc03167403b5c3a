//! Log output for the CLI.
//!
//! Human-facing logs go to stderr at `warn` unless `RUST_LOG` says otherwise.
//! The same events are appended to a daily rolling file under the logs
//! directory. When that directory is unusable, logging continues on stderr
//! only.

use anyhow::{Context, Result};
use stickerdesk_infrastructure::DeskPaths;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

const DEFAULT_FILTER: &str = "warn";
const LOG_FILE_PREFIX: &str = "stickerdesk.log";

/// Installs the global subscriber.
///
/// # Returns
///
/// The guard flushing the file writer, `None` when file logging is off.
/// Keep it alive until exit.
pub fn init(paths: &DeskPaths) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    match file_writer(paths) {
        Ok((writer, guard)) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .with(fmt::layer().with_writer(writer).with_ansi(false))
                .try_init()
                .context("Failed to install log subscriber")?;
            Ok(Some(guard))
        }
        Err(e) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .try_init()
                .context("Failed to install log subscriber")?;
            tracing::warn!(error = %e, "File logging disabled");
            Ok(None)
        }
    }
}

/// Opens the daily rolling log file, creating the logs directory first.
fn file_writer(paths: &DeskPaths) -> Result<(NonBlocking, WorkerGuard)> {
    let logs_dir = paths.logs_dir()?;
    std::fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create log directory {}", logs_dir.display()))?;

    let file_appender = tracing_appender::rolling::daily(&logs_dir, LOG_FILE_PREFIX);
    Ok(tracing_appender::non_blocking(file_appender))
}
