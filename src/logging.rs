use std::path::Path;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::EnvFilter;

pub const LOG_PREFIX: &str = "aurafarm";

/// Sends `tracing` output to a daily rolling file under `<dir>/logs`.
///
/// The terminal belongs to the dashboard, so nothing is written to stdout.
/// Keep the returned guard alive for the whole run or buffered lines are lost.
pub fn init(dir: &Path, level: Option<&str>) -> Result<WorkerGuard> {
    let appender = tracing_appender::rolling::Builder::new()
        .rotation(Rotation::DAILY)
        .max_log_files(5)
        .filename_prefix(LOG_PREFIX)
        .build(dir.join("logs"))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = match level {
        Some(level) => EnvFilter::try_new(format!("{}={level}", env!("CARGO_PKG_NAME")))?,
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("{}=info", env!("CARGO_PKG_NAME")))),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    Ok(guard)
}
