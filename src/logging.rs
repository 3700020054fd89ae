use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::app::settings::ensure_dirs_exist;

const DEFAULT_FILTER: &str = "info";

/// Install a file-backed tracing subscriber.
///
/// The terminal belongs to the UI, so events only ever go to `log_file`
/// through a non-blocking writer. `RUST_LOG` overrides the default filter.
/// `log` records from dependencies are bridged into tracing. The returned
/// guard flushes pending lines when dropped and must outlive the UI.
pub fn init_logging(log_file: &Path) -> anyhow::Result<WorkerGuard> {
    let dir = log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let name = log_file
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("log path `{}` has no file name", log_file.display()))?;
    ensure_dirs_exist(&[dir])?;

    let appender = tracing_appender::rolling::never(dir, name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let layer = fmt::layer().with_target(true).with_ansi(false).with_writer(writer);

    let subscriber = tracing_subscriber::registry().with(filter).with(layer);
    tracing::subscriber::set_global_default(subscriber)?;
    tracing_log::LogTracer::init()?;
    Ok(guard)
}
