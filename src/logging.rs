// src/logging.rs
use anyhow::{Context, Result};
use tracing::Dispatch;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LogSettings;

pub const LOG_FILE_NAME: &str = "seed-peers.log";

/// Install the global subscriber built by [`build`], reading `RUST_LOG`.
///
/// Keep the returned guard alive until exit, or buffered file output is lost.
pub fn init(settings: &LogSettings) -> Result<Option<WorkerGuard>> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let (dispatch, guard) = build(settings, rust_log.as_deref())?;
    tracing::dispatcher::set_global_default(dispatch).context("logging already initialized")?;
    Ok(guard)
}

/// Logs go to stderr so stdout only carries peer addresses, plus
/// `<dir>/seed-peers.log` when a directory is configured.
pub fn build(
    settings: &LogSettings,
    rust_log: Option<&str>,
) -> Result<(Dispatch, Option<WorkerGuard>)> {
    let filter = env_filter(settings, rust_log)?;

    let stderr_layer = if settings.json {
        fmt::layer().json().with_writer(std::io::stderr).boxed()
    } else {
        fmt::layer().with_writer(std::io::stderr).boxed()
    };

    let (file_layer, guard) = match &settings.dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer);

    Ok((Dispatch::new(subscriber), guard))
}

/// A non-empty `RUST_LOG` replaces `settings.filter`; either one must parse.
fn env_filter(settings: &LogSettings, rust_log: Option<&str>) -> Result<EnvFilter> {
    match rust_log.map(str::trim).filter(|s| !s.is_empty()) {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("bad {}: {directives}", EnvFilter::DEFAULT_ENV)),
        None => EnvFilter::try_new(&settings.filter)
            .with_context(|| format!("bad log filter: {}", settings.filter)),
    }
}
