//! Structured Logger
//!
//! Wraps `tracing` to provide console output, optional JSON formatting,
//! file rotation (NDJSON) and environment-based level control.

use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Base name of the rolling log file: `podsite.log.YYYY-MM-DD`.
pub const LOG_FILE_NAME: &str = "podsite.log";

/// `RUST_LOG` wins over the configured level; an unparsable level falls back
/// to `info`.
fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the global structured logger.
///
/// Logs go to stderr so command output on stdout stays clean. When
/// `log_dir` is set, a daily rolling NDJSON file is written there too.
/// Calling this more than once is a no-op.
pub fn init_logger(level: &str, log_dir: Option<&Path>, json_console: bool) {
    let env_filter = build_filter(level);

    let console_plain = (!json_console).then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_ansi(true)
    });
    let console_json = json_console.then(|| {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_ansi(false)
    });

    let file_layer = log_dir.map(|dir| {
        let file_appender = RollingFileAppender::new(Rotation::DAILY, dir, LOG_FILE_NAME);
        fmt::layer()
            .json()
            .with_writer(file_appender)
            .with_ansi(false)
    });

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_plain)
        .with(console_json)
        .with(file_layer)
        .try_init();
}
