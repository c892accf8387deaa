//! Structured Logger
//!
//! Wraps `tracing` with a console layer, an optional rolling NDJSON file
//! layer and environment-based level control.

use std::path::Path;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_PREFIX: &str = "cronlens.log";

/// Initialize the global logger. `RUST_LOG` overrides `level`.
///
/// Console output goes to stderr so stdout carries only command output.
/// When `log_dir` is set, a daily-rotating `cronlens.log.YYYY-MM-DD` file
/// receives the same events as JSON. Calling this twice is a no-op.
///
/// If the log directory cannot be used, the console logger is still
/// installed and the appender error is returned.
pub fn init_logger(level: &str, log_dir: Option<&Path>) -> Result<(), InitError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(true);

    let (file_appender, file_error) = match log_dir.map(daily_appender).transpose() {
        Ok(appender) => (appender, None),
        Err(e) => (None, Some(e)),
    };
    let file_layer = file_appender.map(|appender| {
        fmt::layer()
            .json()
            .with_writer(appender)
            .with_ansi(false)
    });

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init();

    match file_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn daily_appender(dir: &Path) -> Result<RollingFileAppender, InitError> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .build(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        assert!(init_logger("debug", Some(dir.path())).is_ok());
        assert!(init_logger("info", None).is_ok());
        tracing::info!("logger initialised twice without panicking");
    }

    #[test]
    fn unusable_log_dir_is_reported() {
        // A directory cannot be created beneath a regular file.
        let file = tempfile::NamedTempFile::new().unwrap();
        let result = init_logger("info", Some(&file.path().join("logs")));
        assert!(result.is_err());
    }
}
