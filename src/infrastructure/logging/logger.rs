//! Subscriber setup driven by [`LoggingConfig`].

use anyhow::{Context, Result};
use std::io;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use crate::domain::models::config::{LogFormat, LoggingConfig, RotationPolicy};

/// File name of rolling log files
pub const LOG_FILE_NAME: &str = "yggdrasil.log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Logger implementation using tracing
pub struct LoggerImpl {
    _guard: Option<WorkerGuard>,
}

impl LoggerImpl {
    /// Install the global subscriber
    ///
    /// Console output goes to stderr in the configured format. When
    /// `log_dir` is set, JSON records are also written to a rolling file; the
    /// returned value must be kept alive to flush it.
    ///
    /// `debug` is the registry's debug flag and lowers the threshold to at
    /// least `debug`. `RUST_LOG` still takes precedence.
    pub fn init(config: &LoggingConfig, debug: bool) -> Result<Self> {
        let level = effective_level(&config.level, debug)?;

        let env_filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::from_level(level).into())
            .from_env_lossy();

        let mut layers: Vec<BoxedLayer> = Vec::new();

        let console: BoxedLayer = match config.format {
            LogFormat::Json => tracing_subscriber::fmt::layer()
                .json()
                .with_writer(io::stderr)
                .with_current_span(true)
                .with_target(true)
                .boxed(),
            LogFormat::Pretty => tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .boxed(),
        };
        layers.push(console);

        let guard = if let Some(ref log_dir) = config.log_dir {
            let file_appender = match config.rotation {
                RotationPolicy::Daily => rolling::daily(log_dir, LOG_FILE_NAME),
                RotationPolicy::Hourly => rolling::hourly(log_dir, LOG_FILE_NAME),
                RotationPolicy::Never => rolling::never(log_dir, LOG_FILE_NAME),
            };
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

            // File output is always JSON
            layers.push(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(non_blocking_file)
                    .with_ansi(false)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .boxed(),
            );
            Some(guard)
        } else {
            None
        };

        tracing_subscriber::registry()
            .with(layers)
            .with(env_filter)
            .try_init()
            .context("Failed to install tracing subscriber")?;

        tracing::debug!(
            level = %level,
            format = ?config.format,
            file_output = config.log_dir.is_some(),
            "logger initialized"
        );

        Ok(Self { _guard: guard })
    }
}

/// Resolve the default level from the configured one and the debug flag
pub fn effective_level(level: &str, debug: bool) -> Result<Level> {
    let level = parse_log_level(level)?;
    if debug && level != Level::TRACE {
        Ok(Level::DEBUG)
    } else {
        Ok(level)
    }
}

/// Parse log level string to Level
fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => anyhow::bail!("Invalid log level: {level}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert!(matches!(parse_log_level("trace"), Ok(Level::TRACE)));
        assert!(matches!(parse_log_level("debug"), Ok(Level::DEBUG)));
        assert!(matches!(parse_log_level("info"), Ok(Level::INFO)));
        assert!(matches!(parse_log_level("warn"), Ok(Level::WARN)));
        assert!(matches!(parse_log_level("error"), Ok(Level::ERROR)));
        assert!(matches!(parse_log_level("TRACE"), Ok(Level::TRACE)));
        assert!(parse_log_level("invalid").is_err());
    }

    #[test]
    fn test_debug_flag_lowers_threshold() {
        assert_eq!(effective_level("info", true).unwrap(), Level::DEBUG);
        assert_eq!(effective_level("error", true).unwrap(), Level::DEBUG);
        assert_eq!(effective_level("trace", true).unwrap(), Level::TRACE);
        assert_eq!(effective_level("warn", false).unwrap(), Level::WARN);
    }

    #[test]
    fn test_logger_init_console_only() {
        let config = LoggingConfig {
            format: LogFormat::Pretty,
            ..LoggingConfig::default()
        };

        // Installs the global subscriber; no other unit test does.
        let result = LoggerImpl::init(&config, false);
        assert!(result.is_ok());
    }
}
